//! Small, independent illustrations of classic design patterns.

pub mod behavioral;
pub mod creational;
pub mod structural;
