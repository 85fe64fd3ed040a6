mod chambers;
mod error;

pub mod observers;
pub mod property;

pub use chambers::{SyncTestChambers, TestChambers, TEST_CHAMBER_NUMBER_NAME};
pub use error::{ObservableError, ObservableResult};
