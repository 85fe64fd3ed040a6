pub mod app;
pub mod log;

mod env_list;
