use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ObservableError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Property lock poisoned by a panicking observer")]
    Poisoned,
}

pub type ObservableResult<T> = Result<T, ObservableError>;
