use thiserror::Error;

/// Result type for feature-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading feature data
#[derive(Error, Debug)]
pub enum Error {
    #[error("property '{key}' is not numeric: '{value}'")]
    NotNumeric { key: String, value: String },
}
