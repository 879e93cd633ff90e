use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during wall-mesh synthesis
#[derive(Error, Debug)]
pub enum Error {
    #[error("Triangulation failed: {0}")]
    Triangulation(String),

    #[error("Invalid footprint: {0}")]
    InvalidFootprint(String),

    #[error("Feature property error: {0}")]
    Core(#[from] tilewall_core::Error),
}
