//! Store error types.
//!
//! Provides error handling for collection and persistence operations using `thiserror`.

use thiserror::Error;

/// Collection store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Imported text is not a JSON array of barcode records.
    #[error("invalid import format: {0}")]
    InvalidFormat(String),

    /// The persistence backend refused a read or write.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// Storage key cannot be mapped to a location.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error during persistence.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

impl From<StoreError> for barcraft_core::BarcraftError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(e) => Self::Io(e),
            other => Self::Store(other.to_string()),
        }
    }
}
