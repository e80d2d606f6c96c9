//! Error types for application commands.

use barcraft_core::ConfigError;
use barcraft_ean::ChecksumError;
use barcraft_store::StoreError;
use serde::Serialize;

/// Serializable error returned by every command.
#[derive(Debug, Serialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct CommandError {
    /// Error code for frontend handling (e.g., "INVALID_CODE")
    pub code: String,
    /// User-friendly error message
    pub message: String,
    /// Optional structured context
    pub details: Option<serde_json::Value>,
}

impl CommandError {
    /// Create a new command error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a command error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Convert StoreError to CommandError for serialization.
impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidFormat(msg) => Self::new(
                "IMPORT_INVALID_FORMAT",
                format!("Failed to import: {msg}"),
            ),
            StoreError::Persistence(msg) => {
                Self::new("PERSISTENCE_FAILED", format!("Could not save barcodes: {msg}"))
            }
            StoreError::InvalidKey(key) => Self::with_details(
                "INVALID_STORAGE_KEY",
                "Storage key is not usable",
                serde_json::json!({ "key": key }),
            ),
            StoreError::Serialization(msg) => {
                Self::new("SERIALIZATION_ERROR", format!("Serialization error: {msg}"))
            }
            StoreError::Io(err) => Self::from(err),
        }
    }
}

/// Convert ChecksumError to CommandError.
impl From<ChecksumError> for CommandError {
    fn from(err: ChecksumError) -> Self {
        Self::new("INVALID_CHECKSUM_INPUT", err.to_string())
    }
}

/// Convert ConfigError to CommandError.
impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        Self::new("CONFIG_ERROR", err.to_string())
    }
}

/// Convert std::io::Error to CommandError.
impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        Self::new("FILESYSTEM_ERROR", format!("Filesystem error: {err}"))
    }
}
