//! Error types for the checksum engine.

use thiserror::Error;

/// Errors raised when the checksum is requested for a malformed body.
///
/// Validation of candidate codes never produces these; it answers `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// Body does not have the number of digits the symbology requires.
    #[error("checksum input must be {expected} digits, got {actual}")]
    InvalidLength {
        /// Required number of digits
        expected: usize,
        /// Number of characters received
        actual: usize,
    },

    /// Body contains something other than an ASCII decimal digit.
    #[error("checksum input has non-digit {found:?} at position {position}")]
    InvalidDigit {
        /// Zero-based character index
        position: usize,
        /// Offending character
        found: char,
    },
}

/// Result type for checksum operations.
pub type Result<T> = std::result::Result<T, ChecksumError>;

impl From<ChecksumError> for barcraft_core::BarcraftError {
    fn from(err: ChecksumError) -> Self {
        Self::Checksum(err.to_string())
    }
}
