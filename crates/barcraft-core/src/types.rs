//! Shared types used across the Barcraft application.
//!
//! This module defines common newtypes that provide type safety
//! and clear domain modeling.

use crate::error::BarcraftError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype for saved barcode identifiers.
///
/// Identifiers are opaque: freshly saved barcodes get a UUID v4, but records
/// imported from a backup keep whatever non-empty id they carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BarcodeId(String);

impl BarcodeId {
    /// Create a new `BarcodeId` from a string.
    ///
    /// # Errors
    /// Returns error if the ID is empty or only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, BarcraftError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(BarcraftError::Validation(
                "invalid barcode ID: must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Create a new random `BarcodeId` using UUID v4.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BarcodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for BarcodeId {
    type Error = BarcraftError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<BarcodeId> for String {
    fn from(id: BarcodeId) -> Self {
        id.0
    }
}

impl AsRef<str> for BarcodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Milliseconds since the Unix epoch.
///
/// Serialized as a bare integer so exported collections stay compatible
/// with existing backups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a timestamp representing the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Create a timestamp from milliseconds since the epoch.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Get milliseconds since the epoch.
    #[must_use]
    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Convert to a `DateTime<Utc>`, if the value is in chrono's range.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }
}
