//! Supported barcode symbologies.
//!
//! The set is closed: a tag that is not listed here is a configuration error
//! and is never coerced to a neighbouring format.

use crate::error::BarcraftError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Linear barcode formats understood by the rendering layer.
///
/// Serialized with the exact tags the renderer expects (`EAN13`, `pharmacode`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BarcodeFormat {
    /// EAN-13 retail code (12 payload digits plus check digit)
    #[default]
    #[serde(rename = "EAN13")]
    Ean13,
    /// EAN-8 short retail code
    #[serde(rename = "EAN8")]
    Ean8,
    /// UPC-A, 12 digits
    #[serde(rename = "UPC")]
    Upc,
    /// Code 128, full ASCII
    #[serde(rename = "CODE128")]
    Code128,
    /// Code 39, alphanumeric
    #[serde(rename = "CODE39")]
    Code39,
    /// ITF-14 shipping container code
    #[serde(rename = "ITF14")]
    Itf14,
    /// MSI Plessey
    #[serde(rename = "MSI")]
    Msi,
    /// Laetus pharmacode
    #[serde(rename = "pharmacode")]
    Pharmacode,
    /// Codabar
    #[serde(rename = "codabar")]
    Codabar,
}

impl BarcodeFormat {
    /// Every supported format, in the order a picker lists them.
    pub const ALL: [BarcodeFormat; 9] = [
        Self::Code128,
        Self::Code39,
        Self::Ean13,
        Self::Ean8,
        Self::Upc,
        Self::Itf14,
        Self::Msi,
        Self::Pharmacode,
        Self::Codabar,
    ];

    /// The wire tag for this format.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Ean13 => "EAN13",
            Self::Ean8 => "EAN8",
            Self::Upc => "UPC",
            Self::Code128 => "CODE128",
            Self::Code39 => "CODE39",
            Self::Itf14 => "ITF14",
            Self::Msi => "MSI",
            Self::Pharmacode => "pharmacode",
            Self::Codabar => "codabar",
        }
    }

    /// Get a human-readable display name for the format.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ean13 => "EAN-13",
            Self::Ean8 => "EAN-8",
            Self::Upc => "UPC",
            Self::Code128 => "Code 128",
            Self::Code39 => "Code 39",
            Self::Itf14 => "ITF-14",
            Self::Msi => "MSI",
            Self::Pharmacode => "Pharmacode",
            Self::Codabar => "Codabar",
        }
    }

    /// Payload length for fixed-length numeric retail formats.
    ///
    /// Returns `None` for variable-length formats.
    #[must_use]
    pub fn fixed_length(&self) -> Option<usize> {
        match self {
            Self::Ean13 => Some(13),
            Self::Ean8 => Some(8),
            Self::Upc => Some(12),
            _ => None,
        }
    }

    /// Whether the format only accepts a fixed number of decimal digits.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.fixed_length().is_some()
    }

    /// Whether the format is meant for free text (letters and digits).
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Code128 | Self::Code39 | Self::Codabar)
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BarcodeFormat {
    type Err = BarcraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.tag() == s)
            .ok_or_else(|| BarcraftError::Validation(format!("unknown barcode format '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for format in BarcodeFormat::ALL {
            let parsed: BarcodeFormat = format.tag().parse().expect("parse known tag");
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert!("EAN-13".parse::<BarcodeFormat>().is_err());
        assert!("ean13".parse::<BarcodeFormat>().is_err());
        assert!("".parse::<BarcodeFormat>().is_err());
    }

    #[test]
    fn test_serialization_uses_tags() {
        let json = serde_json::to_string(&BarcodeFormat::Pharmacode).expect("serialize format");
        assert_eq!(json, "\"pharmacode\"");

        let format: BarcodeFormat = serde_json::from_str("\"CODE128\"").expect("deserialize");
        assert_eq!(format, BarcodeFormat::Code128);

        assert!(serde_json::from_str::<BarcodeFormat>("\"QR\"").is_err());
    }

    #[test]
    fn test_fixed_lengths() {
        assert_eq!(BarcodeFormat::Ean13.fixed_length(), Some(13));
        assert_eq!(BarcodeFormat::Ean8.fixed_length(), Some(8));
        assert_eq!(BarcodeFormat::Upc.fixed_length(), Some(12));
        assert_eq!(BarcodeFormat::Code128.fixed_length(), None);
        assert!(!BarcodeFormat::Itf14.is_numeric());
    }

    #[test]
    fn test_display() {
        assert_eq!(BarcodeFormat::Ean13.to_string(), "EAN13");
        assert_eq!(BarcodeFormat::Codabar.display_name(), "Codabar");
    }
}
