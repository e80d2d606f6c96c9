//! Rendering parameters for a barcode.
//!
//! A [`BarcodeConfig`] is what the external renderer receives alongside the
//! payload. Saved barcodes embed their own copy, so later changes to the
//! global defaults never alter an existing record.

use crate::error::BarcraftError;
use crate::symbology::BarcodeFormat;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Slider bounds for bar width.
pub const WIDTH_RANGE: RangeInclusive<f64> = 1.0..=4.0;
/// Step used when adjusting bar width.
pub const WIDTH_STEP: f64 = 0.5;
/// Slider bounds for bar height.
pub const HEIGHT_RANGE: RangeInclusive<f64> = 30.0..=200.0;
/// Step used when adjusting bar height.
pub const HEIGHT_STEP: f64 = 5.0;
/// Slider bounds for the human-readable text size.
pub const FONT_SIZE_RANGE: RangeInclusive<f64> = 10.0..=40.0;
/// Slider bounds for the quiet zone around the symbol.
pub const MARGIN_RANGE: RangeInclusive<f64> = 0.0..=50.0;

/// Horizontal alignment of the human-readable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left aligned
    Left,
    /// Centered under or over the bars
    #[default]
    Center,
    /// Right aligned
    Right,
}

/// Placement of the human-readable text relative to the bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    /// Above the bars
    Top,
    /// Below the bars
    #[default]
    Bottom,
}

/// Style and symbology settings for rendering one barcode.
///
/// Field names serialize in camelCase to match the renderer's option names.
/// Missing fields fall back to [`BarcodeConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarcodeConfig {
    /// Symbology used to encode the payload
    pub format: BarcodeFormat,
    /// Width of a single bar module
    pub width: f64,
    /// Height of the bars
    pub height: f64,
    /// Whether the payload is printed as text next to the bars
    pub display_value: bool,
    /// Font family of the printed text
    pub font: String,
    /// Horizontal alignment of the printed text
    pub text_align: TextAlign,
    /// Vertical placement of the printed text
    pub text_position: TextPosition,
    /// Gap between bars and text
    pub text_margin: f64,
    /// Size of the printed text
    pub font_size: f64,
    /// Background colour
    pub background: String,
    /// Bar colour
    pub line_color: String,
    /// Quiet zone around the symbol
    pub margin: f64,
}

impl Default for BarcodeConfig {
    fn default() -> Self {
        Self {
            format: BarcodeFormat::Ean13,
            width: 2.0,
            height: 100.0,
            display_value: true,
            font: "monospace".to_string(),
            text_align: TextAlign::Center,
            text_position: TextPosition::Bottom,
            text_margin: 2.0,
            font_size: 20.0,
            background: "#ffffff".to_string(),
            line_color: "#000000".to_string(),
            margin: 10.0,
        }
    }
}

impl BarcodeConfig {
    /// Default style for a given format.
    #[must_use]
    pub fn for_format(format: BarcodeFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Check that every numeric parameter is finite and non-negative.
    pub fn validate(&self) -> Result<(), BarcraftError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("textMargin", self.text_margin),
            ("fontSize", self.font_size),
            ("margin", self.margin),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(BarcraftError::Validation(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}
