//! Saved barcode records.

use barcraft_core::{BarcodeConfig, BarcodeFormat, BarcodeId, Timestamp};
use serde::{Deserialize, Serialize};

/// A barcode saved to the library.
///
/// `id` and `created_at` are fixed at creation. The style is a snapshot taken
/// at save time, so later changes to the defaults never touch saved records.
///
/// Records read back from a backup may lack a name or a style; those stay
/// absent rather than being filled in, so re-exporting reproduces the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeItem {
    /// Opaque unique identifier
    pub id: BarcodeId,
    /// Payload encoded in the bars
    #[serde(default)]
    pub code: String,
    /// User-facing label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Creation time
    pub created_at: Timestamp,
    /// Style captured at save time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<BarcodeConfig>,
}

impl BarcodeItem {
    /// Create a record with a fresh id and the current time.
    ///
    /// A missing or blank name becomes `"<format> <code>"`.
    pub fn new(code: impl Into<String>, name: Option<String>, config: BarcodeConfig) -> Self {
        let code = code.into();
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| default_name(config.format, &code));

        Self {
            id: BarcodeId::generate(),
            code,
            name: Some(name),
            created_at: Timestamp::now(),
            config: Some(config),
        }
    }

    /// Label to show for this record, falling back to `"<format> <code>"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => default_name(self.format(), &self.code),
        }
    }

    /// Symbology of the record, EAN-13 when no style was stored.
    #[must_use]
    pub fn format(&self) -> BarcodeFormat {
        self.config
            .as_ref()
            .map(|c| c.format)
            .unwrap_or_default()
    }
}

/// Name given to a barcode saved without one.
#[must_use]
pub fn default_name(format: BarcodeFormat, code: &str) -> String {
    format!("{} {code}", format.tag())
}

/// Fields an update may overwrite.
///
/// `id` and `created_at` are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarcodePatch {
    /// New payload
    pub code: Option<String>,
    /// New label
    pub name: Option<String>,
    /// New style
    pub config: Option<BarcodeConfig>,
}

impl BarcodePatch {
    /// Empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the payload.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the label.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the style.
    #[must_use]
    pub fn config(mut self, config: BarcodeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.name.is_none() && self.config.is_none()
    }

    /// Overwrite the fields present in the patch.
    pub fn apply_to(&self, item: &mut BarcodeItem) {
        if let Some(code) = &self.code {
            item.code.clone_from(code);
        }
        if let Some(name) = &self.name {
            item.name = Some(name.clone());
        }
        if let Some(config) = &self.config {
            item.config = Some(config.clone());
        }
    }
}
