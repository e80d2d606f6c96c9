//! Settings storage for user preferences.
//!
//! Provides key-value storage for small preferences next to the collection.
//! Values are stored as JSON, enabling flexible schema-less settings.

use crate::error::{Result, StoreError};
use crate::persistence::Persistence;
use barcraft_core::config::FORMAT_SETTING_KEY;
use barcraft_core::BarcodeFormat;
use serde_json::Value;

/// Key remembering the last symbology picked by the user.
pub const FORMAT_KEY: &str = FORMAT_SETTING_KEY;

/// Set a setting
pub fn set_setting<P: Persistence>(storage: &mut P, key: &str, value: &Value) -> Result<()> {
    let value_str =
        serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
    storage.set(key, &value_str)
}

/// Get a setting
pub fn get_setting<P: Persistence>(storage: &P, key: &str) -> Result<Option<Value>> {
    match storage.get(key)? {
        Some(value_str) => {
            let value: Value = serde_json::from_str(&value_str)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Delete a setting
pub fn delete_setting<P: Persistence>(storage: &mut P, key: &str) -> Result<()> {
    storage.remove(key)
}

/// Remember the symbology used for the next new barcode.
pub fn save_last_format<P: Persistence>(storage: &mut P, format: BarcodeFormat) -> Result<()> {
    tracing::debug!(%format, "Remembering barcode format");
    set_setting(storage, FORMAT_KEY, &Value::String(format.tag().to_string()))
}

/// Symbology remembered by [`save_last_format`].
///
/// A bare tag (not JSON-quoted) is accepted too. Falls back to `default`
/// when nothing is stored or the stored tag is not recognized.
pub fn load_last_format<P: Persistence>(storage: &P, default: BarcodeFormat) -> Result<BarcodeFormat> {
    let Some(raw) = storage.get(FORMAT_KEY)? else {
        return Ok(default);
    };

    let tag = serde_json::from_str::<String>(&raw).unwrap_or_else(|_| raw.trim().to_string());
    match tag.parse::<BarcodeFormat>() {
        Ok(format) => Ok(format),
        Err(e) => {
            tracing::warn!("Ignoring stored barcode format, using {default}: {e}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_set_and_get_setting() {
        let mut storage = MemoryStorage::new();

        let value = serde_json::json!({"theme": "dark"});
        set_setting(&mut storage, "ui", &value).expect("set setting");

        let retrieved = get_setting(&storage, "ui").expect("get setting");
        assert_eq!(retrieved, Some(value));
    }

    #[test]
    fn test_get_nonexistent_setting() {
        let storage = MemoryStorage::new();
        let result = get_setting(&storage, "does_not_exist").expect("get setting");
        assert_eq!(result, None);
    }

    #[test]
    fn test_delete_setting() {
        let mut storage = MemoryStorage::new();

        let value = serde_json::json!({"test": true});
        set_setting(&mut storage, "test_key", &value).expect("set setting");
        delete_setting(&mut storage, "test_key").expect("delete setting");

        let result = get_setting(&storage, "test_key").expect("get setting");
        assert_eq!(result, None);
    }

    #[test]
    fn test_last_format_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(
            load_last_format(&storage, BarcodeFormat::Ean13).expect("load"),
            BarcodeFormat::Ean13
        );

        save_last_format(&mut storage, BarcodeFormat::Codabar).expect("save");
        assert_eq!(
            storage.get(FORMAT_KEY).expect("get"),
            Some("\"codabar\"".to_string())
        );
        assert_eq!(
            load_last_format(&storage, BarcodeFormat::Ean13).expect("load"),
            BarcodeFormat::Codabar
        );
    }

    #[test]
    fn test_unknown_last_format_falls_back() {
        let storage = MemoryStorage::with_entry(FORMAT_KEY, "\"QR\"");
        assert_eq!(
            load_last_format(&storage, BarcodeFormat::Upc).expect("load"),
            BarcodeFormat::Upc
        );

        let storage = MemoryStorage::with_entry(FORMAT_KEY, "{}");
        assert_eq!(
            load_last_format(&storage, BarcodeFormat::Upc).expect("load"),
            BarcodeFormat::Upc
        );
    }

    #[test]
    fn test_bare_format_tag_accepted() {
        let storage = MemoryStorage::with_entry(FORMAT_KEY, "EAN8");
        assert_eq!(
            load_last_format(&storage, BarcodeFormat::Ean13).expect("load"),
            BarcodeFormat::Ean8
        );
    }
}
