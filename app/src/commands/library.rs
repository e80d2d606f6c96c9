//! Saved barcode library commands.

use super::barcode::required_check_digit;
use crate::error::CommandError;
use crate::state::AppState;
use barcraft_core::{BarcodeConfig, BarcodeFormat, BarcodeId};
use barcraft_ean::{is_code_valid, sanitize_code_input};
use barcraft_store::{settings, BarcodeItem, BarcodePatch};
use tracing::{info, warn};

/// Save a barcode with the configured style.
///
/// The code is sanitized for its format first and rejected with
/// `INVALID_CODE` if it still does not validate. A missing name becomes
/// `"<format> <code>"`. The format is remembered for the next barcode.
pub fn save_barcode(
    state: &mut AppState,
    code: &str,
    name: Option<String>,
    format: Option<BarcodeFormat>,
) -> Result<BarcodeItem, CommandError> {
    let format = match format {
        Some(format) => format,
        None => state.current_format()?,
    };
    let code = checked_code(format, code)?;

    let config = BarcodeConfig {
        format,
        ..state.config.style.clone()
    };
    let item = BarcodeItem::new(code, name, config);
    state.library.add(item.clone())?;
    settings::save_last_format(&mut state.settings, format)?;

    info!("Saved barcode {} ({})", item.id, item.display_name());
    Ok(item)
}

/// Rename a saved barcode or change its code.
///
/// Returns the updated record, or `None` when no barcode has `id`.
pub fn update_barcode(
    state: &mut AppState,
    id: &str,
    code: Option<&str>,
    name: Option<String>,
) -> Result<Option<BarcodeItem>, CommandError> {
    let id = parse_id(id)?;
    let Some(existing) = state.library.get(&id) else {
        warn!("Update requested for unknown barcode {}", id);
        return Ok(None);
    };

    let mut patch = BarcodePatch::new();
    if let Some(code) = code {
        patch = patch.code(checked_code(existing.format(), code)?);
    }
    if let Some(name) = name {
        patch = patch.name(name);
    }
    if patch.is_empty() {
        return Ok(Some(existing.clone()));
    }

    state.library.update(&id, &patch)?;
    Ok(state.library.get(&id).cloned())
}

/// Delete a saved barcode. Returns whether one was removed.
pub fn delete_barcode(state: &mut AppState, id: &str) -> Result<bool, CommandError> {
    let id = parse_id(id)?;
    Ok(state.library.delete(&id)?)
}

/// Saved barcodes, newest first as stored, optionally filtered by name or code.
#[must_use]
pub fn list_barcodes(state: &AppState, query: Option<&str>) -> Vec<BarcodeItem> {
    match query {
        Some(query) => state.library.search(query).into_iter().cloned().collect(),
        None => state.library.items().to_vec(),
    }
}

fn parse_id(id: &str) -> Result<BarcodeId, CommandError> {
    BarcodeId::new(id).map_err(|e| CommandError::new("INVALID_ID", e.to_string()))
}

fn checked_code(format: BarcodeFormat, raw: &str) -> Result<String, CommandError> {
    let code = sanitize_code_input(format, raw);
    if is_code_valid(format, &code) {
        return Ok(code);
    }

    warn!("Rejected invalid {} code {:?}", format, raw);
    Err(CommandError::with_details(
        "INVALID_CODE",
        format!("'{code}' is not a valid {} code", format.display_name()),
        serde_json::json!({
            "format": format,
            "code": code,
            "expectedCheckDigit": required_check_digit(format, &code),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use barcraft_core::AppConfig;
    use tempfile::TempDir;

    fn test_state() -> (AppState, TempDir) {
        let tmp = TempDir::new().expect("create temp dir");
        let state = AppState::with_data_dir(AppConfig::default(), tmp.path()).expect("state");
        (state, tmp)
    }

    #[test]
    fn test_save_uses_default_name_and_style() {
        let (mut state, _tmp) = test_state();
        let item = save_barcode(&mut state, "4006381333931", None, None).expect("save");

        assert_eq!(item.name.as_deref(), Some("EAN13 4006381333931"));
        assert_eq!(item.config, Some(BarcodeConfig::default()));
        assert_eq!(state.library.len(), 1);
    }

    #[test]
    fn test_save_sanitizes_numeric_input() {
        let (mut state, _tmp) = test_state();
        let item = save_barcode(&mut state, "4006-3813-3393-1", Some("Tea".to_string()), None)
            .expect("save");
        assert_eq!(item.code, "4006381333931");
    }

    #[test]
    fn test_save_rejects_invalid_code() {
        let (mut state, _tmp) = test_state();
        let err = save_barcode(&mut state, "4006381333930", None, None).expect_err("invalid");

        assert_eq!(err.code, "INVALID_CODE");
        let details = err.details.expect("details");
        assert_eq!(details["expectedCheckDigit"], 1);
        assert!(state.library.is_empty());
    }

    #[test]
    fn test_save_remembers_format() {
        let (mut state, _tmp) = test_state();
        let item = save_barcode(&mut state, "HELLO", None, Some(BarcodeFormat::Code128))
            .expect("save");

        assert_eq!(item.format(), BarcodeFormat::Code128);
        assert_eq!(state.current_format().expect("format"), BarcodeFormat::Code128);
    }

    #[test]
    fn test_update_renames_and_validates() {
        let (mut state, _tmp) = test_state();
        let item = save_barcode(&mut state, "4006381333931", None, None).expect("save");

        let updated = update_barcode(&mut state, item.id.as_str(), None, Some("Tea".to_string()))
            .expect("update")
            .expect("barcode exists");
        assert_eq!(updated.name.as_deref(), Some("Tea"));
        assert_eq!(updated.created_at, item.created_at);

        let err = update_barcode(&mut state, item.id.as_str(), Some("123"), None)
            .expect_err("invalid code");
        assert_eq!(err.code, "INVALID_CODE");
    }

    #[test]
    fn test_update_unknown_id_is_none() {
        let (mut state, _tmp) = test_state();
        let result = update_barcode(&mut state, "missing", None, Some("x".to_string()))
            .expect("update");
        assert!(result.is_none());

        let err = update_barcode(&mut state, "  ", None, None).expect_err("blank id");
        assert_eq!(err.code, "INVALID_ID");
    }

    #[test]
    fn test_delete_and_list() {
        let (mut state, _tmp) = test_state();
        let tea = save_barcode(&mut state, "4006381333931", Some("Tea".to_string()), None)
            .expect("save");
        save_barcode(&mut state, "HELLO", Some("Coffee".to_string()), Some(BarcodeFormat::Code39))
            .expect("save");

        assert_eq!(list_barcodes(&state, None).len(), 2);
        let found = list_barcodes(&state, Some("tea"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, tea.id);

        assert!(delete_barcode(&mut state, tea.id.as_str()).expect("delete"));
        assert!(!delete_barcode(&mut state, tea.id.as_str()).expect("delete again"));
        assert_eq!(list_barcodes(&state, None).len(), 1);
    }
}
