//! Backup import and export commands.

use crate::error::CommandError;
use crate::state::AppState;
use barcraft_store::backup_file_name;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::info;

/// Response for import_barcodes command.
#[derive(Debug, Serialize)]
pub struct ImportSummary {
    /// Size of the library after the merge
    pub total: usize,
}

/// Response for export_barcodes command.
#[derive(Debug, Serialize)]
pub struct ExportedBackup {
    /// Suggested name for the backup file
    pub file_name: String,
    pub count: usize,
    /// Pretty-printed JSON array of every saved barcode
    pub contents: String,
}

/// Merge a JSON backup into the library.
///
/// Imported records replace saved ones with the same id. Nothing changes if
/// the backup is rejected.
pub fn import_barcodes(state: &mut AppState, json: &str) -> Result<ImportSummary, CommandError> {
    let total = state.library.import_batch(json)?;
    info!("Library holds {} barcodes after import", total);
    Ok(ImportSummary { total })
}

/// Export the whole library, named after today's UTC date.
pub fn export_barcodes(state: &AppState) -> Result<ExportedBackup, CommandError> {
    export_barcodes_on(state, Utc::now().date_naive())
}

/// Export the whole library, named after `date`.
pub fn export_barcodes_on(state: &AppState, date: NaiveDate) -> Result<ExportedBackup, CommandError> {
    let contents = state.library.export_all()?;
    Ok(ExportedBackup {
        file_name: backup_file_name(date),
        count: state.library.len(),
        contents,
    })
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
    fn test_import_then_export() {
        let (mut state, _tmp) = test_state();
        let summary = import_barcodes(
            &mut state,
            r#"[{"id":"a","code":"X","createdAt":1},{"id":"b","code":"Y","createdAt":2}]"#,
        )
        .expect("import");
        assert_eq!(summary.total, 2);

        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("date");
        let backup = export_barcodes_on(&state, date).expect("export");
        assert_eq!(backup.file_name, "barcode-backup-2024-03-09.json");
        assert_eq!(backup.count, 2);

        let parsed: serde_json::Value =
            serde_json::from_str(&backup.contents).expect("valid json");
        assert_eq!(parsed[0]["id"], "b");
        assert_eq!(parsed[1]["id"], "a");
    }

    #[test]
    fn test_export_named_after_utc_date() {
        let (state, _tmp) = test_state();
        let backup = export_barcodes(&state).expect("export");
        assert_eq!(backup.file_name, backup_file_name(Utc::now().date_naive()));
        assert_eq!(backup.count, 0);
        assert_eq!(backup.contents, "[]");
    }

    #[test]
    fn test_rejected_import_keeps_library() {
        let (mut state, _tmp) = test_state();
        import_barcodes(&mut state, r#"[{"id":"a","code":"X","createdAt":1}]"#).expect("import");

        let err = import_barcodes(&mut state, r#"{"id":"b"}"#).expect_err("not an array");
        assert_eq!(err.code, "IMPORT_INVALID_FORMAT");
        assert_eq!(state.library.len(), 1);
    }
}
