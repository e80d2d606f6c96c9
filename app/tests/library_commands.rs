//! Integration tests for the library commands over an on-disk data directory.

use barcraft_app::commands::{backup, barcode, library, settings};
use barcraft_app::state::AppState;
use barcraft_core::{AppConfig, BarcodeFormat};
use barcraft_ean::validate_ean13;
use tempfile::TempDir;

/// Helper to create state over a temporary data directory.
fn create_test_state(dir: &TempDir) -> AppState {
    AppState::with_data_dir(AppConfig::default(), dir.path()).expect("create state")
}

#[test]
fn test_generate_save_reopen() {
    let temp_dir = TempDir::new().expect("create temp dir");

    let saved = {
        let mut state = create_test_state(&temp_dir);
        let generated = barcode::generate_code(&state, None, Some("400")).expect("generate");
        assert!(generated.code.starts_with("400"));
        assert!(validate_ean13(&generated.code));

        library::save_barcode(&mut state, &generated.code, None, None).expect("save")
    };

    let state = create_test_state(&temp_dir);
    let items = library::list_barcodes(&state, None);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0], saved);
    assert!(temp_dir.path().join("saved-barcodes.json").exists());
}

#[test]
fn test_newest_saved_first() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut state = create_test_state(&temp_dir);

    let first = library::save_barcode(&mut state, "4006381333931", None, None).expect("save");
    let second = library::save_barcode(&mut state, "HELLO", None, Some(BarcodeFormat::Code128))
        .expect("save");

    let ids: Vec<_> = library::list_barcodes(&state, None)
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[test]
fn test_backup_round_trip_between_data_dirs() {
    let source_dir = TempDir::new().expect("create temp dir");
    let target_dir = TempDir::new().expect("create temp dir");

    let mut source = create_test_state(&source_dir);
    library::save_barcode(&mut source, "4006381333931", Some("Tea".to_string()), None)
        .expect("save");
    library::save_barcode(&mut source, "96385074", None, Some(BarcodeFormat::Ean8))
        .expect("save");
    let exported = backup::export_barcodes(&source).expect("export");
    assert_eq!(exported.count, 2);
    assert!(exported.file_name.starts_with("barcode-backup-"));

    let mut target = create_test_state(&target_dir);
    let summary = backup::import_barcodes(&mut target, &exported.contents).expect("import");
    assert_eq!(summary.total, 2);

    // Importing the same backup again changes nothing
    let summary = backup::import_barcodes(&mut target, &exported.contents).expect("import");
    assert_eq!(summary.total, 2);

    let found = library::list_barcodes(&target, Some("TEA"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, "4006381333931");
}

#[test]
fn test_import_overwrites_matching_id() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut state = create_test_state(&temp_dir);
    let saved = library::save_barcode(&mut state, "4006381333931", Some("Old".to_string()), None)
        .expect("save");

    let backup = format!(
        r#"[{{"id":"{}","code":"4006381333931","name":"New","createdAt":1}}]"#,
        saved.id
    );
    backup::import_barcodes(&mut state, &backup).expect("import");

    let items = library::list_barcodes(&state, None);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name.as_deref(), Some("New"));
    assert_eq!(items[0].created_at.as_millis(), 1);
    assert!(items[0].config.is_none());
}

#[test]
fn test_custom_data_dir_and_key_from_config() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut config = AppConfig::default();
    config.storage.data_dir = Some(temp_dir.path().join("nested"));
    config.storage.collection_key = "shop".to_string();

    let mut state = AppState::new(config).expect("create state");
    settings::set_default_format(&mut state, BarcodeFormat::Upc).expect("set format");
    let item = library::save_barcode(&mut state, "036000291452", None, None).expect("save");

    assert_eq!(item.format(), BarcodeFormat::Upc);
    assert!(temp_dir.path().join("nested").join("shop.json").exists());
    assert!(temp_dir.path().join("nested").join("barcode-format.json").exists());
}
