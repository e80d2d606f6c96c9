//! Integration tests for the collection store on disk.

use barcraft_core::{BarcodeConfig, BarcodeFormat, BarcodeId};
use barcraft_store::{BarcodeItem, BarcodePatch, BarcodeStore, FileStorage, StoreError};
use tempfile::TempDir;

fn open(dir: &TempDir) -> BarcodeStore<FileStorage> {
    BarcodeStore::open(FileStorage::new(dir.path())).expect("open store")
}

#[test]
fn test_mutations_survive_reopen() {
    let tmp = TempDir::new().expect("create temp dir");

    let (kept, dropped) = {
        let mut store = open(&tmp);
        let kept = BarcodeItem::new("4006381333931", Some("Tea".to_string()), BarcodeConfig::default());
        let dropped = BarcodeItem::new(
            "HELLO",
            None,
            BarcodeConfig::for_format(BarcodeFormat::Code128),
        );
        store.add(kept.clone()).expect("add kept");
        store.add(dropped.clone()).expect("add dropped");
        store
            .update(&kept.id, &BarcodePatch::new().name("Green Tea"))
            .expect("rename");
        store.delete(&dropped.id).expect("delete");
        (kept, dropped)
    };

    let store = open(&tmp);
    assert_eq!(store.len(), 1);
    let item = store.get(&kept.id).expect("kept item reloaded");
    assert_eq!(item.name.as_deref(), Some("Green Tea"));
    assert_eq!(item.created_at, kept.created_at);
    assert!(store.get(&dropped.id).is_none());
}

#[test]
fn test_saved_config_is_a_snapshot() {
    let tmp = TempDir::new().expect("create temp dir");
    let mut store = open(&tmp);

    let mut style = BarcodeConfig::default();
    let item = BarcodeItem::new("4006381333931", None, style.clone());
    store.add(item.clone()).expect("add");

    // Changing the working style afterwards does not reach the saved record
    style.height = 42.0;
    let saved = store.get(&item.id).expect("saved");
    assert_eq!(saved.config.as_ref().map(|c| c.height), Some(100.0));
}

#[test]
fn test_corrupt_file_starts_empty_and_is_overwritten() {
    let tmp = TempDir::new().expect("create temp dir");
    std::fs::write(tmp.path().join("saved-barcodes.json"), "][").expect("write corrupt blob");

    let mut store = open(&tmp);
    assert!(store.is_empty());

    store
        .add(BarcodeItem::new("1", None, BarcodeConfig::default()))
        .expect("add after corruption");
    assert_eq!(open(&tmp).len(), 1);
}

#[test]
fn test_non_utf8_file_starts_empty_and_is_overwritten() {
    let tmp = TempDir::new().expect("create temp dir");
    std::fs::write(tmp.path().join("saved-barcodes.json"), [0xff, 0xfe, 0x00, 0x5b])
        .expect("write binary blob");

    let mut store = open(&tmp);
    assert!(store.is_empty());

    store
        .add(BarcodeItem::new("1", None, BarcodeConfig::default()))
        .expect("add after corruption");
    assert_eq!(open(&tmp).len(), 1);
}

#[test]
fn test_failed_import_does_not_touch_disk() {
    let tmp = TempDir::new().expect("create temp dir");
    let mut store = open(&tmp);
    store
        .add(BarcodeItem::new("4006381333931", None, BarcodeConfig::default()))
        .expect("add");
    let path = tmp.path().join("saved-barcodes.json");
    let before = std::fs::read_to_string(&path).expect("read blob");

    let err = store.import_batch("not json").expect_err("import must fail");
    assert!(matches!(err, StoreError::InvalidFormat(_)));
    assert_eq!(std::fs::read_to_string(&path).expect("read blob"), before);
}

#[test]
fn test_backup_moves_between_stores() {
    let source_dir = TempDir::new().expect("create temp dir");
    let target_dir = TempDir::new().expect("create temp dir");

    let mut source = open(&source_dir);
    for code in ["4006381333931", "7891234567895"] {
        source
            .add(BarcodeItem::new(code, None, BarcodeConfig::default()))
            .expect("add");
    }
    let backup = source.export_all().expect("export");

    let mut target = open(&target_dir);
    target
        .add(BarcodeItem::new("HELLO", None, BarcodeConfig::default()))
        .expect("add");
    assert_eq!(target.import_batch(&backup).expect("import"), 3);

    let reopened = open(&target_dir);
    assert_eq!(reopened.len(), 3);
    let times: Vec<i64> = reopened
        .items()
        .iter()
        .map(|i| i.created_at.as_millis())
        .collect();
    assert!(times.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_custom_key() {
    let tmp = TempDir::new().expect("create temp dir");
    let mut store =
        BarcodeStore::open_with_key(FileStorage::new(tmp.path()), "archive").expect("open");
    store
        .import_batch(r#"[{"id":"a","code":"X","createdAt":1}]"#)
        .expect("import");

    assert!(tmp.path().join("archive.json").exists());
    assert!(store.get(&BarcodeId::new("a").expect("id")).is_some());
}
