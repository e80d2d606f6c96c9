//! The saved barcode collection.
//!
//! [`BarcodeStore`] owns the list of saved barcodes and writes the whole list
//! back to its [`Persistence`] backend after every mutation. Callers hold a
//! reference to the store and re-read [`BarcodeStore::items`] after a change.

use crate::error::{Result, StoreError};
use crate::item::{BarcodeItem, BarcodePatch};
use crate::persistence::Persistence;
use barcraft_core::config::DEFAULT_COLLECTION_KEY;
use barcraft_core::BarcodeId;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;
use std::io::ErrorKind;

/// Saved barcodes, newest first, backed by one serialized blob.
#[derive(Debug)]
pub struct BarcodeStore<P: Persistence> {
    storage: P,
    key: String,
    items: Vec<BarcodeItem>,
}

impl<P: Persistence> BarcodeStore<P> {
    /// Open the collection stored under the default `saved-barcodes` key.
    pub fn open(storage: P) -> Result<Self> {
        Self::open_with_key(storage, DEFAULT_COLLECTION_KEY)
    }

    /// Open the collection stored under `key`.
    ///
    /// A missing blob yields an empty collection. A blob that is not a list of
    /// barcodes (or not even text) cannot be recovered, so it is logged and
    /// replaced by an empty collection on the next write. Other read failures
    /// from the backend propagate.
    pub fn open_with_key(storage: P, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let stored = match storage.get(&key) {
            Ok(stored) => stored,
            Err(StoreError::Io(e)) if e.kind() == ErrorKind::InvalidData => {
                tracing::warn!(key = %key, "Saved barcodes are unreadable, starting empty: {e}");
                return Ok(Self {
                    storage,
                    key,
                    items: Vec::new(),
                });
            }
            Err(e) => return Err(e),
        };

        let items = match stored {
            None => {
                tracing::debug!(key = %key, "No saved barcodes, starting empty");
                Vec::new()
            }
            Some(blob) => match serde_json::from_str::<Vec<BarcodeItem>>(&blob) {
                Ok(items) => {
                    tracing::debug!(key = %key, count = items.len(), "Loaded saved barcodes");
                    items
                }
                Err(e) => {
                    tracing::warn!(key = %key, "Saved barcodes are corrupt, starting empty: {e}");
                    Vec::new()
                }
            },
        };

        Ok(Self {
            storage,
            key,
            items,
        })
    }

    /// Current collection, in storage order.
    #[must_use]
    pub fn items(&self) -> &[BarcodeItem] {
        &self.items
    }

    /// Number of saved barcodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a barcode by id.
    #[must_use]
    pub fn get(&self, id: &BarcodeId) -> Option<&BarcodeItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Barcodes whose name contains `query` (ignoring case) or whose code contains it.
    ///
    /// An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&BarcodeItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.display_name().to_lowercase().contains(&needle) || item.code.contains(query)
            })
            .collect()
    }

    /// Storage key of the collection.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Backend the collection is written to.
    #[must_use]
    pub fn storage(&self) -> &P {
        &self.storage
    }

    /// Save a new barcode at the front of the collection.
    ///
    /// The caller supplies a unique id; duplicates are not detected here.
    pub fn add(&mut self, item: BarcodeItem) -> Result<()> {
        tracing::info!(id = %item.id, code = %item.code, "Saving barcode");

        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items.iter().cloned());
        self.commit(items)
    }

    /// Overwrite the patched fields of the barcode with `id`.
    ///
    /// Returns whether a barcode matched. An unknown id changes nothing but the
    /// collection is still written back.
    pub fn update(&mut self, id: &BarcodeId, patch: &BarcodePatch) -> Result<bool> {
        let mut items = self.items.clone();
        let mut found = false;
        for item in items.iter_mut().filter(|item| &item.id == id) {
            patch.apply_to(item);
            found = true;
        }

        if found {
            tracing::info!(id = %id, "Updated barcode");
        } else {
            tracing::debug!(id = %id, "Update for unknown barcode ignored");
        }

        self.commit(items)?;
        Ok(found)
    }

    /// Remove the barcode with `id`.
    ///
    /// Returns whether a barcode was removed. An unknown id changes nothing.
    pub fn delete(&mut self, id: &BarcodeId) -> Result<bool> {
        let items: Vec<BarcodeItem> = self
            .items
            .iter()
            .filter(|item| &item.id != id)
            .cloned()
            .collect();
        let removed = items.len() != self.items.len();

        if removed {
            tracing::info!(id = %id, "Deleted barcode");
        } else {
            tracing::debug!(id = %id, "Delete for unknown barcode ignored");
        }

        self.commit(items)?;
        Ok(removed)
    }

    /// Merge barcodes from a JSON backup into the collection.
    ///
    /// Records are matched by id and an imported record replaces the existing
    /// one wholesale. New ids are added. The merged collection is then sorted
    /// newest first. Returns the size of the merged collection.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidFormat`] if the text is not a JSON array
    /// of records each carrying an `id` and a `createdAt`, or if a record's
    /// style fails [`BarcodeConfig::validate`](barcraft_core::BarcodeConfig::validate);
    /// the collection is left untouched in that case.
    pub fn import_batch(&mut self, json: &str) -> Result<usize> {
        let imported = parse_backup(json)?;
        let imported_count = imported.len();

        let merged = merge_by_id(self.items.iter().cloned(), imported);
        self.commit(merged)?;

        tracing::info!(
            imported = imported_count,
            total = self.items.len(),
            "Imported barcodes"
        );
        Ok(self.items.len())
    }

    /// Serialize the whole collection as pretty-printed JSON.
    ///
    /// The output is accepted by [`BarcodeStore::import_batch`].
    pub fn export_all(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.items)
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Persist `items`, then make them the current collection.
    fn commit(&mut self, items: Vec<BarcodeItem>) -> Result<()> {
        let blob =
            serde_json::to_string(&items).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.storage.set(&self.key, &blob)?;
        self.items = items;
        Ok(())
    }
}

/// Suggested file name for a backup taken on `date`.
#[must_use]
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("barcode-backup-{}.json", date.format("%Y-%m-%d"))
}

fn parse_backup(json: &str) -> Result<Vec<BarcodeItem>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| StoreError::InvalidFormat(format!("not valid JSON: {e}")))?;

    let Value::Array(elements) = value else {
        return Err(StoreError::InvalidFormat(
            "expected an array of barcodes".to_string(),
        ));
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let item: BarcodeItem = serde_json::from_value(element)
                .map_err(|e| StoreError::InvalidFormat(format!("barcode #{index}: {e}")))?;
            if let Some(config) = &item.config {
                config
                    .validate()
                    .map_err(|e| StoreError::InvalidFormat(format!("barcode #{index}: {e}")))?;
            }
            Ok(item)
        })
        .collect()
}

/// Id-keyed union where later records win.
///
/// A replaced record keeps the slot of the first record with its id, so the
/// stable sort below leaves ties in first-seen order.
fn merge_by_id(
    existing: impl IntoIterator<Item = BarcodeItem>,
    imported: impl IntoIterator<Item = BarcodeItem>,
) -> Vec<BarcodeItem> {
    let mut slots: HashMap<BarcodeId, usize> = HashMap::new();
    let mut merged: Vec<BarcodeItem> = Vec::new();

    for item in existing.into_iter().chain(imported) {
        if let Some(&slot) = slots.get(&item.id) {
            merged[slot] = item;
        } else {
            slots.insert(item.id.clone(), merged.len());
            merged.push(item);
        }
    }

    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    merged
}
