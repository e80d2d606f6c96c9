//! Barcraft Store - persistent barcode library.
//!
//! Owns the collection of saved barcodes and keeps it in sync with a
//! key-value [`Persistence`] backend:
//!
//! - **Collection**: add, update and delete by id, written back after every change
//! - **Import**: id-keyed merge of a JSON backup, imported records win, newest first
//! - **Export**: pretty-printed JSON that re-imports as a no-op
//! - **Settings**: small JSON preferences such as the last used format
//!
//! ## Example
//!
//! ```rust
//! use barcraft_core::BarcodeConfig;
//! use barcraft_store::{BarcodeItem, BarcodeStore, MemoryStorage};
//!
//! # fn main() -> Result<(), barcraft_store::StoreError> {
//! let mut store = BarcodeStore::open(MemoryStorage::new())?;
//! store.add(BarcodeItem::new("4006381333931", None, BarcodeConfig::default()))?;
//!
//! let backup = store.export_all()?;
//! assert_eq!(store.import_batch(&backup)?, 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod collection;
pub mod error;
pub mod item;
pub mod persistence;
pub mod settings;

pub use collection::{backup_file_name, BarcodeStore};
pub use error::{Result, StoreError};
pub use item::{default_name, BarcodeItem, BarcodePatch};
pub use persistence::{FileStorage, MemoryStorage, Persistence};
