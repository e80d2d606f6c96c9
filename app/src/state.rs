//! Application state management.

use barcraft_core::{AppConfig, BarcodeFormat};
use barcraft_store::{settings, BarcodeStore, FileStorage};
use std::path::{Path, PathBuf};

/// State shared by all commands.
pub struct AppState {
    /// Effective configuration
    pub config: AppConfig,

    /// Saved barcode library
    pub library: BarcodeStore<FileStorage>,

    /// Storage for small preferences, next to the library
    pub settings: FileStorage,
}

impl AppState {
    /// Create state from configuration, storing data in the configured data directory.
    pub fn new(config: AppConfig) -> Result<Self, crate::error::CommandError> {
        let data_dir = config.resolved_data_dir()?;
        Self::with_data_dir(config, data_dir)
    }

    /// Create state storing data in `data_dir`, regardless of configuration.
    pub fn with_data_dir(
        config: AppConfig,
        data_dir: impl Into<PathBuf>,
    ) -> Result<Self, crate::error::CommandError> {
        let data_dir = data_dir.into();
        tracing::info!("Data directory: {}", data_dir.display());

        let storage = FileStorage::new(&data_dir);
        let library = BarcodeStore::open_with_key(storage.clone(), &config.storage.collection_key)?;

        Ok(Self {
            config,
            library,
            settings: storage,
        })
    }

    /// Directory holding the library and settings.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.settings.dir()
    }

    /// Format for new barcodes: the remembered one, else the configured default.
    pub fn current_format(&self) -> Result<BarcodeFormat, crate::error::CommandError> {
        Ok(settings::load_last_format(
            &self.settings,
            self.config.general.default_format,
        )?)
    }
}
