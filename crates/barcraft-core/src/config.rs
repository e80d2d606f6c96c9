//! Configuration management for Barcraft.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use crate::style::BarcodeConfig;
use crate::symbology::BarcodeFormat;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key under which the saved barcode collection lives.
pub const DEFAULT_COLLECTION_KEY: &str = "saved-barcodes";

/// Storage key remembering the last picked barcode format.
///
/// Shares the data directory with the collection, so it is reserved.
pub const FORMAT_SETTING_KEY: &str = "barcode-format";

/// Prefix used by the EAN-13 generator when none is configured.
pub const DEFAULT_PREFIX: &str = "789";

/// Main application configuration.
///
/// This is loaded from `~/.config/barcraft/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General application settings
    pub general: GeneralConfig,
    /// Where and under which key barcodes are persisted
    pub storage: StorageConfig,
    /// Default style applied to newly created barcodes
    pub style: BarcodeConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, falling back to defaults if absent.
    pub fn load_from(config_path: &Path) -> ConfigResult<Self> {
        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(config_path)?;
            let config: Self = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `BARCRAFT_DEFAULT_PREFIX`: Override the EAN-13 generator prefix
    /// - `BARCRAFT_DEFAULT_FORMAT`: Override the default symbology tag
    /// - `BARCRAFT_DATA_DIR`: Override where barcodes are stored
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `BARCRAFT_*` environment overrides on top of this configuration.
    pub fn apply_env(&mut self) -> ConfigResult<()> {
        if let Ok(val) = std::env::var("BARCRAFT_DEFAULT_PREFIX") {
            tracing::debug!("Override general.default_prefix from env: {}", val);
            self.general.default_prefix = val;
        }

        if let Ok(val) = std::env::var("BARCRAFT_DEFAULT_FORMAT") {
            let format = val
                .parse::<BarcodeFormat>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: "general.default_format".to_string(),
                    reason: e.to_string(),
                })?;
            tracing::debug!("Override general.default_format from env: {}", format);
            self.general.default_format = format;
        }

        if let Ok(val) = std::env::var("BARCRAFT_DATA_DIR") {
            tracing::debug!("Override storage.data_dir from env: {}", val);
            self.storage.data_dir = Some(PathBuf::from(val));
        }

        self.validate()
    }

    /// Check the values that TOML parsing alone cannot enforce.
    pub fn validate(&self) -> ConfigResult<()> {
        let prefix = &self.general.default_prefix;
        if prefix.is_empty() || prefix.len() > 12 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_prefix".to_string(),
                reason: format!("must be 1-12 decimal digits, got '{prefix}'"),
            });
        }

        if self.storage.collection_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.collection_key".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.storage.collection_key == FORMAT_SETTING_KEY {
            return Err(ConfigError::InvalidValue {
                field: "storage.collection_key".to_string(),
                reason: format!("'{FORMAT_SETTING_KEY}' is reserved for settings"),
            });
        }

        self.style
            .validate()
            .map_err(|e| ConfigError::InvalidValue {
                field: "style".to_string(),
                reason: e.to_string(),
            })
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, config_path: &Path) -> ConfigResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Directory where barcodes are stored.
    ///
    /// Uses `storage.data_dir` when set, otherwise the platform data directory.
    pub fn resolved_data_dir(&self) -> ConfigResult<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::data_dir(),
        }
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/barcraft/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get the data directory path.
    ///
    /// Uses XDG base directories: `~/.local/share/barcraft`
    pub fn data_dir() -> ConfigResult<PathBuf> {
        let dirs = project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }
}

fn project_dirs() -> ConfigResult<ProjectDirs> {
    ProjectDirs::from("com", "barcraft", "barcraft").ok_or(ConfigError::NoConfigDir)
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Prefix handed to the EAN-13 generator
    pub default_prefix: String,
    /// Symbology preselected for new barcodes
    pub default_format: BarcodeFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_prefix: DEFAULT_PREFIX.to_string(),
            default_format: BarcodeFormat::Ean13,
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the stored blobs (platform data dir when unset)
    pub data_dir: Option<PathBuf>,
    /// Key of the saved barcode collection
    pub collection_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            collection_key: DEFAULT_COLLECTION_KEY.to_string(),
        }
    }
}
