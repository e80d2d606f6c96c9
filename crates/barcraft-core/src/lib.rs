//! Barcraft Core - Foundation crate for the Barcraft barcode studio.
//!
//! This crate provides shared types, the barcode style model, error handling
//! and configuration management that all other Barcraft crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes (`BarcodeId`, `Timestamp`)
//! - [`symbology`] - The closed set of supported barcode formats
//! - [`style`] - Rendering parameters captured with every saved barcode
//!
//! # Example
//!
//! ```rust
//! use barcraft_core::{AppConfig, BarcodeConfig, BarcodeFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! assert_eq!(config.general.default_format, BarcodeFormat::Ean13);
//!
//! let style = BarcodeConfig::default();
//! style.validate()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod style;
pub mod symbology;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, GeneralConfig, StorageConfig};
pub use error::{BarcraftError, ConfigError, ConfigResult, Result};
pub use style::{BarcodeConfig, TextAlign, TextPosition};
pub use symbology::BarcodeFormat;
pub use types::{BarcodeId, Timestamp};
