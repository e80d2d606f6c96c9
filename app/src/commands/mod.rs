//! Command handlers.

pub mod backup;
pub mod barcode;
pub mod library;
pub mod settings;
