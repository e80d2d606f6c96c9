//! Barcraft EAN - checksum engine for retail barcodes.
//!
//! Computes and validates EAN-13 check digits, generates random valid codes
//! from a country prefix, and offers format-aware helpers for the other
//! supported symbologies.
//!
//! # Example
//!
//! ```rust
//! use barcraft_ean::{calculate_checksum, generate_ean13, validate_ean13};
//!
//! let check = calculate_checksum("400638133393").expect("12 digits");
//! assert_eq!(check, 1);
//! assert!(validate_ean13("4006381333931"));
//!
//! let code = generate_ean13("789");
//! assert!(validate_ean13(&code));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod checksum;
pub mod error;
pub mod prefix;
pub mod symbol;

pub use checksum::{
    calculate_checksum, expected_check_digit, generate_ean13, generate_ean13_with,
    gs1_check_digit, validate_ean13,
};
pub use error::{ChecksumError, Result};
pub use prefix::{find_prefix, CountryPrefix, BRAZIL_PREFIXES, COUNTRY_PREFIXES};
pub use symbol::{is_code_valid, reconcile_code, sample_code, sanitize_code_input, svg_file_name};
