//! Format-aware helpers for candidate barcode payloads.
//!
//! These sit between raw user input and the renderer: they clean typed input,
//! decide whether a payload can be saved, and produce sample payloads when
//! the user asks for a random code or switches to an incompatible format.

use crate::checksum::{generate_ean13_with, gs1_check_digit, random_digits, validate_ean13};
use barcraft_core::BarcodeFormat;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

/// Longest payload accepted for variable-length formats.
pub const MAX_TEXT_LENGTH: usize = 80;

static NON_DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("valid non-digit regex"));

/// Clean raw input for the given format.
///
/// Fixed-length numeric formats keep only ASCII digits, truncated to the
/// format length. Other formats are truncated to [`MAX_TEXT_LENGTH`] characters.
#[must_use]
pub fn sanitize_code_input(format: BarcodeFormat, raw: &str) -> String {
    match format.fixed_length() {
        Some(len) => {
            let mut digits = NON_DIGIT_REGEX.replace_all(raw, "").into_owned();
            digits.truncate(len);
            digits
        }
        None => raw.chars().take(MAX_TEXT_LENGTH).collect(),
    }
}

/// Whether `code` may be saved and rendered as `format`.
///
/// EAN-13, EAN-8 and UPC-A need the exact digit count and a correct check
/// digit; every other format only needs a non-empty payload.
#[must_use]
pub fn is_code_valid(format: BarcodeFormat, code: &str) -> bool {
    match format {
        BarcodeFormat::Ean13 => validate_ean13(code),
        BarcodeFormat::Ean8 | BarcodeFormat::Upc => {
            let Some(len) = format.fixed_length() else {
                return false;
            };
            if code.len() != len || !code.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }
            let (body, check) = code.split_at(len - 1);
            gs1_check_digit(body).is_ok_and(|expected| check.as_bytes()[0] - b'0' == expected)
        }
        _ => !code.is_empty(),
    }
}

/// Random sample payload for `format`.
///
/// `prefix` only applies to EAN-13.
#[must_use]
pub fn sample_code(format: BarcodeFormat, prefix: &str) -> String {
    sample_code_with(format, prefix, &mut rand::thread_rng())
}

/// [`sample_code`] with a caller-supplied random source.
pub fn sample_code_with<R: Rng + ?Sized>(format: BarcodeFormat, prefix: &str, rng: &mut R) -> String {
    match format {
        BarcodeFormat::Ean13 => generate_ean13_with(prefix, rng),
        BarcodeFormat::Ean8 | BarcodeFormat::Upc => {
            let len = format.fixed_length().unwrap_or_default();
            let mut code = random_digits(rng, len.saturating_sub(1));
            if let Ok(check) = gs1_check_digit(&code) {
                code.push(char::from(b'0' + check));
            }
            code
        }
        _ => format!("SAMPLE{}", rng.gen_range(0..10_000)),
    }
}

/// Replacement payload after switching to `format`, if the current one no longer fits.
///
/// Numeric formats replace any payload that fails [`is_code_valid`]. Text
/// formats only replace a payload that looks like a leftover retail code
/// (8 to 13 digits). Returns `None` when `code` can stay.
#[must_use]
pub fn reconcile_code(format: BarcodeFormat, code: &str, prefix: &str) -> Option<String> {
    reconcile_code_with(format, code, prefix, &mut rand::thread_rng())
}

/// [`reconcile_code`] with a caller-supplied random source.
pub fn reconcile_code_with<R: Rng + ?Sized>(
    format: BarcodeFormat,
    code: &str,
    prefix: &str,
    rng: &mut R,
) -> Option<String> {
    let incompatible = if format.is_numeric() {
        !is_code_valid(format, code)
    } else if format.is_text() {
        looks_like_retail_code(code)
    } else {
        false
    };

    if incompatible {
        let replacement = sample_code_with(format, prefix, rng);
        tracing::debug!(%format, from = code, to = %replacement, "Replacing incompatible code");
        Some(replacement)
    } else {
        None
    }
}

/// File name for a downloaded SVG rendering.
#[must_use]
pub fn svg_file_name(format: BarcodeFormat, code: &str) -> String {
    format!("barcode-{}-{code}.svg", format.tag())
}

fn looks_like_retail_code(code: &str) -> bool {
    (8..=13).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_digit())
}
