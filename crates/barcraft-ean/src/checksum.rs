//! EAN-13 check digit arithmetic.
//!
//! The check digit is the GS1 mod-10 scheme: digits are weighted 1 and 3
//! alternately (weight 1 on the first digit of an EAN-13 body), summed, and
//! the check digit is the distance to the next multiple of ten.

use crate::error::{ChecksumError, Result};
use barcraft_core::config::DEFAULT_PREFIX;
use rand::Rng;
use once_cell::sync::Lazy;
use regex::Regex;

/// Digits in an EAN-13 body (everything but the check digit).
pub const EAN13_BODY_LENGTH: usize = 12;

/// Total digits in an EAN-13 code.
pub const EAN13_LENGTH: usize = 13;

static DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));

/// Compute the EAN-13 check digit for a 12-digit body.
///
/// # Errors
/// Returns [`ChecksumError::InvalidLength`] unless the body is exactly 12
/// characters, and [`ChecksumError::InvalidDigit`] if any of them is not an
/// ASCII decimal digit.
///
/// # Example
/// ```
/// use barcraft_ean::calculate_checksum;
///
/// assert_eq!(calculate_checksum("400638133393"), Ok(1));
/// ```
pub fn calculate_checksum(twelve_digits: &str) -> Result<u8> {
    let digits = parse_digits(twelve_digits, EAN13_BODY_LENGTH)?;
    Ok(check_digit(&digits))
}

/// GS1 mod-10 check digit for a body of any length.
///
/// The digit closest to the check digit carries weight 3, so this agrees with
/// [`calculate_checksum`] for 12-digit bodies and also covers EAN-8 (7 digits)
/// and UPC-A (11 digits).
pub fn gs1_check_digit(body: &str) -> Result<u8> {
    let digits = parse_digits(body, body.chars().count())?;
    Ok(check_digit(&digits))
}

/// Whether `code` is a well-formed EAN-13 with a correct check digit.
///
/// Total over all inputs: anything that is not 13 ASCII digits is simply invalid.
#[must_use]
pub fn validate_ean13(code: &str) -> bool {
    if code.len() != EAN13_LENGTH || !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let (body, check) = code.split_at(EAN13_BODY_LENGTH);
    match calculate_checksum(body) {
        Ok(expected) => check.as_bytes()[0] - b'0' == expected,
        Err(_) => false,
    }
}

/// Check digit a 13-digit numeric code should end with.
///
/// Used to hint the correct last digit when a typed code fails validation.
/// Returns `None` when `code` is not 13 ASCII digits.
#[must_use]
pub fn expected_check_digit(code: &str) -> Option<u8> {
    if code.len() != EAN13_LENGTH || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    calculate_checksum(&code[..EAN13_BODY_LENGTH]).ok()
}

/// Generate a random valid EAN-13 starting with `prefix`.
///
/// A prefix containing anything but digits (including an empty prefix) is
/// replaced wholesale by `"789"`; a prefix longer than 12 digits is truncated.
/// The rest of the body is filled with uniformly random digits.
#[must_use]
pub fn generate_ean13(prefix: &str) -> String {
    generate_ean13_with(prefix, &mut rand::thread_rng())
}

/// [`generate_ean13`] with a caller-supplied random source.
pub fn generate_ean13_with<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> String {
    let prefix = normalize_prefix(prefix);

    let mut body = String::with_capacity(EAN13_LENGTH);
    body.push_str(prefix);
    body.push_str(&random_digits(rng, EAN13_BODY_LENGTH - prefix.len()));

    let digits: Vec<u8> = body.bytes().map(|b| b - b'0').collect();
    let check = check_digit(&digits);
    body.push(char::from(b'0' + check));

    tracing::debug!(prefix, code = %body, "Generated EAN-13");
    body
}

/// Whether `prefix` is non-empty and made only of ASCII digits.
#[must_use]
pub fn is_numeric_prefix(prefix: &str) -> bool {
    DIGITS_REGEX.is_match(prefix)
}

/// `count` uniformly random decimal digits.
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn normalize_prefix(prefix: &str) -> &str {
    if !is_numeric_prefix(prefix) {
        tracing::debug!(prefix, "Prefix is not numeric, falling back to {}", DEFAULT_PREFIX);
        return DEFAULT_PREFIX;
    }
    // ASCII only at this point, so byte slicing is safe
    &prefix[..prefix.len().min(EAN13_BODY_LENGTH)]
}

fn parse_digits(body: &str, expected: usize) -> Result<Vec<u8>> {
    let actual = body.chars().count();
    if actual != expected {
        return Err(ChecksumError::InvalidLength { expected, actual });
    }

    body.chars()
        .enumerate()
        .map(|(position, c)| {
            if c.is_ascii_digit() {
                Ok(c as u8 - b'0')
            } else {
                Err(ChecksumError::InvalidDigit { position, found: c })
            }
        })
        .collect()
}

fn check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    // sum % 10 < 10, so the cast is lossless
    ((10 - sum % 10) % 10) as u8
}
