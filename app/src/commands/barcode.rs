//! Code generation and validation commands.

use crate::error::CommandError;
use crate::state::AppState;
use barcraft_core::BarcodeFormat;
use barcraft_ean::{
    calculate_checksum, expected_check_digit, gs1_check_digit, is_code_valid, reconcile_code,
    sample_code, svg_file_name, CountryPrefix, COUNTRY_PREFIXES,
};
use barcraft_store::settings;
use serde::Serialize;
use tracing::{debug, info};

/// Response for generate_code command.
#[derive(Debug, Serialize)]
pub struct GeneratedCode {
    pub format: BarcodeFormat,
    pub code: String,
    pub prefix: String,
    pub svg_file_name: String,
}

/// Response for validate_code command.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub format: BarcodeFormat,
    pub code: String,
    pub valid: bool,
    /// Check digit the body requires, for fixed-length numeric formats
    pub expected_check_digit: Option<u8>,
}

/// Response for checksum_hint command.
#[derive(Debug, Serialize)]
pub struct ChecksumHint {
    pub body: String,
    pub check_digit: u8,
    pub code: String,
}

/// Response for switch_format command.
#[derive(Debug, Serialize)]
pub struct FormatSwitch {
    pub format: BarcodeFormat,
    pub code: String,
    /// Whether the previous code was incompatible and got replaced
    pub replaced: bool,
}

/// Generate a sample code.
///
/// Format defaults to the remembered one, prefix to the configured one.
pub fn generate_code(
    state: &AppState,
    format: Option<BarcodeFormat>,
    prefix: Option<&str>,
) -> Result<GeneratedCode, CommandError> {
    let format = match format {
        Some(format) => format,
        None => state.current_format()?,
    };
    let prefix = prefix.unwrap_or(&state.config.general.default_prefix);

    let code = sample_code(format, prefix);
    info!("Generated {} code {}", format, code);

    Ok(GeneratedCode {
        format,
        svg_file_name: svg_file_name(format, &code),
        code,
        prefix: prefix.to_string(),
    })
}

/// Check a code against the rules of its format.
#[must_use]
pub fn validate_code(format: BarcodeFormat, code: &str) -> ValidationReport {
    let valid = is_code_valid(format, code);
    debug!("Validated {} code {}: {}", format, code, valid);

    ValidationReport {
        format,
        code: code.to_string(),
        valid,
        expected_check_digit: required_check_digit(format, code),
    }
}

/// Complete a 12-digit EAN-13 body with its check digit.
pub fn checksum_hint(body: &str) -> Result<ChecksumHint, CommandError> {
    let check_digit = calculate_checksum(body)?;
    Ok(ChecksumHint {
        body: body.to_string(),
        check_digit,
        code: format!("{body}{check_digit}"),
    })
}

/// Switch the working format, replacing a code the new format cannot carry.
///
/// The new format is remembered for the next session.
pub fn switch_format(
    state: &mut AppState,
    code: &str,
    format: BarcodeFormat,
) -> Result<FormatSwitch, CommandError> {
    let replacement = reconcile_code(format, code, &state.config.general.default_prefix);
    settings::save_last_format(&mut state.settings, format)?;

    let replaced = replacement.is_some();
    if replaced {
        info!("Code {} is not usable as {}, replaced", code, format);
    }

    Ok(FormatSwitch {
        format,
        code: replacement.unwrap_or_else(|| code.to_string()),
        replaced,
    })
}

/// Country prefixes offered for EAN-13 generation.
#[must_use]
pub fn list_prefixes() -> &'static [CountryPrefix] {
    &COUNTRY_PREFIXES
}

/// Check digit required by a fixed-length numeric code, if it has the right shape.
pub(crate) fn required_check_digit(format: BarcodeFormat, code: &str) -> Option<u8> {
    match format {
        BarcodeFormat::Ean13 => expected_check_digit(code),
        BarcodeFormat::Ean8 | BarcodeFormat::Upc => {
            let len = format.fixed_length()?;
            if code.len() != len || !code.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            gs1_check_digit(&code[..len - 1]).ok()
        }
        _ => None,
    }
}
