//! Settings commands.

use crate::error::CommandError;
use crate::state::AppState;
use barcraft_core::BarcodeFormat;
use barcraft_store::settings;

/// Remember the format preselected for new barcodes.
pub fn set_default_format(state: &mut AppState, format: BarcodeFormat) -> Result<(), CommandError> {
    settings::save_last_format(&mut state.settings, format)?;
    Ok(())
}

/// Format preselected for new barcodes.
pub fn get_default_format(state: &AppState) -> Result<BarcodeFormat, CommandError> {
    state.current_format()
}
