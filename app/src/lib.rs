//! Barcraft Application Shell
//!
//! This is the thin application shell that loads configuration, wires up state
//! and dispatches CLI commands. Core business logic lives in the `crates/` directory.

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use anyhow::Context;
use barcraft_core::AppConfig;
use cli::{Cli, Command};
use commands::{backup, barcode, library, settings};
use serde::Serialize;
use state::AppState;
use tracing::info;

/// Initialize tracing subscriber for logging.
///
/// Logs go to stderr so stdout stays machine-readable.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose { "debug" } else { "warn,barcraft=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Load the effective configuration for a CLI invocation.
pub fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = AppConfig::load_from(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            config.apply_env().context("applying environment overrides")?;
            config
        }
        None => AppConfig::load_with_env().context("loading config")?,
    };

    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
    Ok(config)
}

/// Run one CLI invocation, printing its result as JSON on stdout.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    // Commands that never touch the library
    match &cli.command {
        Command::Validate { code, format } => {
            return print_json(&barcode::validate_code(*format, code));
        }
        Command::Checksum { body } => return print_json(&barcode::checksum_hint(body)?),
        Command::Prefixes => return print_json(barcode::list_prefixes()),
        Command::Config { save } => {
            if *save {
                match &cli.config {
                    Some(path) => config.save_to(path)?,
                    None => config.save()?,
                }
                info!("Configuration saved");
            }
            return print_json(&config);
        }
        _ => {}
    }

    let mut state = AppState::new(config)?;

    match cli.command {
        Command::Generate { format, prefix } => {
            print_json(&barcode::generate_code(&state, format, prefix.as_deref())?)
        }
        Command::Switch { code, format } => {
            print_json(&barcode::switch_format(&mut state, &code, format)?)
        }
        Command::Save { code, name, format } => {
            print_json(&library::save_barcode(&mut state, &code, name, format)?)
        }
        Command::List { query } => print_json(&library::list_barcodes(&state, query.as_deref())),
        Command::Update { id, code, name } => {
            let updated = library::update_barcode(&mut state, &id, code.as_deref(), name)?;
            print_json(&updated)
        }
        Command::Delete { id } => {
            let deleted = library::delete_barcode(&mut state, &id)?;
            print_json(&serde_json::json!({ "id": id, "deleted": deleted }))
        }
        Command::Import { file } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("reading backup {}", file.display()))?;
            print_json(&backup::import_barcodes(&mut state, &json)?)
        }
        Command::Export { file } => {
            let exported = backup::export_barcodes(&state)?;
            let path = file.unwrap_or_else(|| exported.file_name.clone().into());
            std::fs::write(&path, &exported.contents)
                .with_context(|| format!("writing backup {}", path.display()))?;
            info!("Exported {} barcodes to {}", exported.count, path.display());
            print_json(&serde_json::json!({ "path": path, "count": exported.count }))
        }
        Command::DefaultFormat { format } => {
            settings::set_default_format(&mut state, format)?;
            print_json(&serde_json::json!({ "defaultFormat": format }))
        }
        Command::Validate { .. }
        | Command::Checksum { .. }
        | Command::Prefixes
        | Command::Config { .. } => Ok(()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
