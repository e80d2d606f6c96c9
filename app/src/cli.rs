//! CLI argument definitions for the barcraft binary.

use barcraft_core::BarcodeFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "barcraft",
    version,
    about = "Create, validate and keep a library of barcodes",
    long_about = "Create, validate and keep a library of barcodes.\n\n\
                  Generates EAN-13 codes with valid check digits and stores saved\n\
                  barcodes as JSON in the data directory. Output is JSON on stdout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Store barcodes in this directory instead of the configured one.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the platform config path.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a random sample code.
    Generate {
        /// Barcode format tag (EAN13, EAN8, UPC, CODE128, ...).
        #[arg(long)]
        format: Option<BarcodeFormat>,

        /// Prefix for EAN-13 codes (defaults to the configured one).
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Check a code against the rules of its format.
    Validate {
        code: String,

        #[arg(long, default_value = "EAN13")]
        format: BarcodeFormat,
    },

    /// Complete a 12-digit EAN-13 body with its check digit.
    Checksum {
        #[arg(value_name = "DIGITS")]
        body: String,
    },

    /// Switch the working format, replacing a code it cannot carry.
    Switch {
        code: String,

        #[arg(long)]
        format: BarcodeFormat,
    },

    /// Save a barcode to the library.
    Save {
        code: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        format: Option<BarcodeFormat>,
    },

    /// List saved barcodes.
    List {
        /// Only show barcodes whose name or code contains this text.
        #[arg(long, short)]
        query: Option<String>,
    },

    /// Rename a saved barcode or change its code.
    Update {
        id: String,

        #[arg(long)]
        code: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },

    /// Delete a saved barcode.
    Delete { id: String },

    /// Merge a JSON backup into the library.
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Write the library to a JSON backup.
    Export {
        /// Destination (default: barcode-backup-<date>.json in the current directory).
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// List the country prefixes offered for EAN-13 codes.
    Prefixes,

    /// Show the effective configuration.
    Config {
        /// Write the effective configuration to the config file.
        #[arg(long)]
        save: bool,
    },

    /// Set the format preselected for new barcodes.
    DefaultFormat { format: BarcodeFormat },
}
