//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `kaidan_export` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use kaidan_export::initialization::init_logger_with;
use kaidan_export::{run_export, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    match run_export(config).await.context("Export failed") {
        Ok(report) => {
            println!("Exported: {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("kaidan_export error: {:#}", e);
            process::exit(1);
        }
    }
}
