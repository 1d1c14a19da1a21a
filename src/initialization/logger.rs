//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use colored::*;
use log::LevelFilter;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats. Output goes to stderr so stdout only carries
/// the final `Exported: <path>` line.
///
/// `level` sets the default filter and `sqlx` is held at `warn`. Directives
/// from the `RUST_LOG` environment variable are applied on top of both, except
/// that `level` always governs this crate's own targets.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=sqlx=debug kaidan_export --log-level debug
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::new();
    apply_filters(
        &mut builder,
        level,
        std::env::var("RUST_LOG").ok().as_deref(),
    );

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_log_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init() so a second initialization (tests) reports an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Filter precedence, lowest first: `level`, the `sqlx` default,
/// `rust_log` directives, then `level` again for `kaidan_export`.
fn apply_filters(builder: &mut env_logger::Builder, level: LevelFilter, rust_log: Option<&str>) {
    builder.filter_level(level);
    // sqlx logs every statement at info; keep it quiet unless asked for
    builder.filter_module("sqlx", LevelFilter::Warn);
    if let Some(directives) = rust_log {
        builder.parse_filters(directives);
    }
    builder.filter_module("kaidan_export", level);
}

/// Renders one structured log line.
fn json_log_line(ts_millis: i64, level: log::Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}
