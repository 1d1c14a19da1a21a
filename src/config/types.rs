//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::constants::{DB_RELATIVE_PATH, EXPORT_DIR_NAME};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exporter configuration.
///
/// With no overrides the exporter reads `<root>/data/app.db` and writes into
/// `<root>/exports/`, where `<root>` is the installation root (see
/// [`default_root`]). Every field can also be set programmatically.
///
/// # Examples
///
/// ```no_run
/// use kaidan_export::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     root: Some(PathBuf::from("/opt/kaidan")),
///     ..Default::default()
/// };
/// assert_eq!(config.database_path(), PathBuf::from("/opt/kaidan/data/app.db"));
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "kaidan_export",
    version,
    about = "Export the kaidan-pwa database to a dated JSON file"
)]
pub struct Config {
    /// Installation root holding `data/` and `exports/` (defaults to the
    /// parent of the directory containing this executable)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Database file (overrides `<root>/data/app.db`)
    #[arg(long)]
    pub db_path: Option<PathBuf>,

    /// Export directory (overrides `<root>/exports`)
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            db_path: None,
            export_dir: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Installation root: the `--root` override or [`default_root`].
    pub fn install_root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(default_root)
    }

    /// Resolved database file path.
    pub fn database_path(&self) -> PathBuf {
        match &self.db_path {
            Some(path) => path.clone(),
            None => self.install_root().join(DB_RELATIVE_PATH),
        }
    }

    /// Resolved export directory.
    pub fn export_directory(&self) -> PathBuf {
        match &self.export_dir {
            Some(dir) => dir.clone(),
            None => self.install_root().join(EXPORT_DIR_NAME),
        }
    }
}

/// Returns the installation root.
///
/// The exporter ships one level below the app root (`<root>/tools/kaidan_export`),
/// so the root is the parent of the executable's directory. Falls back to the
/// current directory when the executable path is unavailable.
pub fn default_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| root_from_executable(&exe))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn root_from_executable(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}
