//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for an export run.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The database file does not exist. Checked before any connection is made.
    #[error("Database not found: {}", .0.display())]
    MissingDatabase(PathBuf),

    /// Opening the database failed.
    #[error("Failed to open database {}: {source}", path.display())]
    Connection {
        /// Database file that could not be opened
        path: PathBuf,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// Reading a table failed (missing table, unusable connection, bad value).
    #[error("Failed to read table '{table}': {source}")]
    Database {
        /// Table being read
        table: String,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// Creating the export directory or writing the export file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The export document could not be encoded.
    #[error("Failed to serialize export document: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn database(table: impl Into<String>, source: sqlx::Error) -> Self {
        ExportError::Database {
            table: table.into(),
            source,
        }
    }
}
