//! Database connection management.
//!
//! The exporter uses exactly one SQLite connection per run:
//! - opened read-only, never creating the database file
//! - closed once all tables are read, on the success and failure path alike

use std::path::Path;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use crate::error_handling::ExportError;

/// Fails with `ExportError::MissingDatabase` unless `db_path` is an existing file.
///
/// This runs before any connection attempt so a wrong path never results in
/// an empty database being created or an export directory being touched.
pub fn ensure_database_exists(db_path: &Path) -> Result<(), ExportError> {
    if db_path.is_file() {
        Ok(())
    } else {
        error!("Database file not found: {}", db_path.display());
        Err(ExportError::MissingDatabase(db_path.to_path_buf()))
    }
}

/// Opens a read-only connection to the database at `db_path`.
pub async fn open_connection(db_path: &Path) -> Result<SqliteConnection, ExportError> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false);

    let conn = options.connect().await.map_err(|e| {
        error!("Failed to connect to database: {e}");
        ExportError::Connection {
            path: db_path.to_path_buf(),
            source: e,
        }
    })?;

    info!("Opened database {}", db_path.display());
    Ok(conn)
}

/// Closes the connection, logging instead of failing.
///
/// By the time this runs the read result is already decided; a failed close
/// must not replace it.
pub async fn close_connection(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection cleanly: {e}");
    }
}
