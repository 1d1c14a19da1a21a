//! kaidan_export library: backup export of the kaidan-pwa database
//!
//! Reads every row of the app's seven tables (`settings`, `customers`,
//! `products`, `vehicles`, `invoices`, `invoice_items`, `invoice_audit`) from
//! the local SQLite database and writes them, together with a small metadata
//! block, to `exports/kaidan-export-YYYYMMDD.json`.
//!
//! # Example
//!
//! ```no_run
//! use kaidan_export::{run_export, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     root: Some(PathBuf::from("/opt/kaidan")),
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! println!("Exported {} rows to {}", report.total_rows, report.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. A single-threaded runtime is enough:
//! the export never runs anything concurrently.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ExportError, InitializationError};
pub use run::{run_export, run_export_at, ExportReport};

// Internal run module (connect, read, assemble, write)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use chrono::{Local, NaiveDateTime};
    use log::info;

    use crate::config::Config;
    use crate::error_handling::ExportError;
    use crate::export::{assemble_document, write_document, ExportTable};
    use crate::storage::{close_connection, ensure_database_exists, open_connection};

    /// Results of an export run.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Path of the written export file
        pub output_path: PathBuf,
        /// Rows exported per table, in document order
        pub table_counts: Vec<(ExportTable, usize)>,
        /// Sum of all exported rows
        pub total_rows: usize,
        /// Value written to `meta.exported_at`
        pub exported_at: String,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an export stamped with the current local time.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The database file does not exist (`ExportError::MissingDatabase`);
    ///   nothing is written in that case
    /// - The database cannot be opened or any table cannot be read
    /// - The export directory or file cannot be written
    pub async fn run_export(config: Config) -> Result<ExportReport, ExportError> {
        run_export_at(config, Local::now().naive_local()).await
    }

    /// Runs an export stamped with `now`.
    ///
    /// `now` drives both `meta.exported_at` and the date in the file name.
    pub async fn run_export_at(
        config: Config,
        now: NaiveDateTime,
    ) -> Result<ExportReport, ExportError> {
        let start_time = Instant::now();
        let db_path = config.database_path();
        let export_dir = config.export_directory();

        ensure_database_exists(&db_path)?;

        let mut conn = open_connection(&db_path).await?;
        let assembled = assemble_document(&mut conn, now).await;
        // Closed on both the success and failure path before `?`
        close_connection(conn).await;
        let document = assembled?;

        let table_counts = document.table_counts();
        for (table, count) in &table_counts {
            info!("{table}: {count} rows");
        }
        let total_rows: usize = table_counts.iter().map(|(_, count)| count).sum();

        let output_path = write_document(&document, &export_dir, now.date())?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Exported {} rows from {} tables in {:.2}s",
            total_rows,
            table_counts.len(),
            elapsed_seconds
        );

        Ok(ExportReport {
            output_path,
            table_counts,
            total_rows,
            exported_at: document.meta.exported_at,
            elapsed_seconds,
        })
    }
}
