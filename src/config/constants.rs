//! Configuration constants.
//!
//! This module defines the fixed names, locations and formats the exporter
//! works with. The installation layout is:
//!
//! ```text
//! <root>/data/app.db
//! <root>/exports/kaidan-export-YYYYMMDD.json
//! ```

/// Application identifier written into `meta.app` of every export.
pub const APP_NAME: &str = "kaidan-pwa";

/// Prefix of the export file name (`<prefix>-export-<date>.json`).
pub const EXPORT_FILE_PREFIX: &str = "kaidan";

/// Extension of the export file.
pub const EXPORT_FILE_EXTENSION: &str = "json";

/// Database location relative to the installation root.
pub const DB_RELATIVE_PATH: &str = "data/app.db";

/// Export directory name relative to the installation root.
pub const EXPORT_DIR_NAME: &str = "exports";

/// `chrono` format for `meta.exported_at` (ISO-8601, second precision, local time).
pub const EXPORTED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `chrono` format for the date component of the export file name.
pub const FILE_DATE_FORMAT: &str = "%Y%m%d";
