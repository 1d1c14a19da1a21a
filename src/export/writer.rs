//! Export file writing.
//!
//! The document is written to a temporary file inside the export directory and
//! renamed over the target once complete, so the target path only ever holds a
//! whole document. A failed write leaves the previous file (if any) untouched.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, info};
use serde::Serialize;

use crate::config::{EXPORT_FILE_EXTENSION, EXPORT_FILE_PREFIX, FILE_DATE_FORMAT};
use crate::error_handling::ExportError;

use super::document::ExportDocument;

/// File name for an export taken on `date`: `kaidan-export-YYYYMMDD.json`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!(
        "{}-export-{}.{}",
        EXPORT_FILE_PREFIX,
        date.format(FILE_DATE_FORMAT),
        EXPORT_FILE_EXTENSION
    )
}

/// Writes `document` into `export_dir` and returns the file path.
///
/// Creates `export_dir` (and parents) if needed. The JSON is pretty-printed
/// with two-space indentation and keeps non-ASCII text as UTF-8.
///
/// # Errors
///
/// Returns `ExportError::Io` if the directory cannot be created or the file
/// cannot be written or renamed, and `ExportError::Serialization` if the
/// document cannot be encoded.
pub fn write_document(
    document: &ExportDocument,
    export_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(export_dir).map_err(|e| ExportError::io(export_dir, e))?;

    let out_path = export_dir.join(export_file_name(date));
    write_json_atomic(document, export_dir, &out_path)?;

    info!("Wrote {}", out_path.display());
    Ok(out_path)
}

/// Serializes `value` into a temporary file in `dir`, then renames it onto
/// `out_path`. On any error the temporary file is removed and `out_path` is
/// left as it was.
fn write_json_atomic<T: Serialize + ?Sized>(
    value: &T,
    dir: &Path,
    out_path: &Path,
) -> Result<(), ExportError> {
    let mut temp = tempfile::Builder::new()
        .prefix(".kaidan-export-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| ExportError::io(dir, e))?;
    let temp_path = temp.path().to_path_buf();
    debug!("Writing export to temporary file {}", temp_path.display());

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
            if e.is_io() {
                ExportError::io(&temp_path, e.into())
            } else {
                ExportError::Serialization(e)
            }
        })?;
        writer
            .write_all(b"\n")
            .and_then(|()| writer.flush())
            .map_err(|e| ExportError::io(&temp_path, e))?;
    }
    temp.as_file()
        .sync_all()
        .map_err(|e| ExportError::io(&temp_path, e))?;

    // Dropping `temp` on any earlier return removes the temporary file
    temp.persist(out_path)
        .map_err(|e| ExportError::io(out_path, e.error))?;
    Ok(())
}
