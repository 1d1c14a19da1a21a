//! Export functionality for the kaidan-pwa database.
//!
//! This module reads the exported tables from SQLite, assembles them into a
//! single [`ExportDocument`] and writes it to a dated JSON file:
//! - `row`: reads one table into row records
//! - `document`: assembles all tables plus metadata
//! - `writer`: serializes and persists the document

mod document;
mod row;
mod types;
mod writer;

pub use document::{assemble_document, ExportDocument};
pub use row::fetch_table;
pub use types::{ExportMeta, ExportTable, RowRecord};
pub use writer::{export_file_name, write_document};
