//! Export document assembly.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::sqlite::SqliteConnection;
use strum::IntoEnumIterator;

use crate::config::{APP_NAME, EXPORTED_AT_FORMAT};
use crate::error_handling::ExportError;

use super::row::fetch_table;
use super::types::{ExportMeta, ExportTable, RowRecord};

/// The complete export: metadata plus one collection per table.
///
/// Field order is the serialized key order. Empty tables serialize as `[]`.
#[derive(Debug, Clone, Serialize)]
#[allow(missing_docs)] // One field per table, named after it
pub struct ExportDocument {
    pub meta: ExportMeta,
    pub settings: Vec<RowRecord>,
    pub customers: Vec<RowRecord>,
    pub products: Vec<RowRecord>,
    pub vehicles: Vec<RowRecord>,
    pub invoices: Vec<RowRecord>,
    pub invoice_items: Vec<RowRecord>,
    pub invoice_audit: Vec<RowRecord>,
}

impl ExportDocument {
    /// Creates a document with the given export time and no rows.
    pub fn new(exported_at: NaiveDateTime) -> Self {
        Self {
            meta: ExportMeta {
                app: APP_NAME.to_string(),
                exported_at: exported_at.format(EXPORTED_AT_FORMAT).to_string(),
            },
            settings: Vec::new(),
            customers: Vec::new(),
            products: Vec::new(),
            vehicles: Vec::new(),
            invoices: Vec::new(),
            invoice_items: Vec::new(),
            invoice_audit: Vec::new(),
        }
    }

    /// Rows exported for `table`.
    pub fn rows(&self, table: ExportTable) -> &[RowRecord] {
        match table {
            ExportTable::Settings => &self.settings,
            ExportTable::Customers => &self.customers,
            ExportTable::Products => &self.products,
            ExportTable::Vehicles => &self.vehicles,
            ExportTable::Invoices => &self.invoices,
            ExportTable::InvoiceItems => &self.invoice_items,
            ExportTable::InvoiceAudit => &self.invoice_audit,
        }
    }

    fn rows_mut(&mut self, table: ExportTable) -> &mut Vec<RowRecord> {
        match table {
            ExportTable::Settings => &mut self.settings,
            ExportTable::Customers => &mut self.customers,
            ExportTable::Products => &mut self.products,
            ExportTable::Vehicles => &mut self.vehicles,
            ExportTable::Invoices => &mut self.invoices,
            ExportTable::InvoiceItems => &mut self.invoice_items,
            ExportTable::InvoiceAudit => &mut self.invoice_audit,
        }
    }

    /// Row count per table, in document order.
    pub fn table_counts(&self) -> Vec<(ExportTable, usize)> {
        ExportTable::iter()
            .map(|table| (table, self.rows(table).len()))
            .collect()
    }
}

/// Reads every exported table and assembles the document.
///
/// Tables are read in document order. The first failing read aborts the
/// assembly and its error is returned; no partial document escapes.
pub async fn assemble_document(
    conn: &mut SqliteConnection,
    exported_at: NaiveDateTime,
) -> Result<ExportDocument, ExportError> {
    let mut document = ExportDocument::new(exported_at);
    for table in ExportTable::iter() {
        let rows = fetch_table(conn, table.as_str()).await?;
        *document.rows_mut(table) = rows;
    }
    Ok(document)
}
