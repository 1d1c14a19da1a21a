//! Export types.

use serde::Serialize;
use strum_macros::EnumIter;

/// One database row: column name to scalar value, in the table's column order.
pub type RowRecord = serde_json::Map<String, serde_json::Value>;

/// The tables included in every export, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ExportTable {
    /// Key/value app settings (e.g. `last_invoice_no`)
    Settings,
    /// Customer directory
    Customers,
    /// Product catalogue
    Products,
    /// Vehicles, plates and drivers
    Vehicles,
    /// Invoice headers
    Invoices,
    /// Invoice line items
    InvoiceItems,
    /// Invoice change log
    InvoiceAudit,
}

impl std::fmt::Display for ExportTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ExportTable {
    /// Table name in the database, also the collection key in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportTable::Settings => "settings",
            ExportTable::Customers => "customers",
            ExportTable::Products => "products",
            ExportTable::Vehicles => "vehicles",
            ExportTable::Invoices => "invoices",
            ExportTable::InvoiceItems => "invoice_items",
            ExportTable::InvoiceAudit => "invoice_audit",
        }
    }
}

/// The `meta` block of an export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportMeta {
    /// Application identifier
    pub app: String,
    /// Local timestamp, `YYYY-MM-DDTHH:MM:SS`
    pub exported_at: String,
}
