//! Table reading.
//!
//! Reads every row of a table into [`RowRecord`]s. Values are converted by
//! their SQLite storage class, not the declared column type, since SQLite
//! columns may hold any class:
//!
//! | storage class | JSON                                |
//! |---------------|-------------------------------------|
//! | `NULL`        | `null`                              |
//! | `INTEGER`     | integer                             |
//! | `REAL`        | number (`null` if not finite)       |
//! | `TEXT`        | string                              |
//! | `BLOB`        | base64 string (standard, padded)    |

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::debug;
use serde_json::{Number, Value};
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::error_handling::ExportError;

use super::types::RowRecord;

/// Reads all rows of `table` in the database's natural order.
///
/// No `ORDER BY` is applied, so the order is whatever SQLite returns for a
/// full scan (rowid order for ordinary tables).
///
/// # Errors
///
/// Returns `ExportError::Database` if the table does not exist, the
/// connection is unusable, or a value cannot be decoded.
pub async fn fetch_table(
    conn: &mut SqliteConnection,
    table: &str,
) -> Result<Vec<RowRecord>, ExportError> {
    let sql = format!("SELECT * FROM {}", quote_identifier(table));
    let rows = sqlx::query(&sql)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| ExportError::database(table, e))?;

    let records = rows
        .iter()
        .map(row_to_record)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ExportError::database(table, e))?;

    debug!("Read {} rows from {}", records.len(), table);
    Ok(records)
}

fn row_to_record(row: &SqliteRow) -> Result<RowRecord, sqlx::Error> {
    let mut record = RowRecord::new();
    for column in row.columns() {
        let value = column_value(row, column.ordinal())?;
        record.insert(column.name().to_string(), value);
    }
    Ok(record)
}

fn column_value(row: &SqliteRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let storage_class = raw.type_info().name().to_string();

    let value = match storage_class.as_str() {
        "INTEGER" => Value::from(row.try_get::<i64, _>(index)?),
        "REAL" => Number::from_f64(row.try_get::<f64, _>(index)?)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "BLOB" => Value::String(BASE64.encode(row.try_get::<Vec<u8>, _>(index)?)),
        _ => Value::String(row.try_get::<String, _>(index)?),
    };
    Ok(value)
}

/// Double-quotes an SQL identifier, doubling any embedded quotes.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
