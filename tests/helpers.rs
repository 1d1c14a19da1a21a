// Shared test helpers for database setup and test data creation.
//
// Builds a kaidan-pwa installation layout (`<root>/data/app.db`) in a scratch
// directory so tests can run the exporter end to end.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

/// Schema of the seven exported tables.
pub const SCHEMA: &str = r#"
CREATE TABLE settings (key TEXT PRIMARY KEY, value TEXT);
CREATE TABLE customers (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT UNIQUE, phone TEXT, address TEXT);
CREATE TABLE products (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT UNIQUE, spec_jin REAL, category TEXT);
CREATE TABLE vehicles (id INTEGER PRIMARY KEY AUTOINCREMENT, plate1 TEXT UNIQUE, plate2 TEXT, driver TEXT, phone TEXT);
CREATE TABLE invoices (
    id INTEGER PRIMARY KEY AUTOINCREMENT, invoice_no INTEGER, customer TEXT, date TEXT, date_iso TEXT,
    category TEXT, location TEXT, total_qty REAL, total_weight REAL, total_amount REAL,
    filename TEXT, created_at TEXT
);
CREATE TABLE invoice_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT, invoice_id INTEGER, product_name TEXT,
    spec_jin REAL, qty REAL, weight REAL, price REAL, amount REAL
);
CREATE TABLE invoice_audit (
    id INTEGER PRIMARY KEY AUTOINCREMENT, invoice_id INTEGER, action TEXT, detail TEXT, created_at TEXT
);
"#;

/// Column names per table, in declaration order.
#[allow(dead_code)] // Used by other test files
pub const COLUMNS: &[(&str, &[&str])] = &[
    ("settings", &["key", "value"]),
    ("customers", &["id", "name", "phone", "address"]),
    ("products", &["id", "name", "spec_jin", "category"]),
    ("vehicles", &["id", "plate1", "plate2", "driver", "phone"]),
    (
        "invoices",
        &[
            "id",
            "invoice_no",
            "customer",
            "date",
            "date_iso",
            "category",
            "location",
            "total_qty",
            "total_weight",
            "total_amount",
            "filename",
            "created_at",
        ],
    ),
    (
        "invoice_items",
        &[
            "id",
            "invoice_id",
            "product_name",
            "spec_jin",
            "qty",
            "weight",
            "price",
            "amount",
        ],
    ),
    (
        "invoice_audit",
        &["id", "invoice_id", "action", "detail", "created_at"],
    ),
];

/// Database path inside an installation root.
pub fn db_path_in(root: &Path) -> PathBuf {
    root.join("data").join("app.db")
}

/// Opens (creating if needed) a writable connection for seeding.
pub async fn open_writable(db_path: &Path) -> SqliteConnection {
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("Failed to open test database")
}

/// Creates `<root>/data/app.db` with the schema applied and returns a
/// writable connection to it.
pub async fn create_test_database(root: &Path) -> SqliteConnection {
    let db_path = db_path_in(root);
    std::fs::create_dir_all(db_path.parent().expect("db path has a parent"))
        .expect("Failed to create data directory");
    let mut conn = open_writable(&db_path).await;
    sqlx::raw_sql(SCHEMA)
        .execute(&mut conn)
        .await
        .expect("Failed to apply schema");
    conn
}

/// Seeds one row into every table.
#[allow(dead_code)] // Used by other test files
pub async fn seed_all_tables(conn: &mut SqliteConnection) {
    sqlx::raw_sql(
        r#"
        INSERT INTO settings (key, value) VALUES ('last_invoice_no', '1001');
        INSERT INTO customers (name, phone, address) VALUES ('张三物流', '13800000000', NULL);
        INSERT INTO products (name, spec_jin, category) VALUES ('大米', 50.0, '粮油');
        INSERT INTO vehicles (plate1, plate2, driver, phone) VALUES ('苏A12345', NULL, '李四', '13900000000');
        INSERT INTO invoices (invoice_no, customer, date, date_iso, category, location,
                              total_qty, total_weight, total_amount, filename, created_at)
            VALUES (1001, '张三物流', '2026年10月18日', '2026-10-18', '粮油', '南京',
                    10, 500.0, 1250.5, '1001.docx', '2026-10-18T08:00:00');
        INSERT INTO invoice_items (invoice_id, product_name, spec_jin, qty, weight, price, amount)
            VALUES (1, '大米', 50.0, 10, 500.0, 2.501, 1250.5);
        INSERT INTO invoice_audit (invoice_id, action, detail, created_at)
            VALUES (1, '新增', '导出单号1001', '2026-10-18T08:00:00');
        "#,
    )
    .execute(&mut *conn)
    .await
    .expect("Failed to seed tables");
}

/// Inserts a customer row.
#[allow(dead_code)] // Used by other test files
pub async fn insert_customer(conn: &mut SqliteConnection, name: &str) {
    sqlx::query("INSERT INTO customers (name) VALUES (?)")
        .bind(name)
        .execute(&mut *conn)
        .await
        .expect("Failed to insert customer");
}

/// Closes a seeding connection so the exporter sees committed data.
pub async fn close(conn: SqliteConnection) {
    conn.close().await.expect("Failed to close test database");
}

/// File names in `dir`, sorted.
#[allow(dead_code)] // Used by other test files
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| {
            e.expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
