// storage/mod.rs
// Database access: connection lifecycle and test fixtures

pub mod connection;

// Re-export commonly used items
pub use connection::{close_connection, ensure_database_exists, open_connection};
