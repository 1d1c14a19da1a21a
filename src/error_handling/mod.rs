//! Error handling.
//!
//! Errors are split into:
//! - **Initialization** failures (logger setup) raised before the export starts
//! - **Export** failures raised by the run itself: a missing database file,
//!   connection and table read failures, and output write failures
//!
//! None of them are retried; every failure aborts the run.

mod types;

// Re-export public API
pub use types::{ExportError, InitializationError};
