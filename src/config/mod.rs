//! Application configuration and constants.
//!
//! This module provides:
//! - Fixed names and locations (database path, export directory, file naming)
//! - CLI option types and path resolution

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{default_root, Config, LogFormat, LogLevel};
