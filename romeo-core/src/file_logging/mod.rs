//! Append-only operation log backed by log4rs.

pub mod setup;

pub use setup::{LOG_PATTERN, setup_file_logging};
