//! Library component for the Romeo CLI application.
//!
//! This contains the argument definitions and command logic that the binary
//! crate uses.

/// Command-line interface definitions using clap
pub mod cli;

/// Command implementations for each subcommand
pub mod commands;

/// Error handling utilities for the CLI
pub mod error;

/// Operation log setup
pub mod logging;

// Re-exports for convenience
pub use cli::{Cli, Commands, DecodeArgs, EncodeArgs, parse_cli, parse_cli_from};
pub use commands::decode::run_decode;
pub use commands::encode::run_encode;
