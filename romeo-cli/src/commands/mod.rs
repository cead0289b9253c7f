//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `encode` command.
pub mod encode;

/// Module containing the implementation of the `decode` command.
pub mod decode;
