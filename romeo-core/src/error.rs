//! Error types for the romeo-core library.
//!
//! Errors are split by where they can occur:
//! - `TableIntegrityError`: the code table itself is invalid. Fatal at startup.
//! - `CodecError`: a single encode or decode call was given bad input.
//! - `CoreError`: umbrella type for everything the library and CLI surface,
//!   including storage and configuration failures.

use std::path::PathBuf;
use thiserror::Error;

/// The code table failed validation while being built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableIntegrityError {
    #[error("Code table has no entries")]
    Empty,

    #[error("Token '{token}' is assigned to both '{first}' and '{second}'")]
    DuplicateToken {
        token: String,
        first: char,
        second: char,
    },

    #[error("Character '{character}' appears more than once in the code table")]
    DuplicateCharacter { character: char },

    #[error("Token '{token}' for '{character}' is not a {min}-{max} digit string")]
    InvalidToken {
        character: char,
        token: String,
        min: usize,
        max: usize,
    },
}

/// Failure of a single encode or decode operation.
///
/// Positions are zero-based: a character index for encode, a token index
/// for decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Unsupported character '{character}' at position {position}")]
    UnsupportedCharacter { character: char, position: usize },

    #[error("Malformed token '{token}' at position {position}")]
    MalformedToken { token: String, position: usize },

    #[error("Unknown token '{token}' at position {position}")]
    UnknownToken { token: String, position: usize },
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Code table integrity error: {0}")]
    Table(#[from] TableIntegrityError),

    #[error("{0}")]
    Codec(#[from] CodecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Message file not found: {}", .0.display())]
    MessageNotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
