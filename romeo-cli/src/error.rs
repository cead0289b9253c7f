//! CLI error handling utilities.
//!
//! The CLI reuses `CoreError` and adds a small extension trait for attaching
//! context to failures, plus the mapping from errors to exit codes.

use romeo_core::{CodecError, CoreError, CoreResult};

use std::fmt;

/// Exit code for a usage problem (no verb, bad arguments).
pub const EXIT_USAGE: i32 = 2;

/// Exit code for a failed encode or decode.
pub const EXIT_FAILURE: i32 = 1;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Adds context to errors in the CLI, in the spirit of anyhow's `context`.
pub trait CliErrorContext<T> {
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;

    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", context, core_error))
        })
    }

    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", f(), core_error))
        })
    }
}

impl<T> CliErrorContext<T> for Option<T> {
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.ok_or_else(|| CoreError::OperationFailed(context.to_string()))
    }

    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| CoreError::OperationFailed(f().to_string()))
    }
}

/// Short hint shown under an error, when there is something the user can do.
pub fn suggestion_for(error: &CoreError) -> Option<&'static str> {
    match error {
        CoreError::Codec(CodecError::UnsupportedCharacter { .. }) => Some(
            "Only letters, spaces and the punctuation , . ; ' ? ! : can be encoded",
        ),
        CoreError::Codec(CodecError::MalformedToken { .. } | CodecError::UnknownToken { .. }) => {
            Some("The message file is not a valid encoded message; encode a new one")
        }
        CoreError::Table(_) => Some("The built-in code table is corrupted; reinstall romeo"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_prefixed() {
        let result: Result<(), CodecError> = Err(CodecError::UnknownToken {
            token: "999".to_string(),
            position: 1,
        });
        let err = result.cli_context("Failed to decode").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Operation failed: Failed to decode: Unknown token '999' at position 1"
        );
    }

    #[test]
    fn none_becomes_operation_failed() {
        let value: Option<u8> = None;
        let err = value.cli_with_context(|| "nothing here").unwrap_err();
        assert!(matches!(err, CoreError::OperationFailed(msg) if msg == "nothing here"));
    }

    #[test]
    fn codec_errors_carry_suggestions() {
        let err = CoreError::Codec(CodecError::UnsupportedCharacter {
            character: '@',
            position: 2,
        });
        assert!(suggestion_for(&err).is_some());
        assert!(suggestion_for(&CoreError::Config("x".to_string())).is_none());
    }
}
