//! Configuration structures and constants for the romeo-core library.
//!
//! The codec itself has no tunables: the table and delimiter are fixed so that
//! previously written messages stay decodable. What is configurable is where
//! the encoded message lives and where the operation log is appended.

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

// Default constants

/// Separator placed between tokens in an encoded message.
/// Never a digit, so it can never be confused with token content.
pub const DELIMITER: char = ',';

/// Shortest token length accepted in a code table.
pub const MIN_TOKEN_LEN: usize = 2;

/// Longest token length accepted in a code table.
pub const MAX_TOKEN_LEN: usize = 3;

/// File the encode workflow writes to and the decode workflow reads from.
pub const DEFAULT_MESSAGE_FILE: &str = "encrypted_msg.txt";

/// Directory holding the append-only operation log.
pub const DEFAULT_LOG_DIR: &str = "log";

/// File name of the operation log inside the log directory.
pub const DEFAULT_LOG_FILE: &str = "romeo.log";

/// Paths used by the encode and decode workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// File holding the encoded message
    pub message_path: PathBuf,

    /// Directory for the operation log
    pub log_dir: PathBuf,

    /// Log file name (a bare file name, placed inside `log_dir`)
    pub log_file: String,
}

impl CoreConfig {
    pub fn new(message_path: PathBuf, log_dir: PathBuf) -> Self {
        Self {
            message_path,
            log_dir,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// Full path of the operation log.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.message_path.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "Message file path must not be empty".to_string(),
            ));
        }

        if self.log_dir.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "Log directory must not be empty".to_string(),
            ));
        }

        let log_file = Path::new(&self.log_file);
        if self.log_file.is_empty() || log_file.file_name() != Some(log_file.as_os_str()) {
            return Err(CoreError::Config(format!(
                "Log file '{}' must be a plain file name",
                self.log_file
            )));
        }

        Ok(())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_MESSAGE_FILE),
            PathBuf::from(DEFAULT_LOG_DIR),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_constants() {
        let config = CoreConfig::default();
        assert_eq!(config.message_path, PathBuf::from("encrypted_msg.txt"));
        assert_eq!(config.log_path(), PathBuf::from("log").join("romeo.log"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn delimiter_is_not_a_digit() {
        assert!(!DELIMITER.is_ascii_digit());
    }

    #[test]
    fn empty_message_path_is_rejected() {
        let config = CoreConfig::new(PathBuf::new(), PathBuf::from("log"));
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn nested_log_file_is_rejected() {
        let mut config = CoreConfig::default();
        config.log_file = "nested/romeo.log".to_string();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        config.log_file = String::new();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }
}
