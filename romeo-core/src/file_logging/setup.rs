use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::Path;
use anyhow::Result;

/// Line layout of the operation log: `[LEVEL | timestamp | pid] message`.
pub const LOG_PATTERN: &str = "[{l} | {d(%Y-%m-%d %H:%M:%S,%3f)} | {P}] {m}{n}";

/// Builds the log4rs configuration for an append-only log at `log_file`.
pub fn file_logging_config(log_file: &Path, log_level: LevelFilter) -> Result<Config> {
    // Create log directory if it doesn't exist
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file_appender = FileAppender::builder()
        .append(true)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_file)?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(Root::builder().appender("file").build(log_level))?;

    Ok(config)
}

/// Installs the file logger as the global `log` backend.
pub fn setup_file_logging(log_file: &Path, log_level: LevelFilter) -> Result<()> {
    let config = file_logging_config(log_file, log_level)?;
    log4rs::init_config(config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_log_directory() {
        let dir = tempdir().unwrap();
        let log_file = dir.path().join("log").join("romeo.log");

        file_logging_config(&log_file, LevelFilter::Info).unwrap();

        assert!(log_file.parent().unwrap().is_dir());
        assert!(log_file.exists());
    }

    #[test]
    fn existing_log_is_not_truncated() {
        let dir = tempdir().unwrap();
        let log_file = dir.path().join("romeo.log");
        std::fs::write(&log_file, "earlier entry\n").unwrap();

        file_logging_config(&log_file, LevelFilter::Debug).unwrap();

        let content = std::fs::read_to_string(&log_file).unwrap();
        assert_eq!(content, "earlier entry\n");
    }
}
