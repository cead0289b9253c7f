//! Operation log setup for the CLI.
//!
//! The log is appended to `<log_dir>/romeo.log` through log4rs. Info level
//! records what was encoded and decoded; `--verbose` adds the debug trail
//! (workflow start/finish, prompt input, file reads and writes).

use crate::cli::{Cli, Commands};
use crate::error::CliResult;

use romeo_core::CoreConfig;
use romeo_core::config::DEFAULT_MESSAGE_FILE;
use romeo_core::error::CoreError;
use romeo_core::file_logging::setup_file_logging;

use log::LevelFilter;
use std::path::PathBuf;

pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Builds the core configuration from parsed arguments.
pub fn core_config(cli: &Cli) -> CoreConfig {
    let message_path = match &cli.command {
        Some(Commands::Encode(args)) => args.file.clone(),
        Some(Commands::Decode(args)) => args.file.clone(),
        None => PathBuf::from(DEFAULT_MESSAGE_FILE),
    };
    CoreConfig::new(message_path, cli.log_dir.clone())
}

/// Installs the file logger unless `--no-log` was given.
///
/// Returns the log path when logging was enabled.
pub fn init_logging(cli: &Cli, config: &CoreConfig) -> CliResult<Option<PathBuf>> {
    if cli.no_log {
        return Ok(None);
    }

    let log_path = config.log_path();
    let level = log_level(cli.verbose);

    setup_file_logging(&log_path, level).map_err(|e| {
        CoreError::OperationFailed(format!(
            "Failed to set up file logging to {}: {}",
            log_path.display(),
            e
        ))
    })?;

    if level == LevelFilter::Debug {
        log::debug!("Debug level logging enabled");
    }

    Ok(Some(log_path))
}
