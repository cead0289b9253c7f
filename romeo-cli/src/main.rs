//! Main entry point for the Romeo CLI application.
//!
//! This handles command-line argument parsing, logging setup, and dispatching
//! to the encode and decode workflows. Errors are shown through the selected
//! reporter and turned into the process exit code.

use romeo::error::{EXIT_FAILURE, EXIT_USAGE, suggestion_for};
use romeo::logging::{core_config, init_logging};
use romeo::{Cli, Commands, parse_cli, run_decode, run_encode};
use romeo_core::reporting::{JsonReporter, Reporter, ReporterError, TerminalReporter};
use romeo_core::{CodeTable, CoreError, FileMessageStore};

use log::{error, info, warn};
use std::io::{self, Write};
use std::process;

const NO_COMMAND_MESSAGE: &str =
    "Argument not found. Please specify 'encode' or 'decode' when running the program.";

fn main() {
    let cli = parse_cli();
    process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let json = cli.json;
    let reporter: Box<dyn Reporter> = if json {
        Box::new(JsonReporter::new())
    } else {
        Box::new(TerminalReporter::new())
    };

    let config = core_config(&cli);
    if let Err(e) = config.validate() {
        report_failure(reporter.as_ref(), "Invalid configuration", &e);
        return EXIT_USAGE;
    }

    match init_logging(&cli, &config) {
        Ok(Some(log_path)) => info!("Romeo starting, logging to {}", log_path.display()),
        Ok(None) => {}
        Err(e) => {
            report_failure(reporter.as_ref(), "Logging setup failed", &e);
            return EXIT_FAILURE;
        }
    }

    // Refuse to run with a table that could lose data.
    if let Err(e) = CodeTable::standard() {
        let e = CoreError::from(e);
        error!("{}", e);
        report_failure(reporter.as_ref(), "Startup failed", &e);
        return EXIT_FAILURE;
    }

    let result = match cli.command {
        None => {
            warn!("User did not enter an argument.");
            reporter.warning(NO_COMMAND_MESSAGE);
            return EXIT_USAGE;
        }
        Some(Commands::Encode(args)) => {
            let store = FileMessageStore::new(args.file.clone());
            // Keep stdout clean for JSON consumers.
            let prompt_output: Box<dyn Write> = if json {
                Box::new(io::stderr())
            } else {
                Box::new(io::stdout())
            };
            run_encode(&args, &store, reporter.as_ref(), io::stdin().lock(), prompt_output)
                .map(|_| ())
                .map_err(|e| ("Encode failed", e))
        }
        Some(Commands::Decode(args)) => {
            let store = FileMessageStore::new(args.file.clone());
            run_decode(&store, reporter.as_ref())
                .map(|_| ())
                .map_err(|e| ("Decode failed", e))
        }
    };

    match result {
        Ok(()) => 0,
        Err((title, e)) => {
            error!("{}: {}", title, e);
            report_failure(reporter.as_ref(), title, &e);
            EXIT_FAILURE
        }
    }
}

fn report_failure(reporter: &dyn Reporter, title: &str, error: &CoreError) {
    let mut report = ReporterError::new(title, error.to_string());
    if let Some(suggestion) = suggestion_for(error) {
        report = report.with_suggestion(suggestion);
    }
    reporter.error(&report);
}
