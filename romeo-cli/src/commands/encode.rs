//! Implementation of the 'encode' subcommand.
//!
//! Takes the plaintext from `--message` or from a prompt, encodes it with the
//! standard table and overwrites the message file with the result.

use crate::cli::EncodeArgs;
use crate::error::{CliErrorContext, CliResult};

use romeo_core::reporting::{EncodeOutcome, Reporter};
use romeo_core::{Codec, MessageStore, Payload};

use std::io::{BufRead, Write};

use log::{debug, info, warn};

/// Text shown before reading the plaintext from stdin.
pub const PROMPT: &str = "Enter your message: ";

/// Writes the prompt and reads one line, without its line ending.
pub fn prompt_message<R: BufRead, W: Write>(mut input: R, mut output: W) -> CliResult<String> {
    write!(output, "{PROMPT}").cli_context("Failed to write prompt")?;
    output.flush().cli_context("Failed to write prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .cli_context("Failed to read message from stdin")?;
    if read == 0 {
        return None::<String>.cli_context("No message entered (end of input)");
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// Runs the encode workflow. Nothing is written unless encoding succeeds.
pub fn run_encode<R: BufRead, W: Write>(
    args: &EncodeArgs,
    store: &dyn MessageStore,
    reporter: &dyn Reporter,
    input: R,
    prompt_output: W,
) -> CliResult<EncodeOutcome> {
    debug!("Started encoding process.");

    let plaintext = match &args.message {
        Some(message) => message.clone(),
        None => prompt_message(input, prompt_output)?,
    };
    debug!("User entered: {}", Payload(&plaintext));

    let codec = Codec::standard()?;
    let encoded = codec.encode(&plaintext).map_err(|e| {
        warn!("Failed to encode {}: {}", Payload(&plaintext), e);
        e
    })?;
    info!("Encoded {} to {}", Payload(&plaintext), Payload(&encoded));

    let location = store.location();
    store
        .write(&encoded)
        .cli_with_context(|| format!("Failed to save encoded message to {location}"))?;
    debug!("Successfully written {} to {}.", Payload(&encoded), location);

    let outcome = EncodeOutcome {
        plaintext,
        encoded,
        location,
    };
    reporter.encoded(&outcome);
    info!("The encoded message is saved in {}", outcome.location);

    debug!("Finished encoding process.");
    Ok(outcome)
}
