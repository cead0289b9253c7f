//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use romeo_core::config::{DEFAULT_LOG_DIR, DEFAULT_MESSAGE_FILE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Romeo: encode and decode messages with a fixed substitution table",
    long_about = "Encodes plaintext into comma-separated numeric tokens and decodes \
                  them back, keeping the encoded message in a file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug-level entries in the operation log
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory for the operation log
    #[arg(
        long,
        global = true,
        value_name = "LOG_DIR",
        env = "ROMEO_LOG_DIR",
        default_value = DEFAULT_LOG_DIR
    )]
    pub log_dir: PathBuf,

    /// Do not write the operation log
    #[arg(long, global = true)]
    pub no_log: bool,

    /// Emit machine-readable JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Encodes a message and saves it to the message file
    #[command(visible_alias = "encrypt")]
    Encode(EncodeArgs),

    /// Decodes the message stored in the message file
    #[command(visible_alias = "decrypt")]
    Decode(DecodeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    /// Message to encode (prompted for when omitted)
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// File the encoded message is written to
    #[arg(
        short,
        long = "file",
        value_name = "PATH",
        env = "ROMEO_MESSAGE_FILE",
        default_value = DEFAULT_MESSAGE_FILE
    )]
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct DecodeArgs {
    /// File the encoded message is read from
    #[arg(
        short,
        long = "file",
        value_name = "PATH",
        env = "ROMEO_MESSAGE_FILE",
        default_value = DEFAULT_MESSAGE_FILE
    )]
    pub file: PathBuf,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
