//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fibtext_cli::OutputFormat;

/// fibtext — Fibonacci calculator and Unicode string toolkit.
#[derive(Parser, Debug)]
#[command(name = "fibtext", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Text backend: auto, unicode or ascii.
    #[arg(long, global = true, default_value = "auto", env = "FIBTEXT_BACKEND")]
    pub backend: String,

    /// Output format.
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "FIBTEXT_FORMAT"
    )]
    pub format: OutputFormat,

    /// Verbose output and debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the result).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write the result to a file instead of stdout.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Operations. Text arguments are read from stdin when omitted.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the Nth Fibonacci number.
    Fib {
        /// Sequence index; non-positive indices yield 0.
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Overflow policy: wrap32, wrap64, checked or big.
        #[arg(long, default_value = "wrap32", env = "FIBTEXT_POLICY")]
        policy: String,
    },

    /// List F(start) through F(end).
    Seq { start: u64, end: u64 },

    /// Lowercase text with the process locale.
    Lower { text: Option<String> },

    /// Uppercase text with the process locale.
    Upper { text: Option<String> },

    /// Extract every email address, in order of appearance.
    Emails { text: Option<String> },

    /// Check whether the whole argument is an email address.
    ValidateEmail { email: String },

    /// Transliterate text, e.g. --id "Cyrillic-Latin; Latin-ASCII".
    Translit {
        /// Transliterator id; compound ids are separated by ';'.
        #[arg(long, required_unless_present = "list")]
        id: Option<String>,

        /// List the available transliterator ids.
        #[arg(long)]
        list: bool,

        text: Option<String>,
    },

    /// Count words.
    Words { text: Option<String> },

    /// Name the dominant Unicode script.
    Script { text: Option<String> },

    /// Re-encode bytes between charsets.
    Convert {
        /// Source charset label.
        #[arg(long)]
        from: String,

        /// Target charset label.
        #[arg(long)]
        to: String,

        /// Input file; stdin when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
