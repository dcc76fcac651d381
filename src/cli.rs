//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::core::file_reader::DEFAULT_INPUT;
use crate::flows::highlight::{process_path, HighlightOptions};
use crate::flows::stats::{summarize, write_summary, StatsFormat, DEFAULT_TOP_N};

/// wordtint - print the opening lines of a text file with words colored by frequency.
#[derive(Parser, Debug)]
#[command(name = "wordtint")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordtint reads a text file, counts how often each word occurs, and prints
the first 15 lines with every word colored by its frequency.

Colors:
- blue: rare (seen once)
- green: common (seen 2 to 5 times)
- red: frequent (seen more than 5 times)

Punctuation is replaced by a single space; whitespace is kept as-is.

Examples:
    wordtint
    wordtint --file speech.txt
    wordtint --no-color --stats json
"#
)]
pub struct Cli {
    /// Input file to read.
    #[arg(
        short,
        long,
        default_value = DEFAULT_INPUT,
        value_name = "PATH",
        long_help = "Input text file (defaults to declaration.txt in the current directory).\n\n\
The whole file is read into memory and decoded as UTF-8; invalid sequences are replaced."
    )]
    pub file: PathBuf,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors. NO_COLOR is honored as well."
    )]
    pub no_color: bool,

    /// Print a frequency summary on stderr (text/json).
    #[arg(
        long,
        value_name = "FORMAT",
        num_args = 0..=1,
        default_missing_value = "text",
        value_parser = ["text", "json"],
        long_help = "Print a frequency summary (totals per category and the most frequent\n\
words) on stderr after the highlighted lines.\n\n\
Supported values:\n\
- text (default)\n\
- json"
    )]
    pub stats: Option<String>,

    /// Number of words listed in the summary.
    #[arg(long, default_value_t = DEFAULT_TOP_N, value_name = "N")]
    pub top: usize,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug logging on stderr. RUST_LOG overrides the log filter when set."
    )]
    pub verbose: bool,
}

/// Install the stderr log subscriber
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Whether the error is a write to a closed pipe (e.g. `wordtint | head -3`)
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let options = HighlightOptions {
        colorize: !cli.no_color,
    };
    debug!(file = %cli.file.display(), "highlighting");

    let word_counts = match process_path(&cli.file, options) {
        Ok(counts) => counts,
        Err(e) if is_broken_pipe(&e) => return Ok(()),
        Err(e) => return Err(e),
    };

    if let Some(stats) = cli.stats.as_deref() {
        let format: StatsFormat = stats.parse().unwrap_or_default();
        let summary = summarize(&word_counts, cli.top);
        write_summary(io::stderr().lock(), &summary, format)?;
    }

    Ok(())
}
