//! Highlight flow - read, count, render

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

use crate::core::counter::get_word_counts;
use crate::core::file_reader::{read_file_content, read_file_content_from};
use crate::core::model::WordCounts;
use crate::core::render::{print_colored_lines, write_colored_lines};

/// Options for a highlight run
#[derive(Debug, Clone, Copy)]
pub struct HighlightOptions {
    /// Apply terminal colors to words
    pub colorize: bool,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self { colorize: true }
    }
}

/// Read `declaration.txt`, count its words and print the opening lines
pub fn process_file() -> Result<()> {
    let content = read_file_content()?;
    let word_counts = get_word_counts(&content);
    print_colored_lines(&content, &word_counts).context("Failed to write output")?;
    Ok(())
}

/// Highlight `path` onto `writer`, returning the frequency mapping
pub fn highlight_to<W: Write>(
    path: &Path,
    options: HighlightOptions,
    writer: W,
) -> Result<WordCounts> {
    let content = read_file_content_from(path)?;
    let word_counts = get_word_counts(&content);
    debug!(
        distinct = word_counts.len(),
        colorize = options.colorize,
        "counted words"
    );

    let written = write_colored_lines(writer, &content, &word_counts, options.colorize)
        .context("Failed to write output")?;
    debug!(lines = written, "rendered lines");

    Ok(word_counts)
}

/// Highlight `path` onto stdout
pub fn process_path(path: &Path, options: HighlightOptions) -> Result<WordCounts> {
    if !options.colorize {
        let stdout = io::stdout();
        return highlight_to(path, options, stdout.lock());
    }

    let content = read_file_content_from(path)?;
    let word_counts = get_word_counts(&content);
    debug!(distinct = word_counts.len(), "counted words");
    print_colored_lines(&content, &word_counts).context("Failed to write output")?;
    Ok(word_counts)
}
