//! Frequency summary
//!
//! Totals per category and the most frequent words, printed on stderr so
//! stdout only carries the highlighted lines.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::core::model::{Category, WordCounts};

/// Default number of words listed in the summary
pub const DEFAULT_TOP_N: usize = 10;

/// Output format for the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for StatsFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(StatsFormat::Text),
            "json" => Ok(StatsFormat::Json),
            _ => Err(format!("Unknown stats format: {}", s)),
        }
    }
}

/// A word with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
    pub category: Category,
}

/// Summary of a frequency mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencySummary {
    /// Total word occurrences
    pub total_words: usize,
    /// Number of distinct normalized words
    pub distinct_words: usize,
    /// Distinct words per category
    pub rare: usize,
    pub common: usize,
    pub frequent: usize,
    /// Most frequent words, highest count first
    pub top: Vec<WordFrequency>,
}

/// Summarize `word_counts`, keeping the `top_n` most frequent words
pub fn summarize(word_counts: &WordCounts, top_n: usize) -> FrequencySummary {
    let mut summary = FrequencySummary {
        distinct_words: word_counts.len(),
        ..Default::default()
    };

    for &count in word_counts.values() {
        summary.total_words += count;
        match Category::for_count(count) {
            Category::Rare => summary.rare += 1,
            Category::Common => summary.common += 1,
            Category::Frequent => summary.frequent += 1,
        }
    }

    let mut ranked: Vec<(&String, &usize)> = word_counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    summary.top = ranked
        .into_iter()
        .take(top_n)
        .map(|(word, &count)| WordFrequency {
            word: word.clone(),
            count,
            category: Category::for_count(count),
        })
        .collect();

    summary
}

/// Render the summary as human-readable text
pub fn render_text(summary: &FrequencySummary) -> String {
    let mut output = String::new();
    output.push_str("Word Statistics:\n");
    output.push_str(&format!("   Words: {}\n", summary.total_words));
    output.push_str(&format!("   Distinct: {}\n", summary.distinct_words));
    output.push_str(&format!(
        "   Rare: {}  Common: {}  Frequent: {}\n",
        summary.rare, summary.common, summary.frequent
    ));

    if !summary.top.is_empty() {
        output.push_str("   Top words:\n");
        for item in &summary.top {
            output.push_str(&format!(
                "     {:>5}  {} ({})\n",
                item.count, item.word, item.category
            ));
        }
    }

    output
}

/// Write the summary in the requested format
pub fn write_summary<W: Write>(
    mut writer: W,
    summary: &FrequencySummary,
    format: StatsFormat,
) -> Result<()> {
    match format {
        StatsFormat::Text => writer.write_all(render_text(summary).as_bytes())?,
        StatsFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, summary)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
