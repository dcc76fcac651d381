//! Word frequency counting

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::WordCounts;

/// A maximal run of ASCII word characters
pub static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("Invalid WORD_RE regex"));

/// Count every word in `content`, keyed by its lower-cased form.
///
/// Content without any word characters yields an empty mapping.
pub fn get_word_counts(content: &str) -> WordCounts {
    WORD_RE
        .find_iter(content)
        .fold(WordCounts::new(), |mut counts, m| {
            *counts.entry(m.as_str().to_ascii_lowercase()).or_insert(0) += 1;
            counts
        })
}
