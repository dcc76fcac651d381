//! Shared data model
//!
//! The frequency mapping passed between pipeline stages, the display
//! categories, and the one recognized failure of the tool.

use colored::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Mapping from a lower-cased word to its number of occurrences
pub type WordCounts = HashMap<String, usize>;

/// Display category of a word, chosen from its occurrence count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Seen exactly once
    Rare,
    /// Seen two to five times
    Common,
    /// Seen more than five times, or not recorded at all
    Frequent,
}

impl Category {
    /// Pick the category for an occurrence count.
    ///
    /// A count of 0 (word missing from the mapping) lands in `Frequent`.
    pub fn for_count(count: usize) -> Self {
        match count {
            1 => Category::Rare,
            2..=5 => Category::Common,
            _ => Category::Frequent,
        }
    }

    /// Terminal color used for this category
    pub fn color(&self) -> Color {
        match self {
            Category::Rare => Color::Blue,
            Category::Common => Color::Green,
            Category::Frequent => Color::Red,
        }
    }

    /// Lower-case name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Rare => "rare",
            Category::Common => "common",
            Category::Frequent => "frequent",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The input file could not be read
#[derive(Error, Debug)]
#[error("cannot read '{}': {source}", .path.display())]
pub struct FileAccessError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl FileAccessError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}
