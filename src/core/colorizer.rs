//! Frequency-based word coloring

use colored::{ColoredString, Colorize};

use crate::core::model::Category;

/// Style `word` with the color of its frequency category
pub fn color_word(word: &str, count: usize) -> ColoredString {
    word.color(Category::for_count(count).color())
}
