//! wordtint - word frequency highlighting for text files
//!
//! The pipeline is read → count → render:
//! - [`read_file_content`] loads `declaration.txt` into memory
//! - [`get_word_counts`] builds the lower-cased word frequency mapping
//! - [`color_word`] picks a color from a word's count
//! - [`print_colored_lines`] prints the first 15 lines with colored words
//!
//! ```no_run
//! use wordtint::{get_word_counts, print_colored_lines, read_file_content};
//!
//! let content = read_file_content()?;
//! let counts = get_word_counts(&content);
//! print_colored_lines(&content, &counts)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod core;
pub mod flows;

pub use crate::core::colorizer::color_word;
pub use crate::core::counter::get_word_counts;
pub use crate::core::file_reader::{read_file_content, read_file_content_from, DEFAULT_INPUT};
pub use crate::core::model::{Category, FileAccessError, WordCounts};
pub use crate::core::render::{print_colored_lines, render_line, write_colored_lines, MAX_LINES};
pub use crate::flows::highlight::process_file;
