//! Core module - The read, count, colorize and render stages
//!
//! This module provides:
//! - Shared model (frequency mapping, categories, errors)
//! - File reading
//! - Word counting
//! - Frequency-based coloring
//! - Line rendering

pub mod colorizer;
pub mod counter;
pub mod file_reader;
pub mod model;
pub mod render;
