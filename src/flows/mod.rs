//! Flows module - End-to-end operations built from the core stages
//!
//! Provides:
//! - highlight: Read a file, count its words and print the colored lines
//! - stats: Frequency summary (totals per category, top words)

pub mod highlight;
pub mod stats;
