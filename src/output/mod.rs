//! Output writers for analysis reports.
//!
//! This module handles rendering results for consumers:
//! - JSON reports (versioned schema, written to disk)
//! - Plain-text summaries for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report};
pub use text::{format_breakdown, format_critical_path, format_ranked_paths, format_report};
