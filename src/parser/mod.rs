//! Trace loading and report schema definitions.
//!
//! This module handles:
//! - Parsing the line-oriented V/E trace format
//! - Building the trace graph in a single pass
//! - Defining the versioned report schema

pub mod schema;
pub mod trace_file;

// Re-export main types
pub use schema::{BreakdownEntry, CriticalPath, CriticalPathStep, RankedPath, Report};
pub use trace_file::{load_trace, load_trace_file};
