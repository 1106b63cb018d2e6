//! Optrace
//!
//! Critical path analysis for query operator execution traces.
//!
//! Given a trace describing a DAG of operators, each with a measured
//! walltime, optrace enumerates every root-to-source path, ranks them
//! by total walltime, and reports the critical path alongside operator
//! walltime breakdowns (whole graph and critical-path-restricted).
//!
//! This crate provides the core implementation for the `optrace` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! optrace analyze --file trace.txt --summary
//! ```

pub mod aggregator;
pub mod commands;
pub mod graph;
pub mod output;
pub mod parser;
pub mod utils;
