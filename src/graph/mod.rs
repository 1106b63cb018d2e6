//! Trace graph model and path enumeration.
//!
//! This module handles:
//! - The immutable trace graph (vertex table + adjacency)
//! - Root resolution (maximum vertex id)
//! - Exhaustive root-to-source path enumeration

pub mod model;
pub mod paths;

// Re-export main types
pub use model::{TraceGraph, Vertex};
pub use paths::{enumerate_paths, EnumerationLimits};
