//! Output JSON schema definitions for analysis reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file that was analyzed
    pub trace_file: String,

    /// Number of vertices in the loaded graph
    pub vertex_count: usize,

    /// Number of edges in the loaded graph
    pub edge_count: usize,

    /// Traversal root (maximum vertex id)
    pub root_id: u64,

    /// Ranked paths, walltime descending (top-N only)
    pub ranked_paths: Vec<RankedPath>,

    /// The critical path with per-step detail
    pub critical_path: CriticalPath,

    /// Walltime per operator type over the whole graph
    pub operator_breakdown: Vec<BreakdownEntry>,

    /// Walltime per operator type restricted to the critical path
    pub critical_path_breakdown: Vec<BreakdownEntry>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// A single ranked root-to-source path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPath {
    /// Sum of member vertices' walltimes, in nanoseconds
    pub total_walltime_ns: u64,

    /// Vertex ids, root-first, source-last
    pub vertices: Vec<u64>,
}

/// The critical path (rank 0) with per-step cumulative walltimes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalPath {
    /// Total walltime of the path, in nanoseconds
    pub total_walltime_ns: u64,

    /// Steps in path order (root-first)
    pub steps: Vec<CriticalPathStep>,
}

/// One operator along the critical path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalPathStep {
    pub vertex_id: u64,
    pub operator_type: String,
    pub walltime_ns: u64,

    /// Running total including this step
    pub cumulative_walltime_ns: u64,
}

/// One row of an operator-type breakdown table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub operator_type: String,

    /// Summed walltime for this operator type, in nanoseconds
    pub walltime_ns: u64,

    /// Share of the table's total walltime (0 when the total is 0)
    pub percentage: f64,
}
