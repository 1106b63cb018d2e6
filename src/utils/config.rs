//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default number of ranked paths included in the JSON report
pub const DEFAULT_TOP_PATHS: usize = 20;

// Record tags for the line-oriented trace format
pub const VERTEX_TAG: &str = "V";
pub const EDGE_TAG: &str = "E";
