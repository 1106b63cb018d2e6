//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a trace file
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read trace input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed {kind} record at line {line_no}: `{line}`")]
    MalformedRecord {
        kind: &'static str,
        line_no: usize,
        line: String,
    },

    #[error("invalid integer field `{field}` at line {line_no}: `{line}`")]
    InvalidInteger {
        field: &'static str,
        line_no: usize,
        line: String,
    },

    #[error("edge endpoint {vertex_id} is not declared as a vertex")]
    DanglingEdge { vertex_id: u64 },
}

/// Errors that can occur during graph analysis
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("trace graph has no vertices")]
    EmptyGraph,

    #[error("vertex {0} referenced but not present in the vertex table")]
    MissingVertex(u64),

    #[error("cycle detected at vertex {0} during path enumeration")]
    CycleDetected(u64),

    #[error("path enumeration exceeded the budget of {0} paths")]
    PathBudgetExceeded(usize),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("invalid output path: {0}")]
    InvalidPath(String),
}
