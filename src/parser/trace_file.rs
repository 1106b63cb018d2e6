//! Line-oriented trace file loader.
//!
//! Parses the comma-separated trace format into a `TraceGraph`:
//!
//! ```text
//! V,<vertex_id>,<operator_type>,<walltime_ns>
//! E,<src_vertex_id>,<dest_vertex_id>
//! ```
//!
//! Blank lines are skipped. Lines with an unrecognized leading tag are
//! skipped as well, matching the permissive behavior of older trace
//! consumers. Both adjacency directions are built in one pass so no
//! downstream component has to re-read the file.

use crate::graph::model::{TraceGraph, Vertex};
use crate::utils::config::{EDGE_TAG, VERTEX_TAG};
use crate::utils::error::ParseError;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a trace graph from a file on disk
///
/// **Public** - convenience wrapper over [`load_trace`]
pub fn load_trace_file(path: impl AsRef<Path>) -> Result<TraceGraph, ParseError> {
    let path = path.as_ref();
    debug!("Loading trace from: {}", path.display());
    let file = File::open(path)?;
    load_trace(BufReader::new(file))
}

/// Load a trace graph from any buffered reader
///
/// **Public** - main entry point for trace loading
///
/// # Returns
/// The fully built graph: vertex table plus forward and reverse adjacency.
///
/// # Errors
/// * `ParseError::Io` - the source could not be read
/// * `ParseError::MalformedRecord` - a V/E record with missing fields
/// * `ParseError::InvalidInteger` - a non-numeric id or walltime field
/// * `ParseError::DanglingEdge` - an edge endpoint never declared as a vertex
pub fn load_trace(reader: impl BufRead) -> Result<TraceGraph, ParseError> {
    let mut graph = TraceGraph::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').collect();

        match fields[0] {
            tag if tag == VERTEX_TAG => parse_vertex_record(&mut graph, &fields, line_no, trimmed)?,
            tag if tag == EDGE_TAG => parse_edge_record(&mut graph, &fields, line_no, trimmed)?,
            other => {
                // Unknown record types are permissively skipped.
                debug!("Skipping unrecognized record tag `{}` at line {}", other, line_no);
            }
        }
    }

    // Reject dangling edge endpoints up front rather than letting the
    // ranker hit a missing-vertex lookup mid-analysis.
    graph
        .validate_endpoints()
        .map_err(|e| match e {
            crate::utils::error::GraphError::MissingVertex(id) => {
                ParseError::DanglingEdge { vertex_id: id }
            }
            // validate_endpoints only reports missing vertices
            _ => ParseError::DanglingEdge { vertex_id: 0 },
        })?;

    debug!(
        "Loaded trace graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Parse a `V,<id>,<operator_type>,<walltime_ns>` record
///
/// **Private** - internal helper for load_trace
fn parse_vertex_record(
    graph: &mut TraceGraph,
    fields: &[&str],
    line_no: usize,
    line: &str,
) -> Result<(), ParseError> {
    if fields.len() < 4 {
        return Err(ParseError::MalformedRecord {
            kind: "vertex",
            line_no,
            line: line.to_string(),
        });
    }

    let id = parse_u64(fields[1], "vertex_id", line_no, line)?;
    let operator_type = fields[2].to_string();
    let walltime_ns = parse_u64(fields[3], "walltime_ns", line_no, line)?;

    let previous = graph.insert_vertex(Vertex {
        id,
        operator_type,
        walltime_ns,
    });

    if previous.is_some() {
        // Preserved trace-format quirk: last declaration wins.
        warn!("Duplicate vertex id {} at line {}, overwriting earlier record", id, line_no);
    }

    Ok(())
}

/// Parse an `E,<src>,<dest>` record
///
/// **Private** - internal helper for load_trace
fn parse_edge_record(
    graph: &mut TraceGraph,
    fields: &[&str],
    line_no: usize,
    line: &str,
) -> Result<(), ParseError> {
    if fields.len() < 3 {
        return Err(ParseError::MalformedRecord {
            kind: "edge",
            line_no,
            line: line.to_string(),
        });
    }

    let src = parse_u64(fields[1], "src_vertex_id", line_no, line)?;
    let dest = parse_u64(fields[2], "dest_vertex_id", line_no, line)?;

    graph.insert_edge(src, dest);

    Ok(())
}

/// Parse a single non-negative integer field
///
/// **Private** - internal utility
fn parse_u64(
    value: &str,
    field: &'static str,
    line_no: usize,
    line: &str,
) -> Result<u64, ParseError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidInteger {
            field,
            line_no,
            line: line.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(input: &str) -> Result<TraceGraph, ParseError> {
        load_trace(Cursor::new(input))
    }

    #[test]
    fn test_load_vertices_and_edges() {
        let graph = load("V,1,Scan,100\nV,2,Join,30\nE,1,2\n").unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.vertex(1).unwrap().operator_type, "Scan");
        assert_eq!(graph.parents(2), &[1]);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let graph = load("\nV,1,Scan,100\n\n\nV,2,Join,30\n\n").unwrap();
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_unknown_tags_skipped() {
        let graph = load("V,1,Scan,100\nX,this,is,not,a,record\n# comment-ish\n").unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_duplicate_vertex_overwrites() {
        let graph = load("V,1,Scan,100\nV,1,Filter,7\n").unwrap();

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.walltime(1).unwrap(), 7);
        assert_eq!(graph.vertex(1).unwrap().operator_type, "Filter");
    }

    #[test]
    fn test_malformed_vertex_record() {
        let err = load("V,1,Scan\n").unwrap_err();
        match err {
            ParseError::MalformedRecord { kind, line_no, .. } => {
                assert_eq!(kind, "vertex");
                assert_eq!(line_no, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_walltime() {
        let err = load("V,1,Scan,fast\n").unwrap_err();
        match err {
            ParseError::InvalidInteger { field, line_no, .. } => {
                assert_eq!(field, "walltime_ns");
                assert_eq!(line_no, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_edge_id_reports_line() {
        let err = load("V,1,Scan,10\nE,one,1\n").unwrap_err();
        match err {
            ParseError::InvalidInteger { field, line_no, .. } => {
                assert_eq!(field, "src_vertex_id");
                assert_eq!(line_no, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dangling_edge_rejected_at_load() {
        let err = load("V,1,Scan,10\nE,1,5\n").unwrap_err();
        assert!(matches!(err, ParseError::DanglingEdge { vertex_id: 5 }));
    }

    #[test]
    fn test_edge_may_precede_vertex_declarations() {
        let graph = load("E,1,2\nV,1,Scan,10\nV,2,Join,20\n").unwrap();
        assert_eq!(graph.parents(2), &[1]);
    }

    #[test]
    fn test_vertex_without_edges_still_in_adjacency() {
        let graph = load("V,1,Scan,10\n").unwrap();
        assert!(graph.is_source(1));
        assert_eq!(graph.root_id().unwrap(), 1);
    }
}
