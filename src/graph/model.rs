//! Trace graph data model.
//!
//! A trace graph is a DAG of operators. Each vertex carries the operator
//! type and the walltime measured for it; each edge `src -> dest` means
//! the source operator feeds the destination. The graph is built once by
//! the loader and never mutated afterwards.

use crate::utils::error::GraphError;
use std::collections::{BTreeMap, HashMap};

/// A single operator instance in the trace
///
/// **Public** - produced by the loader, consumed everywhere downstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    /// Unique operator identifier from the trace
    pub id: u64,

    /// Operator type label (e.g., "TableScan", "JoinHash")
    pub operator_type: String,

    /// Measured walltime in nanoseconds
    pub walltime_ns: u64,
}

/// The full trace graph: vertex table plus adjacency in both directions
///
/// **Public** - immutable output of the loader
///
/// The vertex table is ordered by id so iteration order (and therefore the
/// global breakdown's tie-break order) is deterministic. Adjacency lists
/// preserve edge declaration order, which fixes the DFS enumeration order.
#[derive(Debug, Clone, Default)]
pub struct TraceGraph {
    vertices: BTreeMap<u64, Vertex>,
    forward: HashMap<u64, Vec<u64>>,
    reverse: HashMap<u64, Vec<u64>>,
    edge_count: usize,
}

impl TraceGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex, returning the previous entry if the id was
    /// already declared (last write wins)
    pub fn insert_vertex(&mut self, vertex: Vertex) -> Option<Vertex> {
        // Materialize an (empty) forward entry so vertices with no
        // outgoing edges still appear in the adjacency table.
        self.forward.entry(vertex.id).or_default();
        self.vertices.insert(vertex.id, vertex)
    }

    /// Insert a directed edge `src -> dest`
    pub fn insert_edge(&mut self, src: u64, dest: u64) {
        self.forward.entry(src).or_default().push(dest);
        self.reverse.entry(dest).or_default().push(src);
        self.edge_count += 1;
    }

    /// Look up a vertex by id
    pub fn vertex(&self, id: u64) -> Result<&Vertex, GraphError> {
        self.vertices.get(&id).ok_or(GraphError::MissingVertex(id))
    }

    /// Walltime of a vertex in nanoseconds
    pub fn walltime(&self, id: u64) -> Result<u64, GraphError> {
        self.vertex(id).map(|v| v.walltime_ns)
    }

    /// Iterate vertices in ascending id order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Parents of a vertex: all `p` such that an edge `p -> id` exists,
    /// in edge declaration order. Empty for source vertices.
    pub fn parents(&self, id: u64) -> &[u64] {
        self.reverse.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the vertex has no incoming edges
    pub fn is_source(&self, id: u64) -> bool {
        self.parents(id).is_empty()
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Resolve the traversal root: the vertex with the maximum id
    ///
    /// This is a convention of the trace format, not a topological
    /// property; the root may itself have outgoing edges.
    ///
    /// # Errors
    /// * `GraphError::EmptyGraph` - no vertices loaded
    pub fn root_id(&self) -> Result<u64, GraphError> {
        self.vertices
            .last_key_value()
            .map(|(id, _)| *id)
            .ok_or(GraphError::EmptyGraph)
    }

    /// Validate that every edge endpoint references a declared vertex
    ///
    /// **Public** - called by the loader after all records are read,
    /// so dangling references fail at load time rather than surfacing
    /// later as a ranking failure.
    pub fn validate_endpoints(&self) -> Result<(), GraphError> {
        for (src, dests) in &self.forward {
            if !self.vertices.contains_key(src) {
                return Err(GraphError::MissingVertex(*src));
            }
            for dest in dests {
                if !self.vertices.contains_key(dest) {
                    return Err(GraphError::MissingVertex(*dest));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(id: u64, op: &str, walltime: u64) -> Vertex {
        Vertex {
            id,
            operator_type: op.to_string(),
            walltime_ns: walltime,
        }
    }

    #[test]
    fn test_root_is_max_id() {
        let mut graph = TraceGraph::new();
        graph.insert_vertex(vertex(3, "Scan", 10));
        graph.insert_vertex(vertex(7, "Join", 20));
        graph.insert_vertex(vertex(5, "Filter", 30));

        assert_eq!(graph.root_id().unwrap(), 7);
    }

    #[test]
    fn test_root_requires_vertices() {
        let graph = TraceGraph::new();
        assert!(matches!(graph.root_id(), Err(GraphError::EmptyGraph)));
    }

    #[test]
    fn test_duplicate_vertex_last_write_wins() {
        let mut graph = TraceGraph::new();
        graph.insert_vertex(vertex(1, "Scan", 10));
        let previous = graph.insert_vertex(vertex(1, "Filter", 99));

        assert_eq!(previous.unwrap().walltime_ns, 10);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.walltime(1).unwrap(), 99);
        assert_eq!(graph.vertex(1).unwrap().operator_type, "Filter");
    }

    #[test]
    fn test_parents_preserve_declaration_order() {
        let mut graph = TraceGraph::new();
        for id in 1..=4 {
            graph.insert_vertex(vertex(id, "Scan", id * 10));
        }
        graph.insert_edge(3, 4);
        graph.insert_edge(1, 4);
        graph.insert_edge(2, 4);

        assert_eq!(graph.parents(4), &[3, 1, 2]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_source_detection() {
        let mut graph = TraceGraph::new();
        graph.insert_vertex(vertex(1, "Scan", 10));
        graph.insert_vertex(vertex(2, "Join", 20));
        graph.insert_edge(1, 2);

        assert!(graph.is_source(1));
        assert!(!graph.is_source(2));
    }

    #[test]
    fn test_missing_vertex_lookup() {
        let graph = TraceGraph::new();
        assert!(matches!(
            graph.walltime(42),
            Err(GraphError::MissingVertex(42))
        ));
    }

    #[test]
    fn test_validate_endpoints_rejects_dangling_edge() {
        let mut graph = TraceGraph::new();
        graph.insert_vertex(vertex(1, "Scan", 10));
        graph.insert_edge(1, 2); // 2 never declared

        assert!(matches!(
            graph.validate_endpoints(),
            Err(GraphError::MissingVertex(2))
        ));
    }
}
