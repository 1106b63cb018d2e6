//! Exhaustive root-to-source path enumeration.
//!
//! Walk backward from the root along reverse adjacency and collect every
//! complete path down to a source vertex (a vertex with no incoming edges).
//! Downstream reporting ranks all paths, so this must stay exhaustive; a
//! longest-path DP would only yield the critical path.
//!
//! Path counts can be exponential in the number of fan-in points, so the
//! traversal uses an explicit frame stack instead of recursion. Frame order
//! reproduces classic backtracking: parents are explored in edge declaration
//! order, and the shared path buffer is restored on unwind.

use super::model::TraceGraph;
use crate::utils::error::GraphError;
use log::debug;
use std::collections::HashSet;

/// Caller-imposed bounds on enumeration
///
/// **Public** - constructed by the analyze command from CLI flags
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumerationLimits {
    /// Abort once more than this many paths have been collected.
    /// `None` means unbounded (the original contract).
    pub max_paths: Option<usize>,
}

/// One DFS frame: the vertex and the index of its next unexplored parent
struct Frame {
    id: u64,
    next_parent: usize,
}

/// Enumerate every path from `root` down to each source vertex
///
/// **Public** - main entry point for path enumeration
///
/// # Arguments
/// * `graph` - the loaded trace graph
/// * `root` - traversal start, normally `graph.root_id()`
/// * `limits` - caller-imposed enumeration bounds
///
/// # Returns
/// All complete paths in DFS discovery order. Each path is root-first,
/// source-last: consecutive elements `(a, b)` correspond to an edge
/// `b -> a` in the original graph.
///
/// # Errors
/// * `GraphError::MissingVertex` - `root` is not in the vertex table
/// * `GraphError::CycleDetected` - a vertex reappeared on the current path
/// * `GraphError::PathBudgetExceeded` - `limits.max_paths` was exceeded
pub fn enumerate_paths(
    graph: &TraceGraph,
    root: u64,
    limits: EnumerationLimits,
) -> Result<Vec<Vec<u64>>, GraphError> {
    graph.vertex(root)?;

    let mut paths: Vec<Vec<u64>> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut path: Vec<u64> = Vec::new();
    let mut on_path: HashSet<u64> = HashSet::new();

    stack.push(Frame {
        id: root,
        next_parent: 0,
    });
    path.push(root);
    on_path.insert(root);

    if graph.is_source(root) {
        // Single-vertex graph: the root is its own source.
        paths.push(path.clone());
    }

    while let Some(frame) = stack.last_mut() {
        let parents = graph.parents(frame.id);

        if frame.next_parent < parents.len() {
            let parent = parents[frame.next_parent];
            frame.next_parent += 1;

            // The input contract says acyclic; guard anyway so a bad
            // trace fails loudly instead of looping forever.
            if on_path.contains(&parent) {
                return Err(GraphError::CycleDetected(parent));
            }

            stack.push(Frame {
                id: parent,
                next_parent: 0,
            });
            path.push(parent);
            on_path.insert(parent);

            if graph.is_source(parent) {
                if let Some(max) = limits.max_paths {
                    if paths.len() >= max {
                        return Err(GraphError::PathBudgetExceeded(max));
                    }
                }
                paths.push(path.clone());
            }
        } else {
            // All parents explored: unwind this frame.
            stack.pop();
            if let Some(done) = path.pop() {
                on_path.remove(&done);
            }
        }
    }

    debug!("Enumerated {} complete paths from root {}", paths.len(), root);

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::Vertex;

    fn graph_with(vertices: &[(u64, u64)], edges: &[(u64, u64)]) -> TraceGraph {
        let mut graph = TraceGraph::new();
        for (id, walltime) in vertices {
            graph.insert_vertex(Vertex {
                id: *id,
                operator_type: "Op".to_string(),
                walltime_ns: *walltime,
            });
        }
        for (src, dest) in edges {
            graph.insert_edge(*src, *dest);
        }
        graph
    }

    #[test]
    fn test_fan_in_enumerates_all_paths() {
        // Three sources feeding a single sink (root = 4).
        let graph = graph_with(
            &[(1, 100), (2, 50), (3, 80), (4, 30)],
            &[(1, 4), (2, 4), (3, 4)],
        );

        let paths = enumerate_paths(&graph, 4, EnumerationLimits::default()).unwrap();

        assert_eq!(paths, vec![vec![4, 1], vec![4, 2], vec![4, 3]]);
    }

    #[test]
    fn test_every_path_ends_at_a_source() {
        // Diamond: 1 -> {2, 3} -> 4
        let graph = graph_with(
            &[(1, 10), (2, 20), (3, 30), (4, 40)],
            &[(1, 2), (1, 3), (2, 4), (3, 4)],
        );

        let paths = enumerate_paths(&graph, 4, EnumerationLimits::default()).unwrap();

        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert_eq!(path[0], 4);
            assert!(graph.is_source(*path.last().unwrap()));
        }
    }

    #[test]
    fn test_single_vertex_graph() {
        let graph = graph_with(&[(1, 42)], &[]);

        let paths = enumerate_paths(&graph, 1, EnumerationLimits::default()).unwrap();

        assert_eq!(paths, vec![vec![1]]);
    }

    #[test]
    fn test_unknown_root_is_rejected() {
        let graph = graph_with(&[(1, 10)], &[]);

        assert!(matches!(
            enumerate_paths(&graph, 9, EnumerationLimits::default()),
            Err(GraphError::MissingVertex(9))
        ));
    }

    #[test]
    fn test_cycle_is_detected() {
        let graph = graph_with(&[(1, 10), (2, 20)], &[(1, 2), (2, 1)]);

        assert!(matches!(
            enumerate_paths(&graph, 2, EnumerationLimits::default()),
            Err(GraphError::CycleDetected(_))
        ));
    }

    #[test]
    fn test_path_budget_enforced() {
        let graph = graph_with(
            &[(1, 100), (2, 50), (3, 80), (4, 30)],
            &[(1, 4), (2, 4), (3, 4)],
        );

        let limits = EnumerationLimits { max_paths: Some(2) };

        assert!(matches!(
            enumerate_paths(&graph, 4, limits),
            Err(GraphError::PathBudgetExceeded(2))
        ));
    }

    #[test]
    fn test_budget_at_exact_count_passes() {
        let graph = graph_with(&[(1, 100), (2, 50), (3, 30)], &[(1, 3), (2, 3)]);

        let limits = EnumerationLimits { max_paths: Some(2) };
        let paths = enumerate_paths(&graph, 3, limits).unwrap();

        assert_eq!(paths.len(), 2);
    }
}
