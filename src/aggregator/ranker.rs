//! Rank enumerated paths by total walltime.
//!
//! The ranked sequence is walltime-descending; rank 0 is the critical
//! path, the chain of operators dominating end-to-end latency.

use crate::graph::model::TraceGraph;
use crate::parser::schema::{CriticalPath, CriticalPathStep, RankedPath};
use crate::utils::error::GraphError;
use log::debug;

/// Total walltime of a single path
///
/// **Public** - shared summation rule: every occurrence in the path
/// sequence is counted, root and source inclusive.
///
/// # Errors
/// * `GraphError::MissingVertex` - a path member is not in the vertex table
pub fn path_walltime(graph: &TraceGraph, path: &[u64]) -> Result<u64, GraphError> {
    let mut total = 0u64;
    for id in path {
        total += graph.walltime(*id)?;
    }
    Ok(total)
}

/// Rank paths by total walltime, descending
///
/// **Public** - main entry point for ranking
///
/// # Arguments
/// * `graph` - vertex table for walltime lookup
/// * `paths` - enumerated paths in discovery order
///
/// # Returns
/// Ranked paths, walltime descending. The sort is stable, so paths with
/// equal totals keep their discovery order and output stays reproducible.
pub fn rank_paths(graph: &TraceGraph, paths: Vec<Vec<u64>>) -> Result<Vec<RankedPath>, GraphError> {
    let mut ranked = Vec::with_capacity(paths.len());

    for path in paths {
        let total_walltime_ns = path_walltime(graph, &path)?;
        ranked.push(RankedPath {
            total_walltime_ns,
            vertices: path,
        });
    }

    ranked.sort_by(|a, b| b.total_walltime_ns.cmp(&a.total_walltime_ns));

    if let Some(critical) = ranked.first() {
        debug!(
            "Ranked {} paths, critical total {} ns",
            ranked.len(),
            critical.total_walltime_ns
        );
    }

    Ok(ranked)
}

/// Expand the critical path into per-step detail with cumulative walltimes
///
/// **Public** - used for the report's critical-path section
pub fn critical_path_detail(
    graph: &TraceGraph,
    critical: &RankedPath,
) -> Result<CriticalPath, GraphError> {
    let mut steps = Vec::with_capacity(critical.vertices.len());
    let mut cumulative = 0u64;

    for id in &critical.vertices {
        let vertex = graph.vertex(*id)?;
        cumulative += vertex.walltime_ns;
        steps.push(CriticalPathStep {
            vertex_id: vertex.id,
            operator_type: vertex.operator_type.clone(),
            walltime_ns: vertex.walltime_ns,
            cumulative_walltime_ns: cumulative,
        });
    }

    Ok(CriticalPath {
        total_walltime_ns: critical.total_walltime_ns,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::Vertex;

    fn graph_with(vertices: &[(u64, u64)]) -> TraceGraph {
        let mut graph = TraceGraph::new();
        for (id, walltime) in vertices {
            graph.insert_vertex(Vertex {
                id: *id,
                operator_type: "Op".to_string(),
                walltime_ns: *walltime,
            });
        }
        graph
    }

    #[test]
    fn test_rank_descending() {
        let graph = graph_with(&[(1, 100), (2, 50), (3, 80), (4, 30)]);
        let paths = vec![vec![4, 1], vec![4, 2], vec![4, 3]];

        let ranked = rank_paths(&graph, paths).unwrap();

        assert_eq!(ranked[0].total_walltime_ns, 130);
        assert_eq!(ranked[0].vertices, vec![4, 1]);
        assert_eq!(ranked[1].total_walltime_ns, 110);
        assert_eq!(ranked[2].total_walltime_ns, 80);
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let graph = graph_with(&[(1, 50), (2, 50), (3, 10)]);
        let paths = vec![vec![3, 1], vec![3, 2]];

        let ranked = rank_paths(&graph, paths).unwrap();

        // Equal totals: stable sort keeps [3,1] before [3,2].
        assert_eq!(ranked[0].vertices, vec![3, 1]);
        assert_eq!(ranked[1].vertices, vec![3, 2]);
    }

    #[test]
    fn test_missing_vertex_in_path() {
        let graph = graph_with(&[(1, 100)]);
        let paths = vec![vec![1, 9]];

        assert!(matches!(
            rank_paths(&graph, paths),
            Err(GraphError::MissingVertex(9))
        ));
    }

    #[test]
    fn test_critical_path_detail_cumulative() {
        let mut graph = TraceGraph::new();
        graph.insert_vertex(Vertex {
            id: 4,
            operator_type: "Join".to_string(),
            walltime_ns: 30,
        });
        graph.insert_vertex(Vertex {
            id: 1,
            operator_type: "Scan".to_string(),
            walltime_ns: 100,
        });

        let critical = RankedPath {
            total_walltime_ns: 130,
            vertices: vec![4, 1],
        };

        let detail = critical_path_detail(&graph, &critical).unwrap();

        assert_eq!(detail.total_walltime_ns, 130);
        assert_eq!(detail.steps.len(), 2);
        assert_eq!(detail.steps[0].operator_type, "Join");
        assert_eq!(detail.steps[0].cumulative_walltime_ns, 30);
        assert_eq!(detail.steps[1].operator_type, "Scan");
        assert_eq!(detail.steps[1].cumulative_walltime_ns, 130);
    }

    #[test]
    fn test_empty_path_set_ranks_to_empty() {
        let graph = graph_with(&[(1, 10)]);
        let ranked = rank_paths(&graph, Vec::new()).unwrap();
        assert!(ranked.is_empty());
    }
}
