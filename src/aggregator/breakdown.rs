//! Operator-type walltime breakdowns.
//!
//! Groups vertices by operator type and sums their walltimes, once over
//! the whole graph and once restricted to the critical path. Both tables
//! are sorted by summed walltime descending and carry each row's share
//! of the table total.

use crate::graph::model::TraceGraph;
use crate::parser::schema::BreakdownEntry;
use crate::utils::error::GraphError;
use std::collections::HashMap;

/// Breakdown over every vertex in the graph
///
/// **Public** - the "global" table
///
/// Vertices are visited in ascending id order, so rows with equal sums
/// keep a deterministic first-seen order under the stable sort.
pub fn global_breakdown(graph: &TraceGraph) -> Vec<BreakdownEntry> {
    aggregate(
        graph
            .vertices()
            .map(|v| (v.operator_type.as_str(), v.walltime_ns)),
    )
}

/// Breakdown restricted to the critical path's vertex sequence
///
/// **Public** - the "critical" table
///
/// Walltime is counted once per occurrence in the path sequence, the
/// same rule the ranker uses for path totals, so this table's grand
/// total always equals the critical path's total walltime.
///
/// # Errors
/// * `GraphError::MissingVertex` - a path member is not in the vertex table
pub fn critical_path_breakdown(
    graph: &TraceGraph,
    path: &[u64],
) -> Result<Vec<BreakdownEntry>, GraphError> {
    let mut pairs = Vec::with_capacity(path.len());
    for id in path {
        let vertex = graph.vertex(*id)?;
        pairs.push((vertex.operator_type.as_str(), vertex.walltime_ns));
    }
    Ok(aggregate(pairs.into_iter()))
}

/// Shared aggregation rule: sum walltimes per operator type, keeping
/// first-seen order for ties, then sort descending and attach percentages
///
/// **Private** - internal helper for both breakdowns
fn aggregate<'a>(items: impl Iterator<Item = (&'a str, u64)>) -> Vec<BreakdownEntry> {
    // First-seen insertion order is kept in `order`; sums live in the map.
    let mut sums: HashMap<&str, u64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for (operator_type, walltime) in items {
        if !sums.contains_key(operator_type) {
            order.push(operator_type);
        }
        *sums.entry(operator_type).or_insert(0) += walltime;
    }

    let mut entries: Vec<BreakdownEntry> = order
        .into_iter()
        .map(|operator_type| BreakdownEntry {
            operator_type: operator_type.to_string(),
            walltime_ns: sums[operator_type],
            percentage: 0.0,
        })
        .collect();

    entries.sort_by(|a, b| b.walltime_ns.cmp(&a.walltime_ns));

    let total: u64 = entries.iter().map(|e| e.walltime_ns).sum();
    for entry in &mut entries {
        entry.percentage = if total > 0 {
            (entry.walltime_ns as f64 / total as f64) * 100.0
        } else {
            0.0
        };
    }

    entries
}
