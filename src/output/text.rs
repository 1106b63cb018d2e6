//! Plain-text report rendering for terminal output.
//!
//! Mirrors the layout performance engineers already expect from trace
//! tooling: a ranked path listing, a delimited critical-path block with
//! cumulative walltimes, and two operator breakdown tables.

use crate::parser::schema::{BreakdownEntry, CriticalPath, RankedPath, Report};
use std::fmt::Write;

const RULE_WIDTH: usize = 80;

/// Render the ranked path listing, one line per path
///
/// **Public** - used by the analyze command's summary output
pub fn format_ranked_paths(paths: &[RankedPath]) -> String {
    let mut out = String::new();
    for (i, ranked) in paths.iter().enumerate() {
        let chain = ranked
            .vertices
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = writeln!(
            out,
            "Path {:2}: {:10} ns | Path: {}",
            i + 1,
            ranked.total_walltime_ns,
            chain
        );
    }
    out
}

/// Render the critical path block with per-step cumulative walltimes
///
/// **Public** - used by the analyze command's summary output
pub fn format_critical_path(critical: &CriticalPath) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "CRITICAL PATH (Total Walltime: {} nanoseconds)",
        critical.total_walltime_ns
    );
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out);

    for (i, step) in critical.steps.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:2}. Operator ID {:2} ({}) | Walltime: {:10} ns | Cumulative: {:10} ns",
            i + 1,
            step.vertex_id,
            step.operator_type,
            step.walltime_ns,
            step.cumulative_walltime_ns
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "Total Critical Path Walltime: {} nanoseconds",
        critical.total_walltime_ns
    );
    let _ = writeln!(out, "Path Length: {} operators", critical.steps.len());
    let _ = writeln!(out, "{}", rule);

    out
}

/// Render one breakdown table, one row per operator type
///
/// **Public** - used for both the global and critical-path tables
pub fn format_breakdown(entries: &[BreakdownEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{:<20} | {:12} ns | {:5.1}%",
            entry.operator_type, entry.walltime_ns, entry.percentage
        );
    }
    out
}

/// Render the full text report
///
/// **Public** - one-stop rendering for `analyze --summary`
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Loaded graph with {} vertices and {} edges",
        report.vertex_count, report.edge_count
    );
    let _ = writeln!(out, "Root node ID: {}", report.root_id);
    let _ = writeln!(out);

    out.push_str(&format_ranked_paths(&report.ranked_paths));
    let _ = writeln!(out);
    out.push_str(&format_critical_path(&report.critical_path));

    let _ = writeln!(out);
    let _ = writeln!(out, "Operator Breakdown:");
    out.push_str(&format_breakdown(&report.operator_breakdown));
    let _ = writeln!(out);
    let _ = writeln!(out, "Critical Path Operator Breakdown:");
    out.push_str(&format_breakdown(&report.critical_path_breakdown));

    out
}
