//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads the trace file into a graph
//! 2. Resolves the traversal root
//! 3. Enumerates all root-to-source paths
//! 4. Ranks paths by total walltime
//! 5. Computes the operator breakdowns
//! 6. Writes the JSON report and/or prints the text summary

use crate::aggregator::{
    critical_path_breakdown, critical_path_detail, global_breakdown, rank_paths,
};
use crate::graph::model::TraceGraph;
use crate::graph::paths::{enumerate_paths, EnumerationLimits};
use crate::output::{format_report, write_report};
use crate::parser::schema::{CriticalPath, Report};
use crate::parser::trace_file::load_trace_file;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::GraphError;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the trace file
    pub trace_file: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Number of ranked paths to include in the report
    pub top_paths: usize,

    /// Optional cap on enumerated paths (unbounded when None)
    pub max_paths: Option<usize>,

    /// Print the text summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            trace_file: PathBuf::new(),
            output_json: None,
            top_paths: crate::utils::config::DEFAULT_TOP_PATHS,
            max_paths: None,
            print_summary: false,
        }
    }
}

/// Validate analyze arguments
///
/// **Public** - called by main.rs before execute_analyze
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.trace_file.as_os_str().is_empty() {
        anyhow::bail!("Trace file path cannot be empty");
    }

    if args.top_paths == 0 {
        anyhow::bail!("top-paths must be greater than 0");
    }

    if args.max_paths == Some(0) {
        anyhow::bail!("max-paths must be greater than 0");
    }

    Ok(())
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Trace file missing or malformed
/// * Empty graph, dangling references, or a cycle in the trace
/// * Report write failures
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Analyzing trace: {}", args.trace_file.display());

    let graph = load_trace_file(&args.trace_file)
        .with_context(|| format!("Failed to load trace file {}", args.trace_file.display()))?;

    debug!(
        "Loaded graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let limits = EnumerationLimits {
        max_paths: args.max_paths,
    };

    let report = build_report(
        &graph,
        &args.trace_file.display().to_string(),
        args.top_paths,
        limits,
    )
    .context("Failed to analyze trace graph")?;

    info!(
        "Critical path: {} ns over {} operators",
        report.critical_path.total_walltime_ns,
        report.critical_path.steps.len()
    );

    if let Some(output_json) = &args.output_json {
        write_report(&report, output_json).context("Failed to write JSON report")?;
        info!("Report written to: {}", output_json.display());
    }

    // Without an output file the summary is the only product, so print
    // it even when --summary was not given.
    if args.print_summary || args.output_json.is_none() {
        println!("{}", format_report(&report));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.3}s", elapsed.as_secs_f64());

    Ok(())
}

/// Run the full analysis pipeline over a loaded graph
///
/// **Public** - the library-level entry point; the CLI wraps this
///
/// # Arguments
/// * `graph` - the loaded trace graph
/// * `trace_file` - display name recorded in the report
/// * `top_paths` - how many ranked paths the report keeps
/// * `limits` - enumeration bounds
pub fn build_report(
    graph: &TraceGraph,
    trace_file: &str,
    top_paths: usize,
    limits: EnumerationLimits,
) -> Result<Report, GraphError> {
    let root_id = graph.root_id()?;
    debug!("Resolved root: {}", root_id);

    let paths = enumerate_paths(graph, root_id, limits)?;
    let ranked = rank_paths(graph, paths)?;

    // Rank 0 is the critical path. The ranked set is never empty here:
    // a non-empty graph always yields at least one path from the root.
    let critical = match ranked.first() {
        Some(critical) => critical_path_detail(graph, critical)?,
        None => CriticalPath {
            total_walltime_ns: 0,
            steps: Vec::new(),
        },
    };

    let critical_ids: Vec<u64> = critical.steps.iter().map(|s| s.vertex_id).collect();
    let operator_breakdown = global_breakdown(graph);
    let critical_breakdown = critical_path_breakdown(graph, &critical_ids)?;

    let mut ranked_paths = ranked;
    ranked_paths.truncate(top_paths);

    Ok(Report {
        version: SCHEMA_VERSION.to_string(),
        trace_file: trace_file.to_string(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        root_id,
        ranked_paths,
        critical_path: critical,
        operator_breakdown,
        critical_path_breakdown: critical_breakdown,
        generated_at: Utc::now().to_rfc3339(),
    })
}
