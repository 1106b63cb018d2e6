//! Optrace CLI
//!
//! Critical path analysis for query operator execution traces.
//! Finds the walltime-dominant chain of operators and breaks walltime
//! down per operator type.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use optrace::commands::{execute_analyze, validate_args, AnalyzeArgs};
use optrace::utils::config::{DEFAULT_TOP_PATHS, SCHEMA_VERSION};

/// Optrace - critical path analysis for operator execution traces
#[derive(Parser, Debug)]
#[command(name = "optrace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a trace file
    Analyze {
        /// Path to the trace file (V/E records)
        #[arg(short, long)]
        file: PathBuf,

        /// Output path for the JSON report (omit to print only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of ranked paths to include in the report
        #[arg(long, default_value_t = DEFAULT_TOP_PATHS)]
        top_paths: usize,

        /// Abort if path enumeration exceeds this many paths
        #[arg(long)]
        max_paths: Option<usize>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Analyze {
            file,
            output,
            top_paths,
            max_paths,
            summary,
        } => {
            let args = AnalyzeArgs {
                trace_file: file,
                output_json: output,
                top_paths,
                max_paths,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a report JSON file
///
/// **Private** - internal command implementation
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    use optrace::output::read_report;

    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Trace: {}", report.trace_file);
    println!("  Vertices: {}", report.vertex_count);
    println!("  Edges: {}", report.edge_count);
    println!("  Root: {}", report.root_id);
    println!("  Ranked Paths: {}", report.ranked_paths.len());
    println!(
        "  Critical Path: {} ns over {} operators",
        report.critical_path.total_walltime_ns,
        report.critical_path.steps.len()
    );

    Ok(())
}

/// Display schema information
///
/// **Private** - internal command implementation
fn display_schema(show_details: bool) {
    println!("Optrace Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string              - Schema version (e.g., '1.0.0')");
        println!("  trace_file: string           - Analyzed trace file");
        println!("  vertex_count: number         - Vertices in the graph");
        println!("  edge_count: number           - Edges in the graph");
        println!("  root_id: number              - Traversal root (max vertex id)");
        println!("  ranked_paths: array          - Paths sorted by walltime, descending");
        println!("    total_walltime_ns: number  - Sum of member walltimes");
        println!("    vertices: array            - Vertex ids, root-first");
        println!("  critical_path: object        - Rank-0 path with per-step detail");
        println!("    steps: array               - id, operator, walltime, cumulative");
        println!("  operator_breakdown: array    - Walltime per operator type (global)");
        println!("  critical_path_breakdown: array - Same, critical path only");
        println!("  generated_at: string         - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Optrace v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Critical path analysis for query operator execution traces.");
}
