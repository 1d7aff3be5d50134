#![warn(missing_docs)]
//! Mergebench CLI
//!
//! Reads the two benchmark result tables, classifies scenarios by outcome
//! and runs the fixed sequence of comparative analyses. Each analysis
//! prints its summary numbers and writes one histogram chart; the run is a
//! strict sequence of independent batch steps over the same immutable
//! inputs.

mod analyses;
mod config;
mod formatting;

pub use analyses::{AnalysisContext, AnalysisReport, REFERENCE_TOOL, run_all};
pub use config::{ChartsConfig, InputsConfig, MergebenchConfig};
pub use formatting::format_analysis_report;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mergebench_analysis::ScenarioClasses;
use mergebench_data::{load_merge_evaluations, load_running_times};

/// Mergebench CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "mergebench")]
#[command(version, about = "Comparative analysis of file-merge tool benchmarks")]
pub struct Cli {
    /// Directory containing the two result tables
    #[arg(long)]
    pub results_dir: Option<PathBuf>,

    /// Path to the merge evaluation table (overrides --results-dir)
    #[arg(long)]
    pub evaluations: Option<PathBuf>,

    /// Path to the running-time table (overrides --results-dir)
    #[arg(long)]
    pub running_times: Option<PathBuf>,

    /// Directory charts are written to
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the Mergebench CLI. This is the main entry point of the binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Mergebench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("mergebench=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("mergebench=info")
            .init();
    }

    // Discover mergebench.toml; CLI flags override file values
    let config = MergebenchConfig::discover().unwrap_or_default();

    let results_dir = cli
        .results_dir
        .unwrap_or_else(|| PathBuf::from(&config.inputs.directory));
    let evaluations_path = cli
        .evaluations
        .unwrap_or_else(|| results_dir.join(&config.inputs.evaluations_file));
    let running_times_path = cli
        .running_times
        .unwrap_or_else(|| results_dir.join(&config.inputs.running_times_file));
    let chart_dir = cli
        .out_dir
        .unwrap_or_else(|| PathBuf::from(&config.charts.directory));

    std::fs::create_dir_all(&chart_dir)
        .with_context(|| format!("creating chart directory {}", chart_dir.display()))?;
    tracing::debug!(chart_dir = %chart_dir.display(), "chart output directory ready");

    // Both tables are read once and stay immutable for the rest of the run
    let evaluations = load_merge_evaluations(&evaluations_path)?;
    let running_times = load_running_times(&running_times_path)?;
    let classes = ScenarioClasses::classify(&evaluations);

    println!(
        "Mergebench Results ({})",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("{}", "=".repeat(60));
    println!(
        "  evaluation rows: {}   timing rows: {}",
        evaluations.len(),
        running_times.len()
    );
    println!(
        "  scenarios with fails/timeouts: {}   with conflicts: {}",
        classes.fail_count(),
        classes.conflict_count()
    );

    let ctx = AnalysisContext {
        evaluations: &evaluations,
        running_times: &running_times,
        classes: &classes,
        chart_dir: &chart_dir,
        chart_size: (config.charts.width, config.charts.height),
    };

    for report in run_all(&ctx)? {
        print!("{}", format_analysis_report(&report));
    }

    Ok(())
}
