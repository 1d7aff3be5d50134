//! The Fixed Analysis Sequence
//!
//! Six analyses, each an independent batch step over the shared immutable
//! inputs: filter scenarios, aggregate into an aligned table, compute the
//! comparison numbers and render the histogram. The conflict analyses look
//! at scenarios where conflicts occurred but nothing failed; the diff-size
//! analyses look at scenarios every tool merged cleanly, where diff size
//! against the expected result is the meaningful quality signal.

use std::path::Path;

use anyhow::{Context, Result};

use mergebench_analysis::{
    AlignedTable, PairwiseCounts, ScenarioClasses, ToolSummary, aggregate, compare_pairwise,
    count_where, mean_conflict_hunk_size, median_of, reduction_percent, sum_of, summarize,
};
use mergebench_chart::{BinSpec, HistogramArtifact, HistogramConfig, render_histogram};
use mergebench_data::{MergeRecord, MergeTool, RunningTimeRecord, TOOLS};
use mergebench_stats::{SeriesSummary, describe, median};

/// Reference tool for pairwise comparisons and reduction percentages.
pub const REFERENCE_TOOL: MergeTool = MergeTool::ToolA;

/// Immutable inputs shared by every analysis.
pub struct AnalysisContext<'a> {
    /// Full per-file merge evaluation table.
    pub evaluations: &'a [MergeRecord],
    /// Full running-time table (repeated trials).
    pub running_times: &'a [RunningTimeRecord],
    /// Scenario classification over the full evaluation table.
    pub classes: &'a ScenarioClasses,
    /// Directory charts are written to.
    pub chart_dir: &'a Path,
    /// Chart dimensions in pixels.
    pub chart_size: (u32, u32),
}

/// Console-ready result of one analysis.
pub struct AnalysisReport {
    /// Human-readable analysis title.
    pub title: &'static str,
    /// Scenarios in the aligned table.
    pub scenario_count: usize,
    /// Describe-style block per tool.
    pub per_tool: Vec<(MergeTool, SeriesSummary)>,
    /// Median per tool column.
    pub medians: ToolSummary,
    /// Maximum per tool column.
    pub maxima: ToolSummary,
    /// Scenarios with a non-zero value per tool column.
    pub nonzero_counts: ToolSummary,
    /// Row-wise comparison of the reference tool against the others.
    pub pairwise: Vec<PairwiseCounts>,
    /// Reduction percentage of the reference median vs each other tool's,
    /// `None` when the other median is zero.
    pub median_reductions: Vec<(MergeTool, Option<f64>)>,
    /// Chart artifact, including the significance tests.
    pub artifact: HistogramArtifact,
}

/// Run the fixed sequence of analyses, in order.
pub fn run_all(ctx: &AnalysisContext<'_>) -> Result<Vec<AnalysisReport>> {
    Ok(vec![
        conflict_hunk_quantities(ctx)?,
        mean_conflict_hunk_sizes(ctx)?,
        running_times(ctx)?,
        line_diff_sizes(ctx)?,
        char_diff_sizes(ctx)?,
        char_diff_ratios(ctx)?,
    ])
}

/// Conflict hunks per file, over scenarios that conflicted without failing.
fn conflict_hunk_quantities(ctx: &AnalysisContext<'_>) -> Result<AnalysisReport> {
    let table = aggregate(
        ctx.evaluations,
        |s| ctx.classes.is_conflict_only(s),
        sum_of(|r: &MergeRecord| r.num_conflicts as f64),
    );
    let bins = BinSpec::new(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0])?;
    finish(
        ctx,
        "Conflict hunk quantities",
        "conflict_hunk_quantities",
        table,
        bins,
        "Amount of conflict hunks per file",
    )
}

/// Mean conflict hunk size per file, over conflicted-but-not-failed
/// scenarios where at least one tool actually produced conflicts.
fn mean_conflict_hunk_sizes(ctx: &AnalysisContext<'_>) -> Result<AnalysisReport> {
    let table = aggregate(
        ctx.evaluations,
        |s| ctx.classes.is_conflict_only(s),
        mean_conflict_hunk_size,
    )
    .filtered(|row| row.iter().any(|v| *v > 0.0));
    let bins = BinSpec::new(vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0])?;
    finish(
        ctx,
        "Mean conflict hunk sizes",
        "mean_conflict_hunk_sizes",
        table,
        bins,
        "Mean conflict hunk size per file",
    )
}

/// Median running time of the repeated executions, all scenarios.
fn running_times(ctx: &AnalysisContext<'_>) -> Result<AnalysisReport> {
    let table = aggregate(
        ctx.running_times,
        |_| true,
        median_of(|r: &RunningTimeRecord| r.running_time),
    );
    let bins = BinSpec::new(vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5])?;
    finish(
        ctx,
        "Running times",
        "running_times",
        table,
        bins,
        "Median running time of 10 executions (seconds)",
    )
}

/// Line diff size against the expected result, clean scenarios only.
fn line_diff_sizes(ctx: &AnalysisContext<'_>) -> Result<AnalysisReport> {
    let table = aggregate(
        ctx.evaluations,
        |s| ctx.classes.is_clean(s),
        sum_of(|r: &MergeRecord| r.line_diff_size as f64),
    );
    let edges = (0..=13).map(|i| (i * 50) as f64).collect();
    let bins = BinSpec::new(edges)?;
    finish(
        ctx,
        "Line diff sizes",
        "line_diff_sizes",
        table,
        bins,
        "GitDiff size (insertions + deletions)",
    )
}

/// Character diff size against the expected result, clean scenarios only.
fn char_diff_sizes(ctx: &AnalysisContext<'_>) -> Result<AnalysisReport> {
    let table = aggregate(
        ctx.evaluations,
        |s| ctx.classes.is_clean(s),
        sum_of(|r: &MergeRecord| r.char_diff_size as f64),
    );
    let edges = (0..=6).map(|i| (i * 1000) as f64).collect();
    let bins = BinSpec::new(edges)?;
    finish(
        ctx,
        "Character diff sizes",
        "char_diff_sizes",
        table,
        bins,
        "Character diff size",
    )
}

/// Character similarity ratio, clean scenarios only.
fn char_diff_ratios(ctx: &AnalysisContext<'_>) -> Result<AnalysisReport> {
    let table = aggregate(
        ctx.evaluations,
        |s| ctx.classes.is_clean(s),
        sum_of(|r: &MergeRecord| r.char_diff_ratio),
    );
    let bins = BinSpec::new(vec![0.75, 0.8, 0.85, 0.9, 0.95, 1.0])?;
    finish(
        ctx,
        "Character diff ratios",
        "char_diff_ratios",
        table,
        bins,
        "Character diff ratio",
    )
}

/// Shared tail of every analysis: comparison numbers plus the chart.
fn finish(
    ctx: &AnalysisContext<'_>,
    title: &'static str,
    slug: &str,
    table: AlignedTable,
    bins: BinSpec,
    x_label: &str,
) -> Result<AnalysisReport> {
    let per_tool = TOOLS
        .into_iter()
        .map(|tool| (tool, describe(&table.column(tool))))
        .collect();

    let medians = summarize(&table, median);
    let maxima = summarize(&table, column_max);
    let nonzero_counts = summarize(&table, count_where(|v| v > 0.0));
    let pairwise = compare_pairwise(&table, REFERENCE_TOOL);
    let median_reductions = REFERENCE_TOOL
        .others()
        .map(|other| {
            (
                other,
                reduction_percent(medians.get(REFERENCE_TOOL), medians.get(other)),
            )
        })
        .collect();

    let config =
        HistogramConfig::new(x_label).with_size(ctx.chart_size.0, ctx.chart_size.1);
    let out_path = ctx.chart_dir.join(format!("{slug}.png"));
    let artifact = render_histogram(&table, &bins, &config, REFERENCE_TOOL, &out_path)
        .with_context(|| format!("rendering {slug}"))?;

    Ok(AnalysisReport {
        title,
        scenario_count: table.len(),
        per_tool,
        medians,
        maxima,
        nonzero_counts,
        pairwise,
        median_reductions,
        artifact,
    })
}

/// Column maximum; zero for an empty column.
fn column_max(column: &[f64]) -> f64 {
    if column.is_empty() {
        return 0.0;
    }
    column.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
