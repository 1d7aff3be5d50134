//! Console Report Formatting
//!
//! Human-readable output for one analysis: scenario counts, per-tool
//! describe blocks, the comparison numbers and the significance tests.

use crate::analyses::{AnalysisReport, REFERENCE_TOOL};

/// Format one analysis for terminal display.
pub fn format_analysis_report(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(report.title);
    output.push('\n');
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  scenarios: {}    chart: {}\n\n",
        report.scenario_count,
        report.artifact.path.display()
    ));

    // Per-tool describe blocks
    for (tool, summary) in &report.per_tool {
        output.push_str(&format!(
            "  {}: count {}  mean {:.2}  std {:.2}\n",
            tool.display_name(),
            summary.count,
            summary.mean,
            summary.std_dev
        ));
        output.push_str(&format!(
            "      min {:.2}  q25 {:.2}  median {:.2}  q75 {:.2}  max {:.2}\n",
            summary.min, summary.q25, summary.median, summary.q75, summary.max
        ));
    }

    // Column summaries
    output.push('\n');
    output.push_str(&format!(
        "  {:<8}  {:>10}  {:>10}  {:>10}\n",
        "Tool", "median", "max", "nonzero"
    ));
    output.push_str(&format!("  {}\n", "-".repeat(44)));
    for (tool, median) in report.medians.iter() {
        output.push_str(&format!(
            "  {:<8}  {:>10.2}  {:>10.2}  {:>10}\n",
            tool.display_name(),
            median,
            report.maxima.get(tool),
            report.nonzero_counts.get(tool) as usize
        ));
    }

    // Pairwise comparison of the reference tool against the others
    output.push('\n');
    for counts in &report.pairwise {
        output.push_str(&format!(
            "  {} vs {}: lower {}  equal {}  higher {}\n",
            REFERENCE_TOOL.display_name(),
            counts.other.display_name(),
            counts.lower,
            counts.equal,
            counts.higher
        ));
    }
    for (other, reduction) in &report.median_reductions {
        match reduction {
            Some(percent) => output.push_str(&format!(
                "  median reduction vs {}: {:.1}%\n",
                other.display_name(),
                percent
            )),
            None => output.push_str(&format!(
                "  median reduction vs {}: n/a (median is 0)\n",
                other.display_name()
            )),
        }
    }

    // Significance tests
    output.push('\n');
    match &report.artifact.friedman {
        Some(test) => output.push_str(&format!(
            "  Friedman chi-squared: {:.3} (p = {:.4})\n",
            test.statistic, test.p_value
        )),
        None => output.push_str("  Friedman chi-squared: n/a\n"),
    }
    for (other, test) in &report.artifact.wilcoxon {
        match test {
            Some(test) => output.push_str(&format!(
                "  Wilcoxon vs {}: W = {:.1} (p = {:.4})\n",
                other.display_name(),
                test.statistic,
                test.p_value
            )),
            None => output.push_str(&format!(
                "  Wilcoxon vs {}: n/a\n",
                other.display_name()
            )),
        }
    }

    output
}
