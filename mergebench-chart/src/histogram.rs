//! Grouped Histogram Rendering
//!
//! One bar group per bin, one bar per tool, drawn into a PNG. The aligned
//! columns also go through the significance tests here so every chart is
//! accompanied by the Friedman and Wilcoxon results for the same data.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use mergebench_analysis::AlignedTable;
use mergebench_data::{MergeTool, TOOLS};
use mergebench_stats::{SignificanceTest, friedman_test, wilcoxon_signed_rank};

use crate::bins::{BinSpec, ChartError};
use crate::hatch::{TOOL_HATCHES, unit_segments};

/// Pastel fills, one per tool; hatch patterns keep the series apart when
/// the chart is printed without color.
const SERIES_FILLS: [RGBColor; 3] = [
    RGBColor(158, 202, 225),
    RGBColor(253, 208, 162),
    RGBColor(199, 233, 192),
];

const HATCH_SPACING: f64 = 0.35;

/// Appearance settings for one rendered histogram.
#[derive(Debug, Clone)]
pub struct HistogramConfig {
    /// X-axis description.
    pub x_label: String,
    /// Y-axis description.
    pub y_label: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl HistogramConfig {
    /// Config with the given x label and the default frequency y label.
    pub fn new(x_label: impl Into<String>) -> Self {
        Self {
            x_label: x_label.into(),
            y_label: "Frequency".to_string(),
            width: 1280,
            height: 720,
        }
    }

    /// Override the chart dimensions.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Everything a rendered histogram produced besides the image itself.
#[derive(Debug, Clone)]
pub struct HistogramArtifact {
    /// Where the PNG was written.
    pub path: PathBuf,
    /// Tick label per bin edge, after the boundary rule.
    pub tick_labels: Vec<String>,
    /// Per-tool bin counts, in tool order.
    pub counts: [Vec<usize>; TOOLS.len()],
    /// Friedman chi-squared across the three aligned columns, when defined.
    pub friedman: Option<SignificanceTest>,
    /// Wilcoxon signed-rank of the reference tool against each other tool,
    /// when defined.
    pub wilcoxon: Vec<(MergeTool, Option<SignificanceTest>)>,
}

/// Render the table as a grouped histogram over `bins` and write it to
/// `out_path`.
///
/// Every value is clipped into the bin range before bucketing, so the total
/// count per tool always equals the table's row count.
pub fn render_histogram(
    table: &AlignedTable,
    bins: &BinSpec,
    config: &HistogramConfig,
    reference: MergeTool,
    out_path: &Path,
) -> Result<HistogramArtifact, ChartError> {
    let columns = table.columns();

    let counts = [
        bin_counts(&columns[0], bins),
        bin_counts(&columns[1], bins),
        bin_counts(&columns[2], bins),
    ];

    let (data_min, data_max) = data_extent(&columns, bins);
    let tick_labels = bins.tick_labels(data_min, data_max);

    draw(&counts, &tick_labels, config, out_path)?;
    tracing::info!(path = %out_path.display(), rows = table.len(), "wrote histogram");

    let col_slices: [&[f64]; TOOLS.len()] = [&columns[0], &columns[1], &columns[2]];
    let friedman = match friedman_test(&col_slices) {
        Ok(test) => Some(test),
        Err(e) => {
            tracing::warn!(error = %e, "friedman test not applicable");
            None
        }
    };
    let wilcoxon = reference
        .others()
        .map(|other| {
            match wilcoxon_signed_rank(&columns[reference.index()], &columns[other.index()]) {
                Ok(test) => (other, Some(test)),
                Err(e) => {
                    tracing::warn!(error = %e, tool = other.id(), "wilcoxon test not applicable");
                    (other, None)
                }
            }
        })
        .collect();

    Ok(HistogramArtifact {
        path: out_path.to_path_buf(),
        tick_labels,
        counts,
        friedman,
        wilcoxon,
    })
}

/// Count clipped values per bin.
pub(crate) fn bin_counts(column: &[f64], bins: &BinSpec) -> Vec<usize> {
    let mut counts = vec![0; bins.bin_count()];
    for value in column {
        counts[bins.bucket_of(*value)] += 1;
    }
    counts
}

/// True extent of the data across all columns; falls back to the bin range
/// for an empty table so the labels stay unmodified.
fn data_extent(columns: &[Vec<f64>; TOOLS.len()], bins: &BinSpec) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in columns.iter().flatten() {
        min = min.min(*value);
        max = max.max(*value);
    }
    if min.is_finite() {
        (min, max)
    } else {
        (bins.first(), bins.first())
    }
}

fn draw(
    counts: &[Vec<usize>; TOOLS.len()],
    tick_labels: &[String],
    config: &HistogramConfig,
    out_path: &Path,
) -> Result<(), ChartError> {
    let bin_count = counts[0].len();
    let y_max = counts
        .iter()
        .flatten()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1) as f64
        * 1.1;

    let root =
        BitMapBackend::new(out_path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(24)
        .x_label_area_size(56)
        .y_label_area_size(64)
        .build_cartesian_2d(0f64..bin_count as f64, 0f64..y_max)
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(tick_labels.len())
        .x_label_formatter(&|x| edge_label(*x, tick_labels))
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .label_style(("sans-serif", 20))
        .axis_desc_style(("sans-serif", 26))
        .draw()
        .map_err(backend_err)?;

    // Bars are laid out in bin-index space: bin i spans [i, i+1) and holds
    // one bar per tool with a small group padding.
    let bar_width = 0.9 / TOOLS.len() as f64;
    for (tool, tool_counts) in TOOLS.into_iter().zip(counts) {
        let fill = SERIES_FILLS[tool.index()];
        let bars: Vec<(f64, f64, f64)> = tool_counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(bin, count)| {
                let x0 = bin as f64 + 0.05 + tool.index() as f64 * bar_width;
                (x0, x0 + bar_width, *count as f64)
            })
            .collect();

        chart
            .draw_series(
                bars.iter()
                    .map(|&(x0, x1, top)| Rectangle::new([(x0, 0.0), (x1, top)], fill.filled())),
            )
            .map_err(backend_err)?
            .label(tool.display_name())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], fill.filled()));

        chart
            .draw_series(bars.iter().map(|&(x0, x1, top)| {
                Rectangle::new([(x0, 0.0), (x1, top)], BLACK.stroke_width(1))
            }))
            .map_err(backend_err)?;

        let hatch = unit_segments(TOOL_HATCHES[tool.index()], HATCH_SPACING);
        chart
            .draw_series(bars.iter().flat_map(|&(x0, x1, top)| {
                let width = x1 - x0;
                hatch.iter().map(move |&((sx, sy), (ex, ey))| {
                    PathElement::new(
                        vec![(x0 + sx * width, sy * top), (x0 + ex * width, ey * top)],
                        BLACK.stroke_width(1),
                    )
                })
            }))
            .map_err(backend_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 20))
        .draw()
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}

fn backend_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Backend(e.to_string())
}

/// Tick label for an axis position: edges sit at integer bin indices, every
/// other position stays unlabeled.
fn edge_label(x: f64, tick_labels: &[String]) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    tick_labels
        .get(idx as usize)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bins(edges: &[f64]) -> BinSpec {
        BinSpec::new(edges.to_vec()).unwrap()
    }

    #[test]
    fn counts_preserve_every_value() {
        let bins = bins(&[0.0, 10.0, 20.0, 30.0]);
        // Values straddle the range on both sides
        let column = vec![-5.0, 0.0, 3.0, 10.0, 25.0, 30.0, 95.0];

        let counts = bin_counts(&column, &bins);
        assert_eq!(counts.iter().sum::<usize>(), column.len());
        // Clipped extremes land in the end bins
        assert_eq!(counts[0], 3);
        assert_eq!(counts[2], 3);
    }

    #[test]
    fn counts_respect_half_open_bins() {
        let bins = bins(&[0.0, 1.0, 2.0]);
        let counts = bin_counts(&[0.0, 0.5, 1.0, 1.5, 2.0], &bins);
        assert_eq!(counts, vec![2, 3]);
    }

    #[test]
    fn empty_table_extent_falls_back_to_bin_range() {
        let bins = bins(&[0.0, 1.0, 2.0]);
        let columns = [Vec::new(), Vec::new(), Vec::new()];
        let (min, max) = data_extent(&columns, &bins);

        let labels = bins.tick_labels(min, max);
        assert_eq!(labels, vec!["0", "1", "2"]);
    }

    #[test]
    fn edge_labels_only_at_integer_positions() {
        let labels = vec!["0".to_string(), "50".to_string(), "100".to_string()];
        assert_eq!(edge_label(1.0, &labels), "50");
        assert_eq!(edge_label(1.4, &labels), "");
        assert_eq!(edge_label(7.0, &labels), "");
    }
}
