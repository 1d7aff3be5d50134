//! Comparative Statistics over Aligned Tables
//!
//! Column reductions (median, max, sum, threshold counts), row-wise pairwise
//! comparison of a reference tool against the others, and the reduction
//! percentage derived from two summary values.

use std::cmp::Ordering;

use mergebench_data::{MergeTool, TOOLS};

use crate::table::AlignedTable;

/// Per-tool result of a column reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSummary {
    values: [f64; TOOLS.len()],
}

impl ToolSummary {
    /// The reduced value of one tool's column.
    pub fn get(&self, tool: MergeTool) -> f64 {
        self.values[tool.index()]
    }

    /// Iterate (tool, value) pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (MergeTool, f64)> + '_ {
        TOOLS.into_iter().map(|tool| (tool, self.get(tool)))
    }
}

/// Apply `reducer` independently to every tool's column.
pub fn summarize<F>(table: &AlignedTable, reducer: F) -> ToolSummary
where
    F: Fn(&[f64]) -> f64,
{
    let columns = table.columns();
    let mut values = [0.0; TOOLS.len()];
    for (slot, column) in values.iter_mut().zip(&columns) {
        *slot = reducer(column);
    }
    ToolSummary { values }
}

/// Reducer factory: count of column values satisfying `pred`.
pub fn count_where<P>(pred: P) -> impl Fn(&[f64]) -> f64
where
    P: Fn(f64) -> bool,
{
    move |column| column.iter().filter(|v| pred(**v)).count() as f64
}

/// Row-wise comparison buckets of the reference tool against another tool.
///
/// Every scenario lands in exactly one bucket, so the three counts sum to
/// the table's row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairwiseCounts {
    /// The tool the reference is compared against.
    pub other: MergeTool,
    /// Rows where the reference value is lower.
    pub lower: usize,
    /// Rows where both values are equal.
    pub equal: usize,
    /// Rows where the reference value is higher.
    pub higher: usize,
}

/// Compare `reference` row-wise against every other tool.
pub fn compare_pairwise(table: &AlignedTable, reference: MergeTool) -> Vec<PairwiseCounts> {
    reference
        .others()
        .map(|other| {
            let mut counts = PairwiseCounts {
                other,
                lower: 0,
                equal: 0,
                higher: 0,
            };
            for (_, row) in table.rows() {
                let reference_value = row[reference.index()];
                let other_value = row[other.index()];
                match reference_value
                    .partial_cmp(&other_value)
                    .unwrap_or(Ordering::Equal)
                {
                    Ordering::Less => counts.lower += 1,
                    Ordering::Equal => counts.equal += 1,
                    Ordering::Greater => counts.higher += 1,
                }
            }
            counts
        })
        .collect()
}

/// Percentage reduction of the reference summary value relative to another
/// tool's: 100 × (other − reference) / other.
///
/// Undefined when `other` is zero; callers report that as "n/a".
pub fn reduction_percent(reference: f64, other: f64) -> Option<f64> {
    if other == 0.0 {
        None
    } else {
        Some(100.0 * (other - reference) / other)
    }
}
