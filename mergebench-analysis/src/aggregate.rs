//! Grouping, Reduction and Pivoting
//!
//! Turns raw per-trial records into a scenario-aligned table: filter to the
//! allowed scenarios, group by (scenario, tool), reduce every group to one
//! value, pivot. A scenario whose group is empty for any tool is dropped;
//! that is the alignment rule, not an error, since downstream comparisons
//! only make sense over scenarios all tools processed.

use std::collections::BTreeMap;

use mergebench_data::{MergeRecord, MergeTool, RunningTimeRecord, TOOLS};

use crate::table::AlignedTable;

/// A record attributable to a (scenario, tool) pair.
pub trait ScenarioRecord {
    /// Scenario identifier this record belongs to.
    fn scenario(&self) -> &str;
    /// Tool that produced the record.
    fn tool(&self) -> MergeTool;
}

impl ScenarioRecord for MergeRecord {
    fn scenario(&self) -> &str {
        &self.merge_dir
    }

    fn tool(&self) -> MergeTool {
        self.merge_cmd
    }
}

impl ScenarioRecord for RunningTimeRecord {
    fn scenario(&self) -> &str {
        &self.merge_dir
    }

    fn tool(&self) -> MergeTool {
        self.merge_cmd
    }
}

/// Group `records` by (scenario, tool), reduce each group with `reduce` and
/// pivot into an aligned table.
///
/// `allow` restricts which scenarios participate (pass `|_| true` for all).
/// Scenarios missing any tool's data after grouping are silently dropped;
/// the drop count is logged at debug level.
pub fn aggregate<R, P, F>(records: &[R], allow: P, reduce: F) -> AlignedTable
where
    R: ScenarioRecord,
    P: Fn(&str) -> bool,
    F: Fn(&[&R]) -> f64,
{
    let mut groups: BTreeMap<&str, [Vec<&R>; TOOLS.len()]> = BTreeMap::new();
    for record in records.iter().filter(|r| allow(r.scenario())) {
        groups.entry(record.scenario()).or_default()[record.tool().index()].push(record);
    }

    let mut table = AlignedTable::new();
    let mut dropped = 0usize;
    for (scenario, by_tool) in &groups {
        if by_tool.iter().any(|group| group.is_empty()) {
            dropped += 1;
            continue;
        }
        let mut values = [0.0; TOOLS.len()];
        for (slot, group) in values.iter_mut().zip(by_tool) {
            *slot = reduce(group);
        }
        table.insert((*scenario).to_string(), values);
    }

    if dropped > 0 {
        tracing::debug!(dropped, "dropped scenarios missing a tool column");
    }
    table
}

/// Reducer: sum of `metric` over a group's rows.
pub fn sum_of<R, M>(metric: M) -> impl Fn(&[&R]) -> f64
where
    M: Fn(&R) -> f64,
{
    move |group| group.iter().map(|r| metric(r)).sum()
}

/// Reducer: median of `metric` over a group's rows (repeated trials).
pub fn median_of<R, M>(metric: M) -> impl Fn(&[&R]) -> f64
where
    M: Fn(&R) -> f64,
{
    move |group| {
        let values: Vec<f64> = group.iter().map(|r| metric(r)).collect();
        mergebench_stats::median(&values)
    }
}

/// Derived reducer: mean conflict hunk size of a group.
///
/// Total conflicting lines over total hunks, with a max(1, n) denominator so
/// a row tagged as conflicting without hunks reduces to its conflict size
/// instead of faulting.
pub fn mean_conflict_hunk_size(group: &[&MergeRecord]) -> f64 {
    let hunks: u64 = group.iter().map(|r| r.num_conflicts).sum();
    let lines: u64 = group.iter().map(|r| r.conflict_size).sum();
    lines as f64 / hunks.max(1) as f64
}
