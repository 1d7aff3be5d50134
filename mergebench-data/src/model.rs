//! Record types for the two input tables.
//!
//! Field names match the CSV column names so serde can map rows directly.

use serde::{Deserialize, Serialize};

/// The fixed set of merge tools under comparison.
///
/// `ToolA` is the reference tool: pairwise comparisons and signed-rank
/// tests measure the other two tools against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeTool {
    /// Reference tool (`tool_a` in the input tables)
    ToolA,
    /// Second tool (`tool_b`)
    ToolB,
    /// Third tool (`tool_c`)
    ToolC,
}

/// All tools in aligned-column order.
pub const TOOLS: [MergeTool; 3] = [MergeTool::ToolA, MergeTool::ToolB, MergeTool::ToolC];

impl MergeTool {
    /// Column index of this tool in aligned tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Identifier used in the input tables.
    pub fn id(self) -> &'static str {
        match self {
            MergeTool::ToolA => "tool_a",
            MergeTool::ToolB => "tool_b",
            MergeTool::ToolC => "tool_c",
        }
    }

    /// Human-readable name for legends and console reports.
    pub fn display_name(self) -> &'static str {
        match self {
            MergeTool::ToolA => "Tool A",
            MergeTool::ToolB => "Tool B",
            MergeTool::ToolC => "Tool C",
        }
    }

    /// The tools other than `self`, in column order.
    pub fn others(self) -> impl Iterator<Item = MergeTool> {
        TOOLS.into_iter().filter(move |t| *t != self)
    }
}

impl std::fmt::Display for MergeTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Outcome of a single file merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Merge completed and produced output without conflict markers.
    Success,
    /// Merge completed but left conflict hunks in the output.
    Conflict,
    /// The tool exited with an error.
    Fail,
    /// The tool was killed after exceeding its time budget.
    Timeout,
}

/// One row of the per-file merge evaluation table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeRecord {
    /// Scenario identifier (the merge directory).
    pub merge_dir: String,
    /// Tool that produced this row.
    pub merge_cmd: MergeTool,
    /// Merge outcome.
    pub outcome: Outcome,
    /// Line-level diff size against the expected result (insertions + deletions).
    pub line_diff_size: u64,
    /// Character-level diff size against the expected result.
    pub char_diff_size: u64,
    /// Character-level similarity ratio in [0, 1].
    pub char_diff_ratio: f64,
    /// Number of conflict hunks in the merge output.
    pub num_conflicts: u64,
    /// Total conflicting lines across all hunks.
    ///
    /// Meaningful only for `Outcome::Conflict` rows; `num_conflicts == 0`
    /// implies `conflict_size == 0` for well-formed input.
    pub conflict_size: u64,
}

/// One timed trial of a merge scenario.
///
/// The running-time table contains several rows per (scenario, tool) pair,
/// one per repeated execution; they are reduced to a median downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunningTimeRecord {
    /// Scenario identifier (the merge directory).
    pub merge_dir: String,
    /// Tool that was timed.
    pub merge_cmd: MergeTool,
    /// Wall-clock running time of one execution, in seconds.
    pub running_time: f64,
}
