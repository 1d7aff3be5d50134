//! Scenario-aligned Metric Table
//!
//! One row per scenario, one value per tool. A scenario only enters the
//! table when every tool has a value for it, so the per-tool columns are
//! matched series of equal length, the shape both the comparative
//! statistics and the significance tests require.

use std::collections::BTreeMap;

use mergebench_data::{MergeTool, TOOLS};

/// One value per tool, indexed by [`MergeTool::index`].
pub type ToolRow = [f64; TOOLS.len()];

/// Scenario-aligned metric table.
///
/// Backed by a `BTreeMap` so iteration (and therefore every derived column
/// and report) is deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedTable {
    rows: BTreeMap<String, ToolRow>,
}

impl AlignedTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-populated row for `scenario`.
    pub fn insert(&mut self, scenario: String, values: ToolRow) {
        self.rows.insert(scenario, values);
    }

    /// Number of scenarios in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in scenario order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &ToolRow)> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// One tool's column, in scenario order.
    pub fn column(&self, tool: MergeTool) -> Vec<f64> {
        self.rows.values().map(|row| row[tool.index()]).collect()
    }

    /// All columns, in tool order, each in scenario order.
    pub fn columns(&self) -> [Vec<f64>; TOOLS.len()] {
        [
            self.column(MergeTool::ToolA),
            self.column(MergeTool::ToolB),
            self.column(MergeTool::ToolC),
        ]
    }

    /// Keep only rows satisfying `keep`, returning a new table.
    pub fn filtered<F>(&self, keep: F) -> AlignedTable
    where
        F: Fn(&ToolRow) -> bool,
    {
        AlignedTable {
            rows: self
                .rows
                .iter()
                .filter(|(_, row)| keep(row))
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
        }
    }
}
