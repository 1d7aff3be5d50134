#![warn(missing_docs)]
//! Mergebench Analysis - Aggregation and Comparative Statistics
//!
//! The core pipeline between raw records and the report/chart layers:
//! - `ScenarioClasses` partitions scenarios by outcome (fail/conflict/clean)
//! - `aggregate` groups records by (scenario, tool), reduces each group to
//!   one value and pivots into a scenario-aligned table
//! - `summarize`, `compare_pairwise` and `reduction_percent` compute the
//!   printed comparison numbers over aligned tables
//!
//! Every function is a pure transform: source records are never mutated and
//! each step produces a fresh table.

mod aggregate;
mod classify;
mod compare;
mod table;

pub use aggregate::{ScenarioRecord, aggregate, mean_conflict_hunk_size, median_of, sum_of};
pub use classify::ScenarioClasses;
pub use compare::{
    PairwiseCounts, ToolSummary, compare_pairwise, count_where, reduction_percent, summarize,
};
pub use table::AlignedTable;
