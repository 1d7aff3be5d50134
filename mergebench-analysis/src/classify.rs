//! Outcome Classification
//!
//! Partitions scenarios by the worst outcome any tool produced for them.
//! Computed once against the full evaluation table and reused by every
//! filtered view; a scenario can be in both sets (one tool failed, another
//! conflicted).

use fxhash::FxHashSet;

use mergebench_data::{MergeRecord, Outcome};

/// Scenario sets derived from the full merge evaluation table.
#[derive(Debug, Clone, Default)]
pub struct ScenarioClasses {
    fail: FxHashSet<String>,
    conflict: FxHashSet<String>,
}

impl ScenarioClasses {
    /// Classify every scenario in `records`.
    ///
    /// Empty input yields empty sets.
    pub fn classify(records: &[MergeRecord]) -> Self {
        let mut classes = ScenarioClasses::default();
        for record in records {
            match record.outcome {
                Outcome::Fail | Outcome::Timeout => {
                    classes.fail.insert(record.merge_dir.clone());
                }
                Outcome::Conflict => {
                    classes.conflict.insert(record.merge_dir.clone());
                }
                Outcome::Success => {}
            }
        }
        tracing::debug!(
            fail = classes.fail.len(),
            conflict = classes.conflict.len(),
            "classified scenarios"
        );
        classes
    }

    /// Some tool failed or timed out on this scenario.
    pub fn is_fail(&self, scenario: &str) -> bool {
        self.fail.contains(scenario)
    }

    /// Some tool produced conflicts on this scenario.
    pub fn is_conflict(&self, scenario: &str) -> bool {
        self.conflict.contains(scenario)
    }

    /// Every tool merged this scenario cleanly.
    pub fn is_clean(&self, scenario: &str) -> bool {
        !self.is_fail(scenario) && !self.is_conflict(scenario)
    }

    /// Conflicts occurred but no tool failed or timed out.
    pub fn is_conflict_only(&self, scenario: &str) -> bool {
        self.is_conflict(scenario) && !self.is_fail(scenario)
    }

    /// Number of scenarios with a fail or timeout.
    pub fn fail_count(&self) -> usize {
        self.fail.len()
    }

    /// Number of scenarios with conflicts.
    pub fn conflict_count(&self) -> usize {
        self.conflict.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergebench_data::MergeTool;

    fn record(merge_dir: &str, tool: MergeTool, outcome: Outcome) -> MergeRecord {
        MergeRecord {
            merge_dir: merge_dir.to_string(),
            merge_cmd: tool,
            outcome,
            line_diff_size: 0,
            char_diff_size: 0,
            char_diff_ratio: 1.0,
            num_conflicts: 0,
            conflict_size: 0,
        }
    }

    #[test]
    fn empty_input_yields_empty_sets() {
        let classes = ScenarioClasses::classify(&[]);
        assert_eq!(classes.fail_count(), 0);
        assert_eq!(classes.conflict_count(), 0);
        assert!(classes.is_clean("anything"));
    }

    #[test]
    fn one_bad_tool_taints_the_scenario() {
        let records = vec![
            record("s1", MergeTool::ToolA, Outcome::Success),
            record("s1", MergeTool::ToolB, Outcome::Timeout),
            record("s1", MergeTool::ToolC, Outcome::Success),
        ];
        let classes = ScenarioClasses::classify(&records);

        assert!(classes.is_fail("s1"));
        assert!(!classes.is_conflict("s1"));
        assert!(!classes.is_clean("s1"));
    }

    #[test]
    fn scenario_can_be_in_both_sets() {
        let records = vec![
            record("s1", MergeTool::ToolA, Outcome::Fail),
            record("s1", MergeTool::ToolB, Outcome::Conflict),
        ];
        let classes = ScenarioClasses::classify(&records);

        assert!(classes.is_fail("s1"));
        assert!(classes.is_conflict("s1"));
        assert!(!classes.is_conflict_only("s1"));
    }

    #[test]
    fn clean_scenarios_are_in_neither_set() {
        let records = vec![
            record("s1", MergeTool::ToolA, Outcome::Success),
            record("s1", MergeTool::ToolB, Outcome::Success),
            record("s2", MergeTool::ToolA, Outcome::Conflict),
        ];
        let classes = ScenarioClasses::classify(&records);

        assert!(classes.is_clean("s1"));
        assert!(!classes.is_clean("s2"));
        assert!(classes.is_conflict_only("s2"));
    }
}
