//! End-to-end pipeline tests
//!
//! Exercise the full path from CSV text through classification, aggregation
//! and the comparative statistics, without touching the drawing backend.

use std::fs;
use std::path::PathBuf;

use mergebench_analysis::{
    ScenarioClasses, aggregate, compare_pairwise, mean_conflict_hunk_size, median_of, sum_of,
    summarize,
};
use mergebench_data::{
    MergeRecord, MergeTool, Outcome, RunningTimeRecord, load_merge_evaluations,
    load_running_times,
};
use mergebench_stats::median;

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("mergebench-{}-{}", std::process::id(), name));
    fs::write(&path, content).expect("write temp csv");
    path
}

const EVALS_HEADER: &str =
    "merge_dir,merge_cmd,outcome,line_diff_size,char_diff_size,char_diff_ratio,num_conflicts,conflict_size";

#[test]
fn clean_corpus_end_to_end() {
    // Three scenarios, one row per tool, all clean merges.
    let csv = format!(
        "{EVALS_HEADER}\n\
         s1,tool_a,success,10,100,0.99,0,0\n\
         s1,tool_b,success,12,110,0.98,0,0\n\
         s1,tool_c,success,8,90,0.99,0,0\n\
         s2,tool_a,success,20,200,0.97,0,0\n\
         s2,tool_b,success,22,210,0.96,0,0\n\
         s2,tool_c,success,18,190,0.97,0,0\n\
         s3,tool_a,success,5,50,0.99,0,0\n\
         s3,tool_b,success,6,60,0.99,0,0\n\
         s3,tool_c,success,4,40,0.99,0,0\n"
    );
    let path = write_temp("clean.csv", &csv);
    let records = load_merge_evaluations(&path).unwrap();
    fs::remove_file(&path).ok();

    let classes = ScenarioClasses::classify(&records);
    for scenario in ["s1", "s2", "s3"] {
        assert!(classes.is_clean(scenario));
    }

    let table = aggregate(
        &records,
        |s| classes.is_clean(s),
        sum_of(|r: &MergeRecord| r.line_diff_size as f64),
    );
    assert_eq!(table.len(), 3);

    let medians = summarize(&table, median);
    assert!((medians.get(MergeTool::ToolA) - 10.0).abs() < 1e-12);
    assert!((medians.get(MergeTool::ToolB) - 12.0).abs() < 1e-12);
    assert!((medians.get(MergeTool::ToolC) - 8.0).abs() < 1e-12);

    let pairwise = compare_pairwise(&table, MergeTool::ToolA);
    // The reference is below Tool B in every scenario and above Tool C
    assert_eq!(pairwise[0].other, MergeTool::ToolB);
    assert_eq!(
        (pairwise[0].lower, pairwise[0].equal, pairwise[0].higher),
        (3, 0, 0)
    );
    assert_eq!(
        (pairwise[1].lower, pairwise[1].equal, pairwise[1].higher),
        (0, 0, 3)
    );
}

#[test]
fn conflict_scenarios_end_to_end() {
    let csv = format!(
        "{EVALS_HEADER}\n\
         c1,tool_a,conflict,0,0,0.90,2,10\n\
         c1,tool_b,success,3,30,0.99,0,0\n\
         c1,tool_c,conflict,0,0,0.92,1,3\n\
         f1,tool_a,fail,0,0,0.0,0,0\n\
         f1,tool_b,conflict,0,0,0.88,4,20\n\
         f1,tool_c,success,1,10,0.99,0,0\n"
    );
    let path = write_temp("conflict.csv", &csv);
    let records = load_merge_evaluations(&path).unwrap();
    fs::remove_file(&path).ok();

    let classes = ScenarioClasses::classify(&records);
    // f1 failed and conflicted; only c1 is a pure conflict scenario
    assert!(classes.is_conflict("f1") && classes.is_fail("f1"));
    assert!(classes.is_conflict_only("c1"));
    assert!(!classes.is_conflict_only("f1"));

    let table = aggregate(
        &records,
        |s| classes.is_conflict_only(s),
        mean_conflict_hunk_size,
    );
    assert_eq!(table.len(), 1);

    let (scenario, row) = table.rows().next().unwrap();
    assert_eq!(scenario, "c1");
    // 10 lines over 2 hunks
    assert!((row[MergeTool::ToolA.index()] - 5.0).abs() < 1e-12);
    // No conflicts: max(1, 0) denominator keeps the value at 0
    assert!((row[MergeTool::ToolB.index()] - 0.0).abs() < 1e-12);
    assert!((row[MergeTool::ToolC.index()] - 3.0).abs() < 1e-12);

    let with_conflicts = table.filtered(|row| row.iter().any(|v| *v > 0.0));
    assert_eq!(with_conflicts.len(), 1);
}

#[test]
fn running_time_trials_reduce_to_medians() {
    let csv = "merge_dir,merge_cmd,running_time\n\
               s1,tool_a,0.9\n\
               s1,tool_a,0.5\n\
               s1,tool_a,0.7\n\
               s1,tool_b,1.4\n\
               s1,tool_b,1.2\n\
               s1,tool_c,2.0\n";
    let path = write_temp("times.csv", csv);
    let records = load_running_times(&path).unwrap();
    fs::remove_file(&path).ok();

    let table = aggregate(
        &records,
        |_| true,
        median_of(|r: &RunningTimeRecord| r.running_time),
    );

    assert_eq!(table.len(), 1);
    let (_, row) = table.rows().next().unwrap();
    assert!((row[MergeTool::ToolA.index()] - 0.7).abs() < 1e-12);
    assert!((row[MergeTool::ToolB.index()] - 1.3).abs() < 1e-12);
    assert!((row[MergeTool::ToolC.index()] - 2.0).abs() < 1e-12);
}

#[test]
fn partial_scenarios_are_dropped_in_alignment() {
    // s2 lacks a tool_c row and must not survive the pivot.
    let csv = format!(
        "{EVALS_HEADER}\n\
         s1,tool_a,success,1,10,0.99,0,0\n\
         s1,tool_b,success,2,20,0.99,0,0\n\
         s1,tool_c,success,3,30,0.99,0,0\n\
         s2,tool_a,success,4,40,0.99,0,0\n\
         s2,tool_b,success,5,50,0.99,0,0\n"
    );
    let path = write_temp("partial.csv", &csv);
    let records = load_merge_evaluations(&path).unwrap();
    fs::remove_file(&path).ok();

    let classes = ScenarioClasses::classify(&records);
    let table = aggregate(
        &records,
        |s| classes.is_clean(s),
        sum_of(|r: &MergeRecord| r.line_diff_size as f64),
    );

    assert_eq!(table.len(), 1);
    assert_eq!(table.rows().next().unwrap().0, "s1");
}

#[test]
fn outcome_taxonomy_matches_classifier() {
    // A scenario in neither classifier set has only success rows.
    let records = vec![
        record("clean", MergeTool::ToolA, Outcome::Success),
        record("clean", MergeTool::ToolB, Outcome::Success),
        record("clean", MergeTool::ToolC, Outcome::Success),
        record("bad", MergeTool::ToolA, Outcome::Timeout),
        record("bad", MergeTool::ToolB, Outcome::Success),
        record("bad", MergeTool::ToolC, Outcome::Success),
    ];
    let classes = ScenarioClasses::classify(&records);

    for r in &records {
        if classes.is_clean(&r.merge_dir) {
            assert_eq!(r.outcome, Outcome::Success);
        }
    }
    assert!(classes.is_clean("clean"));
    assert!(!classes.is_clean("bad"));
}

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
