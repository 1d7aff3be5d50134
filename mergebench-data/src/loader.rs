//! CSV ingestion for the two result tables.
//!
//! Both loaders require a header row and fail on the first malformed row.
//! The error carries the file path; the csv layer adds the record position,
//! which is enough to locate the offending line by hand.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::model::{MergeRecord, Outcome, RunningTimeRecord};

/// Errors raised while reading the input tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path of the input table.
        path: String,
        /// Underlying csv/io error.
        source: csv::Error,
    },
    /// A header or row failed to parse (missing column, unknown tool or
    /// outcome identifier, unparsable number).
    #[error("malformed input in {path}: {source}")]
    Malformed {
        /// Path of the input table.
        path: String,
        /// Underlying csv/serde error, including the record position.
        source: csv::Error,
    },
}

/// Load the per-file merge evaluation table.
pub fn load_merge_evaluations(path: &Path) -> Result<Vec<MergeRecord>, DataError> {
    let display_path = path.display().to_string();
    let reader = csv::Reader::from_path(path).map_err(|source| DataError::Open {
        path: display_path.clone(),
        source,
    })?;
    let records = parse_merge_evaluations(reader, &display_path)?;
    tracing::info!(path = %display_path, rows = records.len(), "loaded merge evaluations");
    Ok(records)
}

/// Load the running-time table (repeated trials per scenario and tool).
pub fn load_running_times(path: &Path) -> Result<Vec<RunningTimeRecord>, DataError> {
    let display_path = path.display().to_string();
    let reader = csv::Reader::from_path(path).map_err(|source| DataError::Open {
        path: display_path.clone(),
        source,
    })?;
    let records = parse_running_times(reader, &display_path)?;
    tracing::info!(path = %display_path, rows = records.len(), "loaded running times");
    Ok(records)
}

fn parse_merge_evaluations<R: Read>(
    mut reader: csv::Reader<R>,
    path: &str,
) -> Result<Vec<MergeRecord>, DataError> {
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: MergeRecord = row.map_err(|source| DataError::Malformed {
            path: path.to_string(),
            source,
        })?;
        check_conflict_invariant(&record);
        records.push(record);
    }
    Ok(records)
}

fn parse_running_times<R: Read>(
    mut reader: csv::Reader<R>,
    path: &str,
) -> Result<Vec<RunningTimeRecord>, DataError> {
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: RunningTimeRecord = row.map_err(|source| DataError::Malformed {
            path: path.to_string(),
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Conflict counters must agree: a conflict row with hunks has conflicting
/// lines and vice versa. Violations are tolerated (the aggregator guards the
/// division) but worth surfacing.
fn check_conflict_invariant(record: &MergeRecord) {
    if record.outcome == Outcome::Conflict
        && (record.num_conflicts == 0) != (record.conflict_size == 0)
    {
        tracing::warn!(
            merge_dir = %record.merge_dir,
            tool = record.merge_cmd.id(),
            num_conflicts = record.num_conflicts,
            conflict_size = record.conflict_size,
            "inconsistent conflict counters"
        );
    }
}
