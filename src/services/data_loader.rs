//! Dataset loading from JSON files
//!
//! The builtin dataset can be replaced with `--data <path>`, a JSON array
//! of monthly records in the original dashboard export shape.

use std::fs;
use std::path::Path;

use crate::types::{DashError, Dataset, MonthlyRecord, Result};

/// Legacy "no activity" sentinel used by the original export
const NO_ACTIVITY_SENTINEL: &str = "-";

/// Load and validate a dataset from a JSON file.
///
/// The activities sentinel (a single-element `["-"]` list) is resolved to
/// an empty list here, at the data-model boundary, so display code never
/// sees the magic string.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path)?;
    let mut records: Vec<MonthlyRecord> =
        serde_json::from_str(&content).map_err(|e| DashError::Parse(e.to_string()))?;

    for record in &mut records {
        normalize_activities(record);
    }

    Dataset::new(records)
}

/// Resolve the no-activity sentinel to an empty activity list
pub fn normalize_activities(record: &mut MonthlyRecord) {
    if record.activities.len() == 1 && record.activities[0] == NO_ACTIVITY_SENTINEL {
        record.activities.clear();
    }
}
