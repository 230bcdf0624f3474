//! Graded records and the two filter-transform implementations.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A named record with an integer grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub grade: i32,
}

impl Record {
    #[must_use]
    pub fn new(name: impl Into<String>, grade: i32) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }
}

/// Error loading a roster file.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid roster JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The built-in seven-record roster.
#[must_use]
pub fn sample_roster() -> Vec<Record> {
    vec![
        Record::new("Alice", 85),
        Record::new("Bob", 72),
        Record::new("Charlie", 90),
        Record::new("Diana", 68),
        Record::new("Eve", 94),
        Record::new("Frank", 75),
        Record::new("Grace", 88),
    ]
}

/// Parse a roster from a JSON array of `{"name": .., "grade": ..}` objects.
pub fn parse_roster(json: &str) -> Result<Vec<Record>, RosterError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a roster file.
pub fn load_roster(path: &Path) -> Result<Vec<Record>, RosterError> {
    let data = std::fs::read_to_string(path)?;
    let records = parse_roster(&data)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded roster");
    Ok(records)
}

/// Uppercased names of records with `grade >= threshold`, built with an
/// explicit loop and a mutable accumulator.
#[must_use]
pub fn top_names_loop(records: &[Record], threshold: i32) -> Vec<String> {
    let mut result = Vec::new();
    for record in records {
        if record.grade >= threshold {
            result.push(record.name.to_uppercase());
        }
    }
    result
}

/// Uppercased names of records with `grade >= threshold`, built as a single
/// iterator chain.
#[must_use]
pub fn top_names_iter(records: &[Record], threshold: i32) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.grade >= threshold)
        .map(|record| record.name.to_uppercase())
        .collect()
}
