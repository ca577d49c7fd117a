use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A query named a column that is not part of the table's header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column: {0:?}")]
pub struct UnknownColumn(pub String);

// ---------------------------------------------------------------------------
// JobRow – one record of the source file
// ---------------------------------------------------------------------------

/// A single job listing (one data line of the source file), keyed by
/// column name. Every row of a table carries the same key set, the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRow {
    values: BTreeMap<String, String>,
}

impl JobRow {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        JobRow { values }
    }

    /// Cell value for `column`, if the row has that column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Iterate over `(column, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for JobRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (col, val) in &self.values {
            writeln!(f, "{col}: {val}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JobTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset: rows in file order plus the header that every
/// row shares. `Default` is the empty table, which is also what queries see
/// when loading failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobTable {
    /// Column names in header order.
    pub columns: Vec<String>,
    /// All rows, insertion order = file order.
    pub rows: Vec<JobRow>,
}

impl JobTable {
    pub fn new(columns: Vec<String>, rows: Vec<JobRow>) -> Self {
        JobTable { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Verify that `column` belongs to the header.
    ///
    /// An empty table has no header to validate against; queries on it
    /// produce empty results rather than an error, so the check passes.
    pub fn check_column(&self, column: &str) -> Result<(), UnknownColumn> {
        if self.rows.is_empty() || self.columns.iter().any(|c| c == column) {
            Ok(())
        } else {
            Err(UnknownColumn(column.to_string()))
        }
    }
}
