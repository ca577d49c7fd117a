use std::path::{Path, PathBuf};

use anyhow::Result;
use once_cell::sync::OnceCell;

use crate::data::loader;
use crate::data::model::{JobRow, JobTable, UnknownColumn};
use crate::data::search;

// ---------------------------------------------------------------------------
// JobCatalog – lazily loaded, memoized job table
// ---------------------------------------------------------------------------

/// Read-only catalog of job listings backed by a delimited text file.
///
/// The file is read on the first query and the resulting table is cached for
/// the catalog's lifetime; there is no reload path. The `OnceCell` doubles
/// as the one-time initialization guard, so a first query racing across
/// threads still loads exactly once.
///
/// If the file cannot be opened or parsed, the lazy path logs the failure
/// and caches the empty table: queries then return empty results instead of
/// erroring. Hosts that want strict startup validation call [`preload`]
/// first.
///
/// [`preload`]: JobCatalog::preload
#[derive(Debug)]
pub struct JobCatalog {
    source: PathBuf,
    table: OnceCell<JobTable>,
}

impl JobCatalog {
    /// Create a catalog over `source`. Nothing is read until the first
    /// query or [`preload`](JobCatalog::preload).
    pub fn new(source: impl Into<PathBuf>) -> Self {
        JobCatalog {
            source: source.into(),
            table: OnceCell::new(),
        }
    }

    /// Path of the backing file.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Load eagerly, surfacing any I/O or parse failure.
    ///
    /// A failed `preload` leaves the catalog unloaded; a later query goes
    /// through the lazy path and degrades to the empty table instead.
    pub fn preload(&self) -> Result<&JobTable> {
        self.table.get_or_try_init(|| loader::load_file(&self.source))
    }

    /// The cached table, loading it on first use. Best-effort: a load
    /// failure is logged once and the empty table is cached in its place.
    fn table(&self) -> &JobTable {
        self.table.get_or_init(|| {
            loader::load_file(&self.source).unwrap_or_else(|err| {
                log::error!(
                    "failed to load job data from {}: {err:#}",
                    self.source.display()
                );
                JobTable::default()
            })
        })
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.table().columns
    }

    /// A copy of every row, in file order.
    pub fn list_all(&self) -> Vec<JobRow> {
        self.table().rows.clone()
    }

    /// All values of `column`, deduplicated, ascending lexicographic order.
    pub fn distinct_values(&self, column: &str) -> Result<Vec<String>, UnknownColumn> {
        search::distinct_values(self.table(), column)
    }

    /// Rows whose `column` value contains `query` case-insensitively, in
    /// file order. The empty query matches every row.
    pub fn search_column(&self, column: &str, query: &str) -> Result<Vec<JobRow>, UnknownColumn> {
        let rows = search::search_column(self.table(), column, query)?;
        Ok(rows.into_iter().cloned().collect())
    }

    /// Rows where any column's value contains `query` case-insensitively.
    /// Each matching row appears once, in file order.
    pub fn search_all(&self, query: &str) -> Vec<JobRow> {
        search::search_all(self.table(), query)
            .into_iter()
            .cloned()
            .collect()
    }
}
