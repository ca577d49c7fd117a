//! jobcat – an in-memory catalog of job listings.
//!
//! Loads a CSV (or records-oriented JSON) file of job listings into memory
//! once, then answers lookup and substring-search queries against the cached
//! table:
//!
//! ```no_run
//! use jobcat::JobCatalog;
//!
//! let catalog = JobCatalog::new("data/job_data.csv");
//! let employers = catalog.distinct_values("employer")?;
//! let matches = catalog.search_column("employer", "enterprise")?;
//! let anywhere = catalog.search_all("ruby");
//! # Ok::<(), jobcat::UnknownColumn>(())
//! ```

pub mod catalog;
pub mod data;

pub use catalog::JobCatalog;
pub use data::model::{JobRow, JobTable, UnknownColumn};
