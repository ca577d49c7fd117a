/// Data layer: core types, loading, and querying.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → JobTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ JobTable  │  Vec<JobRow>, header columns
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  search   │  distinct values, substring queries → matching rows
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod search;
