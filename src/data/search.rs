use std::collections::BTreeSet;

use super::model::{JobRow, JobTable, UnknownColumn};

// ---------------------------------------------------------------------------
// Query functions over a loaded table
// ---------------------------------------------------------------------------

/// Case-insensitive substring test. The empty query matches everything.
fn contains_ci(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(&query.to_lowercase())
}

/// All values appearing in `column`, deduplicated and in ascending
/// lexicographic order.
pub fn distinct_values(table: &JobTable, column: &str) -> Result<Vec<String>, UnknownColumn> {
    table.check_column(column)?;

    let values: BTreeSet<&str> = table
        .rows
        .iter()
        .filter_map(|row| row.get(column))
        .collect();

    Ok(values.into_iter().map(str::to_string).collect())
}

/// Rows whose value at `column` contains `query`, compared
/// case-insensitively. Table order is preserved.
pub fn search_column<'a>(
    table: &'a JobTable,
    column: &str,
    query: &str,
) -> Result<Vec<&'a JobRow>, UnknownColumn> {
    table.check_column(column)?;

    Ok(table
        .rows
        .iter()
        .filter(|row| row.get(column).is_some_and(|val| contains_ci(val, query)))
        .collect())
}

/// Rows where any column's value contains `query`, compared
/// case-insensitively. A row appears at most once; the first matching
/// column short-circuits the rest of that row.
pub fn search_all<'a>(table: &'a JobTable, query: &str) -> Vec<&'a JobRow> {
    table
        .rows
        .iter()
        .filter(|row| row.iter().any(|(_, val)| contains_ci(val, query)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn row(pairs: &[(&str, &str)]) -> JobRow {
        let values: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        JobRow::new(values)
    }

    fn sample_table() -> JobTable {
        JobTable::new(
            vec!["employer".to_string(), "title".to_string()],
            vec![
                row(&[("employer", "Acme Inc"), ("title", "Engineer")]),
                row(&[("employer", "Enterprise Holdings, Inc"), ("title", "Analyst")]),
            ],
        )
    }

    #[test]
    fn distinct_values_are_sorted_and_deduped() {
        let mut table = sample_table();
        table
            .rows
            .push(row(&[("employer", "Acme Inc"), ("title", "Engineer")]));

        let values = distinct_values(&table, "title").unwrap();
        assert_eq!(values, vec!["Analyst", "Engineer"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let table = sample_table();

        let hits = search_column(&table, "employer", "enterprise").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].get("title"), Some("Analyst"));
    }

    #[test]
    fn empty_query_matches_every_row() {
        let table = sample_table();
        assert_eq!(search_column(&table, "title", "").unwrap().len(), 2);
        assert_eq!(search_all(&table, "").len(), 2);
    }

    #[test]
    fn search_all_reports_each_row_once() {
        // "Inc" appears in both employers; "n" appears in several cells of
        // the same row. Either way a row shows up exactly once.
        let table = sample_table();
        assert_eq!(search_all(&table, "inc").len(), 2);
        assert_eq!(search_all(&table, "n").len(), 2);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let table = sample_table();
        assert_eq!(
            distinct_values(&table, "salary"),
            Err(UnknownColumn("salary".to_string()))
        );
        assert!(search_column(&table, "salary", "x").is_err());
    }

    #[test]
    fn empty_table_yields_empty_results_not_errors() {
        let table = JobTable::default();
        assert!(distinct_values(&table, "anything").unwrap().is_empty());
        assert!(search_column(&table, "anything", "x").unwrap().is_empty());
        assert!(search_all(&table, "x").is_empty());
    }
}
