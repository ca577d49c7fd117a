use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{JobRow, JobTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a job table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – RFC-4180, first line is the header (the original data format)
/// * `.json` – records-oriented: `[{ "name": "...", "employer": "..." }, ...]`
///
/// The file is opened, fully read, and closed before this returns.
pub fn load_file(path: &Path) -> Result<JobTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one job listing per data row.
/// The reader is non-flexible, so a row whose width disagrees with the
/// header is a parse error rather than a short row.
fn load_csv(path: &Path) -> Result<JobTable> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let values: BTreeMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(col, cell)| (col.clone(), cell.to_string()))
            .collect();

        rows.push(JobRow::new(values));
    }

    Ok(JobTable::new(headers, rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "name": "Sr. IT Analyst", "employer": "Acme Inc", ... },
///   ...
/// ]
/// ```
///
/// All values are strings; every record must carry the same key set.
/// Column order is the first record's key order (sorted).
fn load_json(path: &Path) -> Result<JobTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<BTreeMap<String, String>> =
        serde_json::from_str(&text).context("parsing JSON")?;

    let columns: Vec<String> = records
        .first()
        .map(|rec| rec.keys().cloned().collect())
        .unwrap_or_default();

    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.into_iter().enumerate() {
        if !rec.keys().eq(columns.iter()) {
            bail!(
                "Row {i}: columns [{}] do not match header [{}]",
                rec.keys().cloned().collect::<Vec<_>>().join(", "),
                columns.join(", ")
            );
        }
        rows.push(JobRow::new(rec));
    }

    Ok(JobTable::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn csv_rows_share_the_header_key_set() {
        let mut tmp = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(tmp, "name,employer\nDev,Acme Inc\nQA,Globex\n").unwrap();

        let table = load_file(tmp.path()).unwrap();
        assert_eq!(table.columns, vec!["name", "employer"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].get("employer"), Some("Acme Inc"));
        assert_eq!(table.rows[1].get("name"), Some("QA"));
    }

    #[test]
    fn ragged_csv_row_is_a_parse_error() {
        let mut tmp = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(tmp, "name,employer\nDev,Acme Inc\nQA\n").unwrap();

        assert!(load_file(tmp.path()).is_err());
    }

    #[test]
    fn json_records_load_in_file_order() {
        let mut tmp = Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            tmp,
            r#"[{{"name": "Dev", "employer": "Acme Inc"}},
                {{"name": "QA", "employer": "Globex"}}]"#
        )
        .unwrap();

        let table = load_file(tmp.path()).unwrap();
        assert_eq!(table.columns, vec!["employer", "name"]);
        assert_eq!(table.rows[0].get("name"), Some("Dev"));
        assert_eq!(table.rows[1].get("employer"), Some("Globex"));
    }

    #[test]
    fn json_record_with_mismatched_keys_is_rejected() {
        let mut tmp = Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            tmp,
            r#"[{{"name": "Dev", "employer": "Acme Inc"}}, {{"name": "QA"}}]"#
        )
        .unwrap();

        assert!(load_file(tmp.path()).is_err());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let mut tmp = Builder::new().suffix(".xlsx").tempfile().unwrap();
        write!(tmp, "whatever").unwrap();

        assert!(load_file(tmp.path()).is_err());
    }
}
