//! # CSV Export
//!
//! Formats pre-shaped report rows into downloadable CSV files.
//!
//! ## Format
//! The header row is the keys of the first record; each cell is
//! wrapped in double quotes with internal quotes doubled, cells are
//! comma-separated, rows newline-joined. Deliberately minimal, not
//! full RFC 4180: no delimiter configuration, and embedded newlines
//! survive only because quoting happens to cover them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::StoreResult;

/// One flat record: display column name → cell value, in column order.
pub type CsvRow = Vec<(String, String)>;

/// Builds a row from `(&str, String)` pairs.
pub fn row(cells: Vec<(&str, String)>) -> CsvRow {
    cells
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

// =============================================================================
// Encoding
// =============================================================================

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Encodes rows into CSV text; `None` when there is nothing to export.
///
/// Every row is emitted under the first row's header, cells matched by
/// column name.
pub fn encode(rows: &[CsvRow]) -> Option<String> {
    let first = rows.first()?;
    let headers: Vec<&str> = first.iter().map(|(key, _)| key.as_str()).collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| quote(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for record in rows {
        let line = headers
            .iter()
            .map(|header| {
                let cell = record
                    .iter()
                    .find(|(key, _)| key == header)
                    .map(|(_, value)| value.as_str())
                    .unwrap_or("");
                quote(cell)
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    Some(lines.join("\n"))
}

/// Writes rows to `<dir>/<filename>` and returns the written path, or
/// `None` when there is nothing to export.
pub fn write_csv(dir: &Path, filename: &str, rows: &[CsvRow]) -> StoreResult<Option<PathBuf>> {
    let Some(contents) = encode(rows) else {
        return Ok(None);
    };

    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, contents)?;
    info!(path = %path.display(), rows = rows.len(), "CSV report written");
    Ok(Some(path))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_comes_from_first_record() {
        let rows = vec![
            row(vec![("Name", "Rice".to_string()), ("Qty", "3".to_string())]),
            row(vec![("Name", "Milk".to_string()), ("Qty", "1".to_string())]),
        ];
        let csv = encode(&rows).unwrap();
        assert_eq!(csv, "\"Name\",\"Qty\"\n\"Rice\",\"3\"\n\"Milk\",\"1\"");
    }

    #[test]
    fn test_internal_quotes_are_doubled() {
        let rows = vec![row(vec![("Notes", "said \"pay later\"".to_string())])];
        let csv = encode(&rows).unwrap();
        assert_eq!(csv, "\"Notes\"\n\"said \"\"pay later\"\"\"");
    }

    #[test]
    fn test_commas_survive_inside_quotes() {
        let rows = vec![row(vec![
            ("Name", "Rice, Basmati".to_string()),
            ("Qty", "3".to_string()),
        ])];
        let csv = encode(&rows).unwrap();
        assert_eq!(csv, "\"Name\",\"Qty\"\n\"Rice, Basmati\",\"3\"");
    }

    #[test]
    fn test_empty_input_encodes_to_none() {
        assert!(encode(&[]).is_none());
    }

    #[test]
    fn test_write_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![row(vec![("Name", "Rice".to_string())])];

        let path = write_csv(dir.path(), "inventory_report.csv", &rows)
            .unwrap()
            .unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "\"Name\"\n\"Rice\"");

        // Nothing to export, nothing written
        assert!(write_csv(dir.path(), "empty.csv", &[]).unwrap().is_none());
        assert!(!dir.path().join("empty.csv").exists());
    }
}
