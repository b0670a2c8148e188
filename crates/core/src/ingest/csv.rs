//! CSV parsing into records
//!
//! A deliberately small parser for the header-plus-rows files the
//! onboarding flow accepts. Cells are trimmed and unquoted; no escaping
//! or embedded-delimiter handling is attempted.

use serde_json::{Map, Value};

use super::error::IngestError;

/// Parse CSV text into one record per data row.
///
/// The first non-empty line is the header. A data row is kept only when
/// its cell count matches the header's; mismatched rows are dropped
/// without error, so a single short or overlong row never fails the
/// whole file.
pub fn parse_csv(text: &str) -> Result<Vec<Value>, IngestError> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(IngestError::CsvTooShort);
    }

    let headers = split_row(lines[0]);
    let mut records = Vec::with_capacity(lines.len() - 1);

    for line in &lines[1..] {
        let cells = split_row(line);
        if cells.len() != headers.len() {
            continue;
        }

        let mut row = Map::new();
        for (header, cell) in headers.iter().zip(cells) {
            row.insert(header.clone(), Value::String(cell));
        }
        records.push(Value::Object(row));
    }

    Ok(records)
}

/// Split a line on commas, trimming each cell and stripping surrounding quotes
fn split_row(line: &str) -> Vec<String> {
    line.split(',')
        .map(|cell| strip_quotes(cell.trim()).to_string())
        .collect()
}

fn strip_quotes(cell: &str) -> &str {
    cell.trim_matches(|c| c == '"' || c == '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_csv() {
        let records = parse_csv("name,wins\nSharks,10\nOtters,7\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "Sharks");
        assert_eq!(records[1]["wins"], "7");
    }

    #[test]
    fn test_header_order_preserved() {
        let records = parse_csv("zeta,alpha,mid\n1,2,3\n").unwrap();
        let keys: Vec<&String> = records[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_quoted_and_padded_cells() {
        let records = parse_csv("\"name\" , city\n 'Sharks' , \"Harbor Bay\" \n").unwrap();
        assert_eq!(records[0]["name"], "Sharks");
        assert_eq!(records[0]["city"], "Harbor Bay");
    }

    #[test]
    fn test_mismatched_rows_dropped() {
        let records = parse_csv("a,b\n1,2\n1,2,3\nonly_one\n3,4\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["a"], "3");
    }

    #[test]
    fn test_blank_lines_ignored() {
        let records = parse_csv("a,b\n\n1,2\n   \n3,4\n\n").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_too_few_lines() {
        assert!(matches!(parse_csv(""), Err(IngestError::CsvTooShort)));
        assert!(matches!(parse_csv("a,b\n"), Err(IngestError::CsvTooShort)));
        assert!(matches!(parse_csv("a,b\n   \n"), Err(IngestError::CsvTooShort)));
    }
}
