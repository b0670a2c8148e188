//! File ingestion: raw text → ordered record sequences
//!
//! Converts uploaded file content into flat records for the inference
//! engine. CSV and JSON are the two supported formats; the format is
//! declared by the caller (normally detected from the filename).
//!
//! Records are `serde_json::Value`s: CSV rows become objects whose values
//! are all strings, JSON elements are taken as-is. Key order follows the
//! source (header order for CSV, document order for JSON).

mod csv;
mod error;
mod format;
mod json;

pub use csv::parse_csv;
pub use error::IngestError;
pub use format::{FileFormat, file_stem};
pub use json::parse_json;

use serde_json::Value;

/// Parse raw file content as the given format.
///
/// Pure function of its inputs; no IO.
pub fn parse_records(content: &str, format: FileFormat) -> Result<Vec<Value>, IngestError> {
    match format {
        FileFormat::Csv => parse_csv(content),
        FileFormat::Json => parse_json(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_format() {
        let csv = parse_records("a,b\n1,2\n", FileFormat::Csv).unwrap();
        assert_eq!(csv.len(), 1);

        let json = parse_records(r#"[{"a": 1}]"#, FileFormat::Json).unwrap();
        assert_eq!(json.len(), 1);
    }
}
