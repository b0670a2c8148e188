//! File format detection

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::IngestError;

/// Formats the ingestion layer can parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Comma-separated values with a header row
    Csv,
    /// A JSON array of records, or a single JSON value
    Json,
}

impl FileFormat {
    /// Detect the format from a filename's extension (case-insensitive).
    ///
    /// Spreadsheet formats (`xlsx`, `xls`) are accepted at the upload
    /// boundary but have no parser here, so they fall through to
    /// [`IngestError::UnsupportedFormat`] like any other extension.
    pub fn from_name(name: &str) -> Result<Self, IngestError> {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        match extension.to_lowercase().as_str() {
            "csv" => Ok(FileFormat::Csv),
            "json" => Ok(FileFormat::Json),
            other => Err(IngestError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Csv => write!(f, "csv"),
            FileFormat::Json => write!(f, "json"),
        }
    }
}

/// Filename with the final extension stripped, used as the default schema name
pub fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_extension() {
        assert_eq!(FileFormat::from_name("teams.csv").unwrap(), FileFormat::Csv);
        assert_eq!(
            FileFormat::from_name("players.JSON").unwrap(),
            FileFormat::Json
        );
    }

    #[test]
    fn test_unsupported_extensions() {
        assert!(matches!(
            FileFormat::from_name("standings.xlsx"),
            Err(IngestError::UnsupportedFormat(ext)) if ext == "xlsx"
        ));
        assert!(matches!(
            FileFormat::from_name("notes.txt"),
            Err(IngestError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            FileFormat::from_name("no_extension"),
            Err(IngestError::UnsupportedFormat(ext)) if ext.is_empty()
        ));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("teams.csv"), "teams");
        assert_eq!(file_stem("season.2024.json"), "season.2024");
        assert_eq!(file_stem("plain"), "plain");
    }
}
