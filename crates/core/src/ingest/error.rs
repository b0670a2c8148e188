//! Error types for file ingestion

use thiserror::Error;

/// Errors that can occur while turning raw file text into records
#[derive(Error, Debug, Clone)]
pub enum IngestError {
    /// The filename extension is not a format the engine can parse
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// CSV content has no header or no data rows
    #[error("CSV file must have at least a header and one data row")]
    CsvTooShort,

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for IngestError {
    fn from(e: serde_json::Error) -> Self {
        IngestError::JsonParse(e.to_string())
    }
}
