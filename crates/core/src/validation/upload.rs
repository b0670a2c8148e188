//! Upload validation
//!
//! Checks applied when a file is handed to the wizard, before any
//! parsing. Note the asymmetry with the engine: spreadsheets pass this
//! gate but have no parser downstream, so they fail at processing time.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted upload size (50MB)
pub const MAX_UPLOAD_SIZE: u64 = 50 * 1024 * 1024;

/// Coarse file category derived from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Comma-separated values
    Csv,
    /// JSON document
    Json,
    /// Spreadsheet (xlsx/xls)
    Excel,
    /// Anything else
    Other,
}

impl FileCategory {
    /// Categorize a filename by extension (case-insensitive)
    pub fn from_name(name: &str) -> Self {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("csv") => FileCategory::Csv,
            Some("json") => FileCategory::Json,
            Some("xlsx") | Some("xls") => FileCategory::Excel,
            _ => FileCategory::Other,
        }
    }
}

/// Errors from upload validation
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UploadValidationError {
    /// File exceeds the size cap
    #[error("File size must be less than 50MB")]
    TooLarge,

    /// Extension is not an accepted upload type
    #[error("File must be CSV, JSON, or Excel format")]
    UnsupportedType,
}

/// Validate an upload by name and size, returning its category
pub fn validate_upload(name: &str, size: u64) -> Result<FileCategory, UploadValidationError> {
    if size > MAX_UPLOAD_SIZE {
        return Err(UploadValidationError::TooLarge);
    }

    match FileCategory::from_name(name) {
        FileCategory::Other => Err(UploadValidationError::UnsupportedType),
        category => Ok(category),
    }
}
