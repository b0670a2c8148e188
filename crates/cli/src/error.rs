//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the CLI user
#[derive(Error, Debug)]
pub enum CliError {
    /// Failed to read an input file
    #[error("Cannot read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file
    #[error("Cannot write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be decoded
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// League metadata failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Output serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}
