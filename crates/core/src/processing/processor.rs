//! File processor
//!
//! The per-file boundary of the engine: detect the format, parse, infer
//! a schema, and package everything into a [`ProcessingResult`]. Errors
//! stop at this boundary; one bad file never aborts the batch.

use tracing::{info, warn};

use super::result::ProcessingResult;
use crate::ingest::{FileFormat, IngestError, file_stem, parse_records};
use crate::inference::{InferenceConfig, build_schema, generate_suggestions};

/// Processes uploaded files into schemas and suggestions
#[derive(Debug, Clone, Default)]
pub struct FileProcessor {
    config: InferenceConfig,
}

impl FileProcessor {
    /// Create a processor with default configuration
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Process a single file's content.
    ///
    /// Always returns a result: parse failures and unsupported formats
    /// become failed results with a `Parse error: ...` message.
    pub fn process(&self, file_name: &str, content: &str) -> ProcessingResult {
        match self.try_process(file_name, content) {
            Ok(result) => {
                info!(
                    file = file_name,
                    records = result.record_count(),
                    fields = result.field_count(),
                    "file processed"
                );
                result
            }
            Err(e) => {
                warn!(file = file_name, error = %e, "file processing failed");
                ProcessingResult::failure(file_name, format!("Parse error: {}", e))
            }
        }
    }

    /// Process files strictly in order.
    ///
    /// Each file runs to completion before the next begins; result order
    /// equals submission order.
    pub fn process_all<'a, I>(&self, files: I) -> Vec<ProcessingResult>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        files
            .into_iter()
            .map(|(name, content)| self.process(name, content))
            .collect()
    }

    fn try_process(&self, file_name: &str, content: &str) -> Result<ProcessingResult, IngestError> {
        let format = FileFormat::from_name(file_name)?;
        let records = parse_records(content, format)?;

        let schema = build_schema(&records, &file_stem(file_name));
        let suggestions = generate_suggestions(&schema, records.len(), &self.config);
        let preview: Vec<_> = records.iter().take(self.config.preview_rows).cloned().collect();

        Ok(ProcessingResult::success(
            file_name,
            schema,
            records,
            preview,
            suggestions,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_csv() {
        let processor = FileProcessor::new();
        let result = processor.process("teams.csv", "name,wins\nSharks,10\nOtters,7\n");

        assert!(result.success);
        assert_eq!(result.record_count(), 2);
        assert_eq!(result.field_count(), 2);
        assert_eq!(result.schema.as_ref().unwrap().name, "teams");
    }

    #[test]
    fn test_process_unsupported_extension() {
        let processor = FileProcessor::new();
        let result = processor.process("standings.xlsx", "whatever");

        assert!(!result.success);
        let error = result.error.unwrap();
        assert!(error.starts_with("Parse error:"), "got: {}", error);
        assert!(error.contains("unsupported file format"));
    }

    #[test]
    fn test_process_invalid_json() {
        let processor = FileProcessor::new();
        let result = processor.process("teams.json", "{broken");

        assert!(!result.success);
        assert!(result.error.unwrap().starts_with("Parse error:"));
    }

    #[test]
    fn test_preview_capped() {
        let processor = FileProcessor::new();
        let rows: String = (0..10).map(|i| format!("{},x\n", i)).collect();
        let result = processor.process("teams.csv", &format!("id,val\n{}", rows));

        assert_eq!(result.record_count(), 10);
        assert_eq!(result.preview.len(), 5);
        assert_eq!(result.preview[0]["id"], "0");
    }

    #[test]
    fn test_one_failure_does_not_abort_batch() {
        let processor = FileProcessor::new();
        let results = processor.process_all(vec![
            ("a.csv", "h\n1\n"),
            ("bad.json", "{oops"),
            ("c.csv", "h\n2\n"),
        ]);

        assert_eq!(results.len(), 3);
        assert!(results[0].success);
        assert!(!results[1].success);
        assert!(results[2].success);
        assert_eq!(results[0].file_name, "a.csv");
        assert_eq!(results[2].file_name, "c.csv");
    }
}
