//! Per-file processing outcome

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::inference::SchemaNode;

/// Outcome of processing one uploaded file.
///
/// Created once per file and never mutated; a failed parse produces a
/// result with `success = false` and an error message instead of
/// propagating an error to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    /// Result identifier
    pub file_id: Uuid,
    /// Name of the processed file
    pub file_name: String,
    /// Whether parsing and inference succeeded
    pub success: bool,
    /// Inferred schema (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaNode>,
    /// All extracted records
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub records: Vec<Value>,
    /// Leading records kept for display
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub preview: Vec<Value>,
    /// Advisory suggestions
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub suggestions: Vec<String>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When processing finished
    pub processed_at: DateTime<Utc>,
}

impl ProcessingResult {
    /// Build a successful result
    pub fn success(
        file_name: impl Into<String>,
        schema: SchemaNode,
        records: Vec<Value>,
        preview: Vec<Value>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            file_id: Uuid::new_v4(),
            file_name: file_name.into(),
            success: true,
            schema: Some(schema),
            records,
            preview,
            suggestions,
            error: None,
            processed_at: Utc::now(),
        }
    }

    /// Build a failed result carrying a human-readable message
    pub fn failure(file_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_id: Uuid::new_v4(),
            file_name: file_name.into(),
            success: false,
            schema: None,
            records: Vec::new(),
            preview: Vec::new(),
            suggestions: Vec::new(),
            error: Some(error.into()),
            processed_at: Utc::now(),
        }
    }

    /// Number of extracted records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Number of fields in the inferred record schema
    pub fn field_count(&self) -> usize {
        self.schema
            .as_ref()
            .and_then(|schema| schema.items())
            .and_then(|item| item.properties())
            .map(|properties| properties.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::build_schema;
    use serde_json::json;

    #[test]
    fn test_field_and_record_counts() {
        let records = vec![json!({"a": "1", "b": "2"})];
        let schema = build_schema(&records, "t");
        let result = ProcessingResult::success("t.csv", schema, records, vec![], vec![]);

        assert_eq!(result.record_count(), 1);
        assert_eq!(result.field_count(), 2);
    }

    #[test]
    fn test_failure_has_no_schema() {
        let result = ProcessingResult::failure("t.csv", "Parse error: boom");
        assert!(!result.success);
        assert!(result.schema.is_none());
        assert_eq!(result.field_count(), 0);
        assert_eq!(result.error.as_deref(), Some("Parse error: boom"));
    }
}
