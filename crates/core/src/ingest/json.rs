//! JSON parsing into records

use serde_json::Value;

use super::error::IngestError;

/// Parse JSON text into a record sequence.
///
/// An array yields one record per element; any other top-level value is
/// wrapped into a single-element sequence.
pub fn parse_json(text: &str) -> Result<Vec<Value>, IngestError> {
    let value: Value = serde_json::from_str(text)?;

    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}
