//! Schema assembly
//!
//! Builds a schema tree for a whole record set and derives the advisory
//! suggestions shown next to each processed file.
//!
//! Field discovery uses the first record as the structural sample: keys
//! that only appear in later records are not emitted. This sampling bias
//! is part of the observed contract and covered by a regression test.

use indexmap::IndexMap;
use serde_json::Value;

use super::classify::column_type;
use super::config::InferenceConfig;
use super::types::{SchemaKind, SchemaNode};

/// Build a schema describing `records`, named `name` (the file stem).
///
/// An empty record set yields the degenerate schema: an array of an
/// empty object. Never fails.
pub fn build_schema(records: &[Value], name: &str) -> SchemaNode {
    let Some(sample) = records.first() else {
        return SchemaNode::array(name, SchemaNode::object("item", IndexMap::new()));
    };

    let mut properties = IndexMap::new();

    // Keys of objects preserve source order, so iteration follows the
    // sample record's field order.
    if let Some(fields) = sample.as_object() {
        for key in fields.keys() {
            let values: Vec<&Value> = records
                .iter()
                .filter_map(|record| record.get(key))
                .filter(|value| !value.is_null())
                .collect();

            let ty = column_type(values.iter().copied());
            let example = values.first().map(|v| (*v).clone());

            let node = SchemaNode::leaf(key.clone(), ty, example)
                .with_description(format!("Field: {}", key));
            properties.insert(key.clone(), node);
        }
    }

    tracing::debug!(
        schema = name,
        fields = properties.len(),
        records = records.len(),
        "schema assembled"
    );

    SchemaNode::array(name, SchemaNode::object("record", properties))
}

/// Derive advisory suggestions for a processed file.
///
/// Order is fixed: large dataset, many fields, missing identifier, then
/// the closing line. The field checks only apply when records were
/// actually observed; the degenerate schema has nothing to inspect.
pub fn generate_suggestions(
    schema: &SchemaNode,
    record_count: usize,
    config: &InferenceConfig,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if record_count > config.large_dataset_threshold {
        suggestions
            .push("Large dataset detected - consider data pagination for better performance".to_string());
    }

    if record_count > 0
        && let Some(SchemaKind::Object { properties, .. }) = schema.items().map(|i| &i.kind)
    {
        if properties.len() > config.many_fields_threshold {
            suggestions.push("Many fields detected - consider data normalization".to_string());
        }

        let has_id_field = properties
            .keys()
            .any(|key| key.to_lowercase().contains("id"));
        if !has_id_field {
            suggestions.push("Consider adding a unique identifier field".to_string());
        }
    }

    suggestions.push("Data structure looks good for integration".to_string());
    suggestions
}
