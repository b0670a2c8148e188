//! Dashboard preview statistics
//!
//! Aggregates a batch of schemas and processing results into the numbers
//! and recommendations shown on the analytics dashboard preview.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::inference::{InferredType, SchemaKind, SchemaNode};
use crate::processing::ProcessingResult;

/// Aggregate statistics over all processed files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of processed files
    pub total_files: usize,
    /// Records extracted across all files
    pub total_records: usize,
    /// Recursive field count across all schemas
    pub total_fields: usize,
    /// Percentage of files processed successfully (0-100)
    pub data_quality: u32,
    /// Structural complexity score (0-100)
    pub complexity: u32,
    /// Combined readiness score (0-100)
    pub integration_readiness: u32,
}

impl DashboardStats {
    /// Compute statistics for a batch of schemas and results.
    ///
    /// `data_quality` is 0 for an empty batch rather than a division
    /// error.
    pub fn compute(schemas: &[SchemaNode], results: &[ProcessingResult]) -> Self {
        let total_records = results.iter().map(ProcessingResult::record_count).sum();
        let total_fields: usize = schemas.iter().map(count_schema_fields).sum();

        let successful = results.iter().filter(|r| r.success).count();
        let data_quality =
            ((successful as f64 / results.len().max(1) as f64) * 100.0).round() as u32;

        let complexity = (total_fields as f64 / 10.0 * 20.0 + schemas.len() as f64 * 15.0)
            .round()
            .min(100.0) as u32;

        let integration_readiness =
            ((data_quality as f64 + (100.0 - complexity as f64 / 2.0)) / 2.0).round() as u32;

        Self {
            total_files: results.len(),
            total_records,
            total_fields,
            data_quality,
            complexity,
            integration_readiness,
        }
    }
}

/// Count the fields a schema describes.
///
/// Objects contribute one per property plus whatever each property
/// contributes; arrays pass through to their item schema; leaves count
/// as one.
pub fn count_schema_fields(node: &SchemaNode) -> usize {
    match &node.kind {
        SchemaKind::Object { properties, .. } => {
            properties.len() + properties.values().map(count_schema_fields).sum::<usize>()
        }
        SchemaKind::Array { items } => count_schema_fields(items),
        SchemaKind::Leaf { .. } => 1,
    }
}

/// Tally declared property types across all schemas.
///
/// Walks object and array nodes; each object property is tallied once.
/// Root node types are not counted.
pub fn type_distribution(schemas: &[SchemaNode]) -> HashMap<InferredType, usize> {
    let mut distribution = HashMap::new();

    fn collect(node: &SchemaNode, distribution: &mut HashMap<InferredType, usize>) {
        match &node.kind {
            SchemaKind::Object { properties, .. } => {
                for property in properties.values() {
                    *distribution.entry(property.node_type()).or_insert(0) += 1;
                    collect(property, distribution);
                }
            }
            SchemaKind::Array { items } => collect(items, distribution),
            SchemaKind::Leaf { .. } => {}
        }
    }

    for schema in schemas {
        collect(schema, &mut distribution);
    }

    distribution
}

/// Derive dashboard recommendations from the computed statistics
pub fn recommendations(stats: &DashboardStats, schemas: &[SchemaNode]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if stats.data_quality < 80 {
        recommendations
            .push("Consider improving data quality by validating field formats".to_string());
    }

    if stats.complexity > 70 {
        recommendations
            .push("Complex data structure detected - consider data normalization".to_string());
    }

    if stats.total_records > 10000 {
        recommendations
            .push("Large dataset - implement pagination for better performance".to_string());
    }

    let has_player_data = schemas
        .iter()
        .any(|schema| schema.name.to_lowercase().contains("player"));
    if !has_player_data {
        recommendations.push(
            "Consider adding player/participant data for comprehensive analytics".to_string(),
        );
    }

    recommendations.push("Data structure is compatible with our analytics platform".to_string());
    recommendations
}
