//! Configuration for schema inference

use serde::{Deserialize, Serialize};

/// Tunables for preview and suggestion generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    /// Number of records kept as the preview slice
    pub preview_rows: usize,

    /// Record count above which the pagination suggestion fires
    pub large_dataset_threshold: usize,

    /// Field count above which the normalization suggestion fires
    pub many_fields_threshold: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            large_dataset_threshold: 1000,
            many_fields_threshold: 20,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for [`InferenceConfig`]
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the number of preview records
    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.config.preview_rows = rows;
        self
    }

    /// Set the large-dataset suggestion threshold
    pub fn large_dataset_threshold(mut self, threshold: usize) -> Self {
        self.config.large_dataset_threshold = threshold;
        self
    }

    /// Set the many-fields suggestion threshold
    pub fn many_fields_threshold(mut self, threshold: usize) -> Self {
        self.config.many_fields_threshold = threshold;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert_eq!(config.preview_rows, 5);
        assert_eq!(config.large_dataset_threshold, 1000);
        assert_eq!(config.many_fields_threshold, 20);
    }

    #[test]
    fn test_builder() {
        let config = InferenceConfig::builder()
            .preview_rows(10)
            .large_dataset_threshold(100)
            .many_fields_threshold(5)
            .build();

        assert_eq!(config.preview_rows, 10);
        assert_eq!(config.large_dataset_threshold, 100);
        assert_eq!(config.many_fields_threshold, 5);
    }
}
