//! League Onboarding Core - data processing for the onboarding wizard
//!
//! Provides the engine behind the league onboarding flow:
//! - File ingestion (CSV/JSON → ordered records)
//! - Schema inference (per-field type classification, schema assembly)
//! - Per-file processing with captured failures
//! - Dashboard preview statistics
//! - League metadata and upload validation

pub mod dashboard;
pub mod inference;
pub mod ingest;
pub mod models;
pub mod processing;
pub mod validation;

// Re-export commonly used types
pub use dashboard::{DashboardStats, count_schema_fields, recommendations, type_distribution};
pub use inference::{
    InferenceConfig, InferredType, SchemaKind, SchemaNode, build_schema, classify_value,
    column_type, generate_suggestions,
};
pub use ingest::{FileFormat, IngestError, file_stem, parse_records};
pub use processing::{FileProcessor, ProcessingResult};

// Re-export models
pub use models::{LeagueInfo, LeagueLocation, LeagueTier};

// Re-export validation types
pub use validation::{
    FileCategory, LeagueValidationError, UploadValidationError, validate_league_info,
    validate_upload,
};
