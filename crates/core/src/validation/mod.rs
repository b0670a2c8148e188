//! Input validation for the onboarding flow
//!
//! Validates caller-supplied metadata and upload descriptors before the
//! engine touches any file content.

pub mod league;
pub mod upload;

pub use league::{LeagueValidationError, validate_league_info};
pub use upload::{FileCategory, MAX_UPLOAD_SIZE, UploadValidationError, validate_upload};
