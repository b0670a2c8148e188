//! League metadata validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::LeagueInfo;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Errors from league metadata validation
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LeagueValidationError {
    /// One or more required fields are empty
    #[error("Missing required fields: {0}")]
    MissingFields(String),

    /// Contact email does not look like an email address
    #[error("Invalid email format")]
    InvalidEmail,
}

/// Validate league metadata before it is accepted.
///
/// Name, sport, contact email and contact name are required; the contact
/// email must match the same shape the inference engine recognizes.
pub fn validate_league_info(league: &LeagueInfo) -> Result<(), LeagueValidationError> {
    let required = [
        ("name", &league.name),
        ("sport", &league.sport),
        ("contactEmail", &league.contact_email),
        ("contactName", &league.contact_name),
    ];

    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();

    if !missing.is_empty() {
        return Err(LeagueValidationError::MissingFields(missing.join(", ")));
    }

    if !EMAIL_REGEX.is_match(&league.contact_email) {
        return Err(LeagueValidationError::InvalidEmail);
    }

    Ok(())
}
