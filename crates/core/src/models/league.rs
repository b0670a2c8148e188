//! League metadata model
//!
//! The information collected by the onboarding wizard before any files
//! are uploaded. Field names mirror the wire shape used by the wizard
//! (camelCase).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// League metadata captured during onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueInfo {
    /// League identifier, assigned on creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// League name
    pub name: String,
    /// Sport played in this league
    pub sport: String,
    /// Year or date the league was established
    #[serde(default)]
    pub established: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Public website
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Primary contact email
    pub contact_email: String,
    /// Primary contact name
    pub contact_name: String,
    /// Competitive tier
    pub tier: LeagueTier,
    /// Where the league operates
    pub location: LeagueLocation,
}

/// Competitive tier of a league
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeagueTier {
    /// Fully professional competition
    Professional,
    /// Mixed professional and amateur
    SemiProfessional,
    /// Amateur competition
    Amateur,
    /// Youth competition
    Youth,
}

/// Geographic scope of a league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueLocation {
    /// Country the league operates in
    pub country: String,
    /// Optional region or state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Optional city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}
