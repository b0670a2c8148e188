//! Data models shared across the onboarding flow

pub mod league;

pub use league::{LeagueInfo, LeagueLocation, LeagueTier};
