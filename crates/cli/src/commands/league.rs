//! CLI commands for league metadata

use std::fs;
use std::path::PathBuf;

use league_onboarding_core::models::LeagueInfo;
use league_onboarding_core::validation::validate_league_info;

use crate::error::CliError;

/// Arguments for the `league validate` command
pub struct LeagueValidateArgs {
    /// Path to a league metadata JSON document
    pub file: PathBuf,
}

/// Handle the `league validate` command
pub fn handle_league_validate(args: &LeagueValidateArgs) -> Result<(), CliError> {
    let content = fs::read_to_string(&args.file).map_err(|source| CliError::FileRead {
        path: args.file.clone(),
        source,
    })?;

    let league: LeagueInfo =
        serde_json::from_str(&content).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    validate_league_info(&league).map_err(|e| CliError::Validation(e.to_string()))?;

    println!("✅ {} ({}) is valid", league.name, league.sport);
    Ok(())
}
