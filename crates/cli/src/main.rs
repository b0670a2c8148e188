//! league-onboard - CLI for league onboarding data processing

mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::league::{LeagueValidateArgs, handle_league_validate};
use commands::process::{ProcessArgs, handle_process};

#[derive(Parser)]
#[command(
    name = "league-onboard",
    about = "Process league data files and preview dashboard statistics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse data files, infer schemas, and print the dashboard preview
    Process {
        /// Files to process (CSV or JSON)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Report format: text, json, or yaml
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Include all extracted records in the report
        #[arg(long)]
        records: bool,
    },

    /// League metadata operations
    League {
        #[command(subcommand)]
        command: LeagueCommand,
    },
}

#[derive(Subcommand)]
enum LeagueCommand {
    /// Validate a league metadata JSON document
    Validate {
        /// Path to the league JSON file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Process {
            files,
            format,
            output,
            records,
        } => handle_process(&ProcessArgs {
            files,
            format,
            output,
            include_records: records,
        }),
        Command::League { command } => match command {
            LeagueCommand::Validate { file } => handle_league_validate(&LeagueValidateArgs { file }),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
