//! CLI command for processing data files

use std::fs;
use std::path::PathBuf;

use league_onboarding_core::dashboard::{DashboardStats, recommendations};
use league_onboarding_core::inference::SchemaNode;
use league_onboarding_core::processing::{FileProcessor, ProcessingResult};

use crate::error::CliError;
use crate::output::{format_result, format_stats};

/// Arguments for the `process` command
pub struct ProcessArgs {
    /// Files to process, in submission order
    pub files: Vec<PathBuf>,
    /// Output format for the full dump (text, json, yaml)
    pub format: String,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
    /// Include extracted records in the dump
    pub include_records: bool,
}

/// Serializable dump of a whole processing run
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ProcessReport {
    results: Vec<ProcessingResult>,
    stats: DashboardStats,
    recommendations: Vec<String>,
}

/// Handle the `process` command
pub fn handle_process(args: &ProcessArgs) -> Result<(), CliError> {
    let processor = FileProcessor::new();
    let mut results = Vec::with_capacity(args.files.len());

    tracing::debug!(files = args.files.len(), format = %args.format, "process command");
    eprintln!("Processing {} file(s)...", args.files.len());

    // Strictly sequential: each file completes before the next starts
    for path in &args.files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload");

        let result = match fs::read_to_string(path) {
            Ok(content) => processor.process(name, &content),
            Err(source) => {
                return Err(CliError::FileRead {
                    path: path.clone(),
                    source,
                });
            }
        };

        eprint!("{}", format_result(&result));
        results.push(result);
    }

    let schemas: Vec<SchemaNode> = results.iter().filter_map(|r| r.schema.clone()).collect();
    let stats = DashboardStats::compute(&schemas, &results);
    let recommendations = recommendations(&stats, &schemas);

    eprint!("{}", format_stats(&stats));
    eprintln!("Recommendations:");
    for recommendation in &recommendations {
        eprintln!("  • {}", recommendation);
    }

    if args.format == "text" {
        return Ok(());
    }

    let mut report = ProcessReport {
        results,
        stats,
        recommendations,
    };
    if !args.include_records {
        for result in &mut report.results {
            result.records.clear();
        }
    }

    let output_str = match args.format.as_str() {
        "yaml" => serde_yaml::to_string(&report)
            .map_err(|e| CliError::Serialization(e.to_string()))?,
        _ => serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::Serialization(e.to_string()))?,
    };

    if let Some(ref output_path) = args.output {
        fs::write(output_path, &output_str).map_err(|source| CliError::FileWrite {
            path: output_path.clone(),
            source,
        })?;
        eprintln!();
        eprintln!("Report written to: {}", output_path.display());
    } else {
        println!("{}", output_str);
    }

    Ok(())
}
