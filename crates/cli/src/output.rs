//! Output formatting for CLI

use league_onboarding_core::dashboard::DashboardStats;
use league_onboarding_core::processing::ProcessingResult;

/// Format one processing result for terminal display
pub fn format_result(result: &ProcessingResult) -> String {
    let mut output = String::new();

    if result.success {
        output.push_str(&format!("✅ {}\n", result.file_name));
        output.push_str(&format!(
            "   Detected {} fields, {} records\n",
            result.field_count(),
            result.record_count()
        ));

        if !result.suggestions.is_empty() {
            output.push_str("   Suggestions:\n");
            for suggestion in &result.suggestions {
                output.push_str(&format!("     • {}\n", suggestion));
            }
        }
    } else {
        output.push_str(&format!("⚠️  {}\n", result.file_name));
        if let Some(error) = &result.error {
            output.push_str(&format!("   {}\n", error));
        }
    }

    output
}

/// Format the dashboard summary block
pub fn format_stats(stats: &DashboardStats) -> String {
    let mut output = String::new();

    output.push_str("\nDashboard preview:\n");
    output.push_str(&format!("  Files processed: {}\n", stats.total_files));
    output.push_str(&format!("  Total records: {}\n", stats.total_records));
    output.push_str(&format!("  Total fields: {}\n", stats.total_fields));
    output.push_str(&format!("  Data quality: {}%\n", stats.data_quality));
    output.push_str(&format!("  Complexity: {}/100\n", stats.complexity));
    output.push_str(&format!(
        "  Integration readiness: {}%\n",
        stats.integration_readiness
    ));

    output
}
