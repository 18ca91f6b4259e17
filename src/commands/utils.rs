use anyhow::Result;
use std::path::Path;
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;

/// Validate a summary report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    if report.version != SCHEMA_VERSION {
        println!(
            "⚠ Report schema v{} differs from current v{}",
            report.version, SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Dataset: {}", report.dataset);
    println!("  Rows: {}", report.row_count);
    println!("  Generated: {}", report.generated_at);
    println!("  Years: {}", report.summary.by_year_avg_main_story.len());
    println!("  Scatter Points: {}", report.summary.main_vs_completionist.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("HLTB Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Completion-time analytics over the HowLongToBeat dataset.");
}
