//! Export command implementation.
//!
//! The export command:
//! 1. Loads the dataset
//! 2. Runs every aggregation
//! 3. Writes a versioned JSON report

use super::models::ExportArgs;
use crate::aggregator::{build_summary, scatter_rng};
use crate::dataset::load_rows;
use crate::output::{render_text_summary, validate_path, write_report, SummaryReport};
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the export command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Dataset missing or malformed
/// * Report cannot be written
pub fn execute_export(args: ExportArgs) -> Result<SummaryReport> {
    validate_export_args(&args)?;

    let start_time = Instant::now();

    info!("Step 1/3: Loading dataset...");
    let rows = load_rows(&args.dataset)
        .with_context(|| format!("Failed to load dataset {}", args.dataset.display()))?;

    info!("Step 2/3: Aggregating {} rows...", rows.len());
    let summary = build_summary(&rows, &mut scatter_rng(args.seed));

    info!("Step 3/3: Writing report...");
    let report = SummaryReport::new(args.dataset.display().to_string(), rows.len(), summary);
    write_report(&report, &args.output).context("Failed to write summary report")?;

    info!("✓ Report written to: {}", args.output.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("HLTB SUMMARY ({} rows)", report.row_count);
        println!("{}", "=".repeat(80));
        println!("{}", render_text_summary(&report.summary));
        println!("{}", "=".repeat(80));
    }

    info!("Export completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Validate export arguments before doing any work
pub fn validate_export_args(args: &ExportArgs) -> Result<()> {
    if args.dataset.as_os_str().is_empty() {
        anyhow::bail!("Dataset path cannot be empty");
    }

    validate_path(&args.output).context("Invalid output path")?;

    Ok(())
}
