//! Fetch command implementation.
//!
//! Reads the summary from a running server and prints it as text.

use super::models::FetchArgs;
use crate::client::SummaryClient;
use crate::output::{render_text_summary, write_summary};
use anyhow::{Context, Result};
use log::info;

/// Execute the fetch command
///
/// **Public** - main entry point called from main.rs
pub fn execute_fetch(args: FetchArgs) -> Result<()> {
    validate_fetch_args(&args)?;

    let client = SummaryClient::new(&args.url).context("Failed to create HTTP client")?;

    let summary = client
        .fetch_summary()
        .with_context(|| format!("Failed to fetch summary from {}", client.summary_url()))?;

    if let Some(path) = &args.output {
        write_summary(&summary, path).context("Failed to write summary JSON")?;
        info!("✓ Summary written to: {}", path.display());
    }

    println!("{}", render_text_summary(&summary));

    Ok(())
}

/// Validate fetch arguments
pub fn validate_fetch_args(args: &FetchArgs) -> Result<()> {
    if args.url.trim().is_empty() {
        anyhow::bail!("Server URL cannot be empty");
    }

    if !args.url.starts_with("http://") && !args.url.starts_with("https://") {
        anyhow::bail!("Server URL must start with http:// or https://");
    }

    Ok(())
}
