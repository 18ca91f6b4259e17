//! Serve command implementation.
//!
//! Builds the dataset cache, optionally warms it, and runs the HTTP
//! server on a multi-threaded tokio runtime until Ctrl-C.

use super::models::ServeArgs;
use crate::dataset::DatasetCache;
use crate::server::{serve, AppState};
use anyhow::{Context, Result};
use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;

/// Execute the serve command
///
/// **Public** - main entry point called from main.rs
pub fn execute_serve(args: ServeArgs) -> Result<()> {
    let addr = validate_serve_args(&args)?;

    let cache = Arc::new(DatasetCache::new(&args.dataset));

    if args.preload {
        let rows = cache.rows().context("Failed to preload dataset")?;
        info!("Preloaded {} rows from {}", rows.len(), args.dataset.display());
    } else if !args.dataset.exists() {
        warn!(
            "Dataset {} does not exist yet; requests will fail until it does",
            args.dataset.display()
        );
    }

    if let Some(seed) = args.seed {
        info!("Scatter sample seeded with {}", seed);
    }

    let state = AppState::new(cache).with_seed(args.seed);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(serve(addr, state))
}

/// Validate serve arguments
///
/// # Returns
/// The parsed listen address
pub fn validate_serve_args(args: &ServeArgs) -> Result<SocketAddr> {
    if args.dataset.as_os_str().is_empty() {
        anyhow::bail!("Dataset path cannot be empty");
    }

    args.bind
        .parse::<SocketAddr>()
        .with_context(|| format!("Invalid bind address: {}", args.bind))
}
