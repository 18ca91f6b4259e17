use crate::aggregator::{scatter_rng, summarize, DashboardSummary};
use crate::dataset::DatasetCache;
use crate::utils::config::{SUMMARY_ERROR_MESSAGE, SUMMARY_ROUTE};
use crate::utils::error::DatasetError;
use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared state handed to every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub cache: Arc<DatasetCache>,

    /// Fixed seed for the scatter sample; `None` draws fresh entropy per request
    pub seed: Option<u64>,
}

impl AppState {
    pub fn new(cache: Arc<DatasetCache>) -> Self {
        Self { cache, seed: None }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    fn summarize(&self) -> Result<DashboardSummary, DatasetError> {
        summarize(&self.cache, &mut scatter_rng(self.seed))
    }
}

/// JSON body returned when the summary cannot be produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(SUMMARY_ROUTE, get(summary_handler))
        .with_state(state)
}

/// `GET /api/hltb/summary`
///
/// The cause of a failure is logged, never sent to the caller.
pub async fn summary_handler(State(state): State<AppState>) -> Response {
    let outcome = tokio::task::spawn_blocking(move || state.summarize()).await;

    match outcome {
        Ok(Ok(summary)) => Json(summary).into_response(),
        Ok(Err(err)) => {
            error!("Failed to build summary: {}", err);
            error_response()
        }
        Err(err) => {
            error!("Summary task did not complete: {}", err);
            error_response()
        }
    }
}

fn error_response() -> Response {
    let body = ErrorBody {
        error: SUMMARY_ERROR_MESSAGE.to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Bind `addr` and serve until Ctrl-C
///
/// **Public** - used by the serve command
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let local = listener.local_addr().context("Failed to read bound address")?;
    info!("Serving summary on http://{}{}", local, SUMMARY_ROUTE);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(err) => {
            // Without a signal handler the server runs until killed
            warn!("Cannot listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
