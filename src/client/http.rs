//! Blocking HTTP client for the summary endpoint.

use crate::aggregator::DashboardSummary;
use crate::server::ErrorBody;
use crate::utils::config::{DEFAULT_HTTP_TIMEOUT, SUMMARY_ROUTE};
use crate::utils::error::ClientError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Client for a dashboard server
pub struct SummaryClient {
    client: Client,
    summary_url: String,
}

impl SummaryClient {
    /// Create a client for the server at `base_url`
    ///
    /// `base_url` may be the server root or the full summary URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_HTTP_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::RequestFailed)?;

        Ok(Self {
            client,
            summary_url: summary_url(base_url.as_ref()),
        })
    }

    pub fn summary_url(&self) -> &str {
        &self.summary_url
    }

    /// Fetch and decode the summary document
    ///
    /// # Errors
    /// * `ClientError::RequestFailed` - connection or transport failure
    /// * `ClientError::Server` - non-2xx status, with the server's message
    /// * `ClientError::InvalidResponse` - body is not a summary document
    pub fn fetch_summary(&self) -> Result<DashboardSummary, ClientError> {
        info!("Fetching summary from: {}", self.summary_url);

        let response = self.client.get(&self.summary_url).send()?;
        let status = response.status();

        debug!("Summary response status: {}", status);

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .map(|body| body.error)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());

            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<DashboardSummary>()
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

/// Resolve the summary URL from a server root or a full URL
fn summary_url(base_url: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    if base.ends_with(SUMMARY_ROUTE) {
        base.to_string()
    } else {
        format!("{}{}", base, SUMMARY_ROUTE)
    }
}
