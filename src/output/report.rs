//! Versioned report envelope written by the export command.

use crate::aggregator::DashboardSummary;
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A summary plus the metadata needed to interpret it later
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Dataset file the summary was computed from
    pub dataset: String,

    /// Number of rows in the dataset
    pub row_count: usize,

    /// RFC 3339 timestamp of when the report was generated
    pub generated_at: String,

    pub summary: DashboardSummary,
}

impl SummaryReport {
    pub fn new(dataset: impl Into<String>, row_count: usize, summary: DashboardSummary) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            dataset: dataset.into(),
            row_count,
            generated_at: Utc::now().to_rfc3339(),
            summary,
        }
    }
}
