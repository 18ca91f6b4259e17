//! Output writers for summary data.
//!
//! This module handles:
//! - Versioned JSON reports (pretty printed)
//! - Bare summary documents, as served over HTTP
//! - Text summaries for terminals

pub mod json;
pub mod report;
pub mod text;

// Re-export main functions
pub use json::{read_report, validate_path, write_report, write_summary};
pub use report::SummaryReport;
pub use text::render_text_summary;
