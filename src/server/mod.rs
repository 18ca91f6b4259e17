//! HTTP endpoint serving the dashboard summary.
//!
//! One read-only route, no parameters. Loading and aggregation run on
//! the blocking pool; the handler only moves the result into JSON.

pub mod routes;

// Re-export main types and functions
pub use routes::{router, serve, summary_handler, AppState, ErrorBody};
