//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod export;
pub mod fetch;
pub mod models;
pub mod serve;
pub mod utils;

// Re-export main command functions
pub use export::{execute_export, validate_export_args};
pub use fetch::{execute_fetch, validate_fetch_args};
pub use models::{ExportArgs, FetchArgs, ServeArgs};
pub use serve::{execute_serve, validate_serve_args};
pub use utils::{display_version, validate_report_file};
