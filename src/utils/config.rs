//! Configuration and constants for the service and CLI.

use std::time::Duration;

/// Dataset location used when no `--dataset` is given, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "public/hltb_dataset.csv";

/// Address the HTTP server listens on by default
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// The single read-only route exposing the dashboard summary
pub const SUMMARY_ROUTE: &str = "/api/hltb/summary";

/// Message returned to HTTP callers when the summary cannot be produced
pub const SUMMARY_ERROR_MESSAGE: &str = "Failed to load HLTB summary";

/// Default timeout for summary fetches
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Ranking limits
pub const TOP_GENRES_LIMIT: usize = 10;
pub const TOP_PLATFORMS_LIMIT: usize = 10;
pub const TOP_DEVELOPERS_LIMIT: usize = 10;
pub const GENRE_PROFILE_LIMIT: usize = 5;

/// A genre needs strictly more duration samples than this to be profiled
pub const GENRE_MIN_SUPPORT: usize = 50;

/// Maximum number of points in the main-vs-completionist scatter
pub const SCATTER_SAMPLE_CAP: usize = 500;

/// Histogram edges in hours; bins are half-open `[edge[i], edge[i + 1])`
pub const PLAYTIME_BIN_EDGES: [f64; 10] = [1.0, 5.0, 10.0, 20.0, 40.0, 80.0, 160.0, 320.0, 640.0, 1000.0];

// Years outside this open interval are treated as noise in the yearly averages
pub const MIN_PLAUSIBLE_YEAR: i32 = 1970;
pub const MAX_PLAUSIBLE_YEAR: i32 = 2030;
