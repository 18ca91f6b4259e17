use crate::utils::config::{DEFAULT_BIND_ADDR, DEFAULT_DATASET_PATH};
use std::path::PathBuf;

/// Arguments for the serve command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ServeArgs {
    /// Dataset CSV file
    pub dataset: PathBuf,

    /// Socket address to listen on
    pub bind: String,

    /// Seed for the scatter sample (None = fresh sample per request)
    pub seed: Option<u64>,

    /// Load the dataset before accepting requests
    pub preload: bool,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET_PATH),
            bind: DEFAULT_BIND_ADDR.to_string(),
            seed: None,
            preload: false,
        }
    }
}

/// Arguments for the export command
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Dataset CSV file
    pub dataset: PathBuf,

    /// Output path for the JSON report
    pub output: PathBuf,

    /// Seed for the scatter sample
    pub seed: Option<u64>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET_PATH),
            output: PathBuf::from("summary.json"),
            seed: None,
            print_summary: false,
        }
    }
}

/// Arguments for the fetch command
#[derive(Debug, Clone)]
pub struct FetchArgs {
    /// Server root or full summary URL
    pub url: String,

    /// Optional path to save the raw summary JSON
    pub output: Option<PathBuf>,
}

impl Default for FetchArgs {
    fn default() -> Self {
        Self {
            url: format!("http://{}", DEFAULT_BIND_ADDR),
            output: None,
        }
    }
}
