//! HLTB Dashboard CLI
//!
//! Serves the dashboard summary over HTTP, exports it to JSON,
//! or reads it back from a running server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use hltb_dashboard::commands::{
    display_version, execute_export, execute_fetch, execute_serve, validate_report_file,
    ExportArgs, FetchArgs, ServeArgs,
};
use hltb_dashboard::utils::config::{DEFAULT_BIND_ADDR, DEFAULT_DATASET_PATH};

/// HLTB Dashboard - completion-time analytics
#[derive(Parser, Debug)]
#[command(name = "hltb-dash")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the summary endpoint
    Serve {
        /// Dataset CSV file
        #[arg(short, long, env = "HLTB_DATASET", default_value = DEFAULT_DATASET_PATH)]
        dataset: PathBuf,

        /// Address to listen on
        #[arg(short, long, env = "HLTB_BIND", default_value = DEFAULT_BIND_ADDR)]
        bind: String,

        /// Seed the scatter sample so every response is identical
        #[arg(long, env = "HLTB_SEED")]
        seed: Option<u64>,

        /// Load the dataset at startup instead of on the first request
        #[arg(long)]
        preload: bool,
    },

    /// Compute the summary and write it to a JSON report
    Export {
        /// Dataset CSV file
        #[arg(short, long, env = "HLTB_DATASET", default_value = DEFAULT_DATASET_PATH)]
        dataset: PathBuf,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "summary.json")]
        output: PathBuf,

        /// Seed for the scatter sample
        #[arg(long)]
        seed: Option<u64>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Fetch the summary from a running server
    Fetch {
        /// Server root or full summary URL
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        url: String,

        /// Save the raw summary JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a summary report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Serve {
            dataset,
            bind,
            seed,
            preload,
        } => {
            execute_serve(ServeArgs {
                dataset,
                bind,
                seed,
                preload,
            })?;
        }

        Commands::Export {
            dataset,
            output,
            seed,
            summary,
        } => {
            execute_export(ExportArgs {
                dataset,
                output,
                seed,
                print_summary: summary,
            })?;
        }

        Commands::Fetch { url, output } => {
            execute_fetch(FetchArgs { url, output })?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
