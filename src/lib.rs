//! HLTB Dashboard
//!
//! Completion-time analytics over the HowLongToBeat dataset.
//! The CSV is loaded once, summarized into ten chart-ready views,
//! and served as a single JSON document.
//!
//! This crate provides the core implementation for the
//! `hltb-dash` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! hltb-dash serve --dataset public/hltb_dataset.csv
//! curl http://127.0.0.1:3000/api/hltb/summary
//! ```

pub mod aggregator;
pub mod client;
pub mod commands;
pub mod dataset;
pub mod output;
pub mod server;
pub mod utils;
