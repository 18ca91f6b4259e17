//! Dataset loading and the row model.
//!
//! This module handles:
//! - Decoding raw CSV cells into typed, optional fields
//! - Reading the CSV file into an ordered row table
//! - Holding that table for the lifetime of the process

pub mod cache;
pub mod loader;
pub mod row;

// Re-export main types
pub use cache::DatasetCache;
pub use loader::{load_rows, parse_rows};
pub use row::{parse_number, parse_whole, split_list, GameRow, ReleaseType};
