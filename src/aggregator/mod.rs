//! Aggregation of dataset rows into chart-ready views.
//!
//! Every view is an independent pass over the row table:
//! - Timelines keyed by release year or month
//! - Rankings of genres, platforms and developers
//! - Distributions (histogram, scatter sample, play modes)
//!
//! The summary assembler runs all of them against one table.

pub mod distribution;
pub mod ranking;
pub mod schema;
pub mod summary;
pub mod timeline;

// Re-export main types and functions
pub use distribution::{
    main_vs_completionist, mode_counts, playtime_histogram, scatter_rng, PlayMode,
};
pub use ranking::{genre_durations, top_developers, top_genres, top_platforms};
pub use schema::{
    DeveloperCount, GenreCount, GenreDuration, HistogramBin, ModeCount, MonthlyAverage,
    PlatformCount, ScatterPoint, YearTypeCount, YearlyAverage,
};
pub use summary::{build_summary, summarize, DashboardSummary};
pub use timeline::{monthly_averages, yearly_averages, yearly_type_counts};

/// Mean with the empty-bucket policy: no samples means 0
pub(crate) fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
