//! Summary assembler: all ten dashboard views in one document.

use super::distribution::{main_vs_completionist, mode_counts, playtime_histogram};
use super::ranking::{genre_durations, top_developers, top_genres, top_platforms};
use super::schema::{
    DeveloperCount, GenreCount, GenreDuration, HistogramBin, ModeCount, MonthlyAverage,
    PlatformCount, ScatterPoint, YearTypeCount, YearlyAverage,
};
use super::timeline::{monthly_averages, yearly_averages, yearly_type_counts};
use crate::dataset::{DatasetCache, GameRow};
use crate::utils::config::{
    GENRE_MIN_SUPPORT, GENRE_PROFILE_LIMIT, PLAYTIME_BIN_EDGES, SCATTER_SAMPLE_CAP,
    TOP_DEVELOPERS_LIMIT, TOP_GENRES_LIMIT, TOP_PLATFORMS_LIMIT,
};
use crate::utils::error::DatasetError;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// The document served by the summary endpoint
///
/// All ten fields are always present; any of them may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub by_year_avg_main_story: Vec<YearlyAverage>,
    pub top_genres: Vec<GenreCount>,
    pub top_platforms: Vec<PlatformCount>,
    pub genre_avg_durations: Vec<GenreDuration>,
    pub playtime_histogram: Vec<HistogramBin>,
    pub main_vs_completionist: Vec<ScatterPoint>,
    pub year_count_by_type: Vec<YearTypeCount>,
    pub coop_vs_single_counts: Vec<ModeCount>,
    pub release_month_averages: Vec<MonthlyAverage>,
    pub top_developers: Vec<DeveloperCount>,
}

/// Run every aggregation against one row table
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `rows` - Dataset rows
/// * `rng` - Random source for the scatter sample
pub fn build_summary<R: Rng + ?Sized>(rows: &[GameRow], rng: &mut R) -> DashboardSummary {
    let start = Instant::now();

    let summary = DashboardSummary {
        by_year_avg_main_story: yearly_averages(rows),
        top_genres: top_genres(rows, TOP_GENRES_LIMIT),
        top_platforms: top_platforms(rows, TOP_PLATFORMS_LIMIT),
        genre_avg_durations: genre_durations(rows, GENRE_MIN_SUPPORT, GENRE_PROFILE_LIMIT),
        playtime_histogram: playtime_histogram(rows, &PLAYTIME_BIN_EDGES),
        main_vs_completionist: main_vs_completionist(rows, SCATTER_SAMPLE_CAP, rng),
        year_count_by_type: yearly_type_counts(rows),
        coop_vs_single_counts: mode_counts(rows),
        release_month_averages: monthly_averages(rows),
        top_developers: top_developers(rows, TOP_DEVELOPERS_LIMIT),
    };

    debug!(
        "Summarized {} rows in {:.1}ms",
        rows.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    summary
}

/// Load the cached dataset and summarize it
///
/// # Errors
/// Fails with the loader's error when the dataset cannot be loaded
pub fn summarize<R: Rng + ?Sized>(
    cache: &DatasetCache,
    rng: &mut R,
) -> Result<DashboardSummary, DatasetError> {
    let rows = cache.rows()?;
    Ok(build_summary(&rows, rng))
}
