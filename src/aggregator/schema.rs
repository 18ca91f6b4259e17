//! Output record definitions for the dashboard views.
//!
//! Field names follow the JSON the dashboard front end reads.

use serde::{Deserialize, Serialize};

/// Mean durations for one release year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyAverage {
    pub year: i32,
    pub avg_main_story: f64,
    pub avg_all_styles: f64,

    /// Main-story samples, or all-styles samples when the year has none
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformCount {
    pub platform: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperCount {
    pub developer: String,
    pub count: usize,
}

/// Mean durations for one genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreDuration {
    pub genre: String,
    pub main: f64,
    pub main_plus_sides: f64,
    pub completionist: f64,

    /// Total number of duration samples behind the three means
    pub support: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    pub bin_label: String,
    pub count: usize,
}

/// One point of the main-story vs completionist scatter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub main_story: f64,
    pub completionist: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearTypeCount {
    pub year: i32,
    pub game_count: usize,
    pub dlc_count: usize,
    pub expansion_count: usize,
    pub other_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeCount {
    pub mode: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAverage {
    pub month: u32,
    pub avg_all_styles: f64,
}
