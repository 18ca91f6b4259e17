//! Typed row model for the HowLongToBeat dataset.
//!
//! Every cell arrives as a string. Decoding happens once, here, so the
//! aggregations only ever see finite numbers or `None`.

use serde::Deserialize;

/// Release type of an entry, classified case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Game,
    Dlc,
    Expansion,
    Other,
}

impl ReleaseType {
    /// Classify the raw `type` column. Unknown or empty values are `Other`.
    pub fn classify(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "game" => Self::Game,
            "dlc" => Self::Dlc,
            "expansion" => Self::Expansion,
            _ => Self::Other,
        }
    }
}

/// Raw CSV record, matched by header name
///
/// **Private** - only used while decoding
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawRecord {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    platform: String,
    genres: String,
    developer: String,
    publisher: String,
    release_date: String,
    release_year: String,
    release_month: String,
    main_story: String,
    main_plus_sides: String,
    completionist: String,
    all_styles: String,
    single_player: String,
    co_op: String,
    versus: String,
}

/// One decoded dataset entry (game, DLC, expansion, ...)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameRow {
    pub id: String,
    pub name: String,

    /// Raw `type` column; see [`GameRow::release_type`]
    pub kind: String,

    /// Trimmed, non-empty platform tokens
    pub platforms: Vec<String>,

    /// Trimmed, non-empty genre tokens
    pub genres: Vec<String>,

    /// Trimmed developer name (may be empty)
    pub developer: String,
    pub publisher: String,
    pub release_date: String,
    pub release_year: Option<i32>,

    /// Always within 1..=12 when present
    pub release_month: Option<u32>,

    // Durations in hours
    pub main_story: Option<f64>,
    pub main_plus_sides: Option<f64>,
    pub completionist: Option<f64>,
    pub all_styles: Option<f64>,

    // Mode participation counters; zero or absent means unsupported
    pub single_player: Option<f64>,
    pub co_op: Option<f64>,
    pub versus: Option<f64>,
}

impl GameRow {
    pub fn release_type(&self) -> ReleaseType {
        ReleaseType::classify(&self.kind)
    }
}

impl From<RawRecord> for GameRow {
    fn from(raw: RawRecord) -> Self {
        Self {
            platforms: split_list(&raw.platform),
            genres: split_list(&raw.genres),
            developer: raw.developer.trim().to_string(),
            release_year: parse_whole(&raw.release_year),
            release_month: parse_whole(&raw.release_month)
                .filter(|m| (1..=12).contains(m))
                .map(|m| m as u32),
            main_story: parse_number(&raw.main_story),
            main_plus_sides: parse_number(&raw.main_plus_sides),
            completionist: parse_number(&raw.completionist),
            all_styles: parse_number(&raw.all_styles),
            single_player: parse_number(&raw.single_player),
            co_op: parse_number(&raw.co_op),
            versus: parse_number(&raw.versus),
            id: raw.id,
            name: raw.name,
            kind: raw.kind,
            publisher: raw.publisher,
            release_date: raw.release_date,
        }
    }
}

/// Decode a numeric cell
///
/// **Public** - the only place malformed numbers are handled
///
/// Empty, unparsable, NaN and infinite values all decode as `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Decode an integral cell such as a year or month
///
/// `"2010"` and `"2010.0"` both decode to 2010; `"2010.5"` is absent.
pub fn parse_whole(raw: &str) -> Option<i32> {
    parse_number(raw)
        .filter(|n| n.fract() == 0.0)
        .filter(|n| *n >= i32::MIN as f64 && *n <= i32::MAX as f64)
        .map(|n| n as i32)
}

/// Split a comma-delimited cell into trimmed, non-empty tokens
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
