//! Occurrence rankings (genres, platforms, developers) and the
//! per-genre duration profile.

use super::mean;
use super::schema::{DeveloperCount, GenreCount, GenreDuration, PlatformCount};
use crate::dataset::GameRow;
use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Count how often each token occurs
fn count_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> HashMap<&'a str, usize> {
    let mut counter: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counter.entry(token).or_insert(0) += 1;
    }
    counter
}

/// Order by descending count, then by name so ties are stable
fn by_count_then_name(a: (&str, usize), b: (&str, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Rank a counter and keep the first `limit` entries
fn rank(counter: HashMap<&str, usize>, limit: usize) -> Vec<(String, usize)> {
    let mut ranked: Vec<(&str, usize)> = counter.into_iter().collect();
    ranked.sort_by(|a, b| by_count_then_name(*a, *b));
    ranked
        .into_iter()
        .take(limit)
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

/// Most frequent genres
///
/// A row listing several genres counts once for each of them.
pub fn top_genres(rows: &[GameRow], limit: usize) -> Vec<GenreCount> {
    let counter = count_tokens(rows.iter().flat_map(|r| r.genres.iter().map(String::as_str)));
    debug!("Top genres: {} distinct genres", counter.len());

    rank(counter, limit)
        .into_iter()
        .map(|(genre, count)| GenreCount { genre, count })
        .collect()
}

/// Most frequent platforms
pub fn top_platforms(rows: &[GameRow], limit: usize) -> Vec<PlatformCount> {
    let counter = count_tokens(rows.iter().flat_map(|r| r.platforms.iter().map(String::as_str)));
    debug!("Top platforms: {} distinct platforms", counter.len());

    rank(counter, limit)
        .into_iter()
        .map(|(platform, count)| PlatformCount { platform, count })
        .collect()
}

/// Developers with the most entries; rows without a developer are skipped
pub fn top_developers(rows: &[GameRow], limit: usize) -> Vec<DeveloperCount> {
    let counter = count_tokens(
        rows.iter()
            .map(|r| r.developer.trim())
            .filter(|dev| !dev.is_empty()),
    );

    rank(counter, limit)
        .into_iter()
        .map(|(developer, count)| DeveloperCount { developer, count })
        .collect()
}

#[derive(Debug, Default)]
struct GenreAccumulator {
    sum_main: f64,
    count_main: usize,
    sum_sides: f64,
    count_sides: usize,
    sum_comp: f64,
    count_comp: usize,
}

impl GenreAccumulator {
    fn support(&self) -> usize {
        self.count_main + self.count_sides + self.count_comp
    }
}

/// Mean main, main+sides and completionist durations per genre
///
/// **Public** - feeds `genreAvgDurations`
///
/// # Arguments
/// * `rows` - Dataset rows
/// * `min_support` - A genre needs strictly more samples than this
/// * `limit` - Number of genres to keep
///
/// # Returns
/// Admitted genres sorted by descending support
pub fn genre_durations(rows: &[GameRow], min_support: usize, limit: usize) -> Vec<GenreDuration> {
    let mut by_genre: HashMap<&str, GenreAccumulator> = HashMap::new();

    for row in rows {
        for genre in &row.genres {
            let acc = by_genre.entry(genre.as_str()).or_default();
            if let Some(main) = row.main_story {
                acc.sum_main += main;
                acc.count_main += 1;
            }
            if let Some(sides) = row.main_plus_sides {
                acc.sum_sides += sides;
                acc.count_sides += 1;
            }
            if let Some(comp) = row.completionist {
                acc.sum_comp += comp;
                acc.count_comp += 1;
            }
        }
    }

    let mut admitted: Vec<(&str, GenreAccumulator)> = by_genre
        .into_iter()
        .filter(|(_, acc)| acc.support() > min_support)
        .collect();

    debug!("Genre profile: {} genres above support {}", admitted.len(), min_support);

    admitted.sort_by(|a, b| by_count_then_name((a.0, a.1.support()), (b.0, b.1.support())));

    admitted
        .into_iter()
        .take(limit)
        .map(|(genre, acc)| GenreDuration {
            genre: genre.to_string(),
            main: mean(acc.sum_main, acc.count_main),
            main_plus_sides: mean(acc.sum_sides, acc.count_sides),
            completionist: mean(acc.sum_comp, acc.count_comp),
            support: acc.support(),
        })
        .collect()
}
