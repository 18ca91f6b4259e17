//! Distribution views: playtime histogram, main-vs-completionist sample
//! and play-mode support counts.

use super::schema::{HistogramBin, ModeCount, ScatterPoint};
use crate::dataset::GameRow;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bucket all-styles durations into half-open bins
///
/// **Public** - feeds `playtimeHistogram`
///
/// # Arguments
/// * `rows` - Dataset rows
/// * `edges` - Ascending bin edges; bin `i` is `[edges[i], edges[i + 1])`
///
/// Only values strictly between 0 and the last edge are considered.
/// A value equal to an edge lands in the bin that starts there.
pub fn playtime_histogram(rows: &[GameRow], edges: &[f64]) -> Vec<HistogramBin> {
    let upper = edges.last().copied().unwrap_or(0.0);
    let mut counts = vec![0_usize; edges.len().saturating_sub(1)];

    let values = rows
        .iter()
        .filter_map(|r| r.all_styles)
        .filter(|v| *v > 0.0 && *v < upper);

    for value in values {
        if let Some(bin) = edges
            .windows(2)
            .position(|w| value >= w[0] && value < w[1])
        {
            counts[bin] += 1;
        }
    }

    edges
        .windows(2)
        .zip(counts)
        .map(|(w, count)| HistogramBin {
            bin_label: format!("{}–{} h", w[0], w[1]),
            count,
        })
        .collect()
}

/// Sample (main story, completionist) pairs for the scatter chart
///
/// **Public** - feeds `mainVsCompletionist`
///
/// # Arguments
/// * `rows` - Dataset rows
/// * `cap` - Maximum number of points to return
/// * `rng` - Random source used only when there are more than `cap` points
///
/// # Returns
/// `min(cap, eligible)` distinct points in dataset order
pub fn main_vs_completionist<R: Rng + ?Sized>(
    rows: &[GameRow],
    cap: usize,
    rng: &mut R,
) -> Vec<ScatterPoint> {
    let points: Vec<ScatterPoint> = rows
        .iter()
        .filter_map(|r| match (r.main_story, r.completionist) {
            (Some(main_story), Some(completionist)) if main_story > 0.0 && completionist > 0.0 => {
                Some(ScatterPoint {
                    main_story,
                    completionist,
                })
            }
            _ => None,
        })
        .collect();

    if points.len() <= cap {
        return points;
    }

    debug!("Sampling {} of {} scatter points", cap, points.len());

    let mut picked = rand::seq::index::sample(rng, points.len(), cap).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| points[i]).collect()
}

/// Random source for the scatter sample
///
/// A fixed seed makes the sample reproducible; without one the generator
/// is seeded from the thread-local entropy source.
pub fn scatter_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Play modes reported in `coopVsSingleCounts`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    SinglePlayer,
    CoOp,
    Versus,
}

impl PlayMode {
    pub const ALL: [PlayMode; 3] = [PlayMode::SinglePlayer, PlayMode::CoOp, PlayMode::Versus];

    pub fn label(self) -> &'static str {
        match self {
            PlayMode::SinglePlayer => "Single Player",
            PlayMode::CoOp => "Co-op",
            PlayMode::Versus => "Versus",
        }
    }

    fn counter(self, row: &GameRow) -> Option<f64> {
        match self {
            PlayMode::SinglePlayer => row.single_player,
            PlayMode::CoOp => row.co_op,
            PlayMode::Versus => row.versus,
        }
    }
}

/// Count rows supporting each play mode (counter present and > 0)
pub fn mode_counts(rows: &[GameRow]) -> Vec<ModeCount> {
    PlayMode::ALL
        .iter()
        .map(|&mode| ModeCount {
            mode: mode.label().to_string(),
            count: rows
                .iter()
                .filter(|r| mode.counter(r).is_some_and(|v| v > 0.0))
                .count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parse_number;
    use crate::utils::config::PLAYTIME_BIN_EDGES;
    use std::collections::HashSet;

    fn with_all_styles(v: f64) -> GameRow {
        GameRow {
            all_styles: Some(v),
            ..Default::default()
        }
    }

    fn pair(main: f64, comp: f64) -> GameRow {
        GameRow {
            main_story: Some(main),
            completionist: Some(comp),
            ..Default::default()
        }
    }

    #[test]
    fn test_histogram_boundary_goes_to_upper_bin() {
        let bins = playtime_histogram(&[with_all_styles(40.0)], &PLAYTIME_BIN_EDGES);

        assert_eq!(bins.len(), 9);
        assert_eq!(bins[4].bin_label, "40–80 h");
        assert_eq!(bins[4].count, 1);
        assert_eq!(bins[3].count, 0);
    }

    #[test]
    fn test_histogram_excludes_out_of_range_values() {
        let rows = vec![
            with_all_styles(0.0),
            with_all_styles(-3.0),
            with_all_styles(1000.0),
            with_all_styles(5000.0),
            with_all_styles(0.5),
            with_all_styles(1.0),
            with_all_styles(999.9),
            GameRow::default(),
        ];

        let bins = playtime_histogram(&rows, &PLAYTIME_BIN_EDGES);
        let total: usize = bins.iter().map(|b| b.count).sum();

        assert_eq!(total, 2);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[8].count, 1);
        assert_eq!(bins[0].bin_label, "1–5 h");
        assert_eq!(bins[8].bin_label, "640–1000 h");
    }

    #[test]
    fn test_sample_below_cap_returns_everything_in_order() {
        let rows = vec![pair(1.0, 2.0), pair(0.0, 5.0), pair(3.0, 4.0), GameRow::default()];
        let mut rng = StdRng::seed_from_u64(1);

        let points = main_vs_completionist(&rows, 500, &mut rng);

        assert_eq!(
            points,
            vec![
                ScatterPoint { main_story: 1.0, completionist: 2.0 },
                ScatterPoint { main_story: 3.0, completionist: 4.0 },
            ]
        );
    }

    #[test]
    fn test_sample_above_cap_has_exact_size_without_duplicates() {
        let rows: Vec<GameRow> = (1..=1200).map(|i| pair(i as f64, i as f64 * 2.0)).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let points = main_vs_completionist(&rows, 500, &mut rng);

        assert_eq!(points.len(), 500);
        let distinct: HashSet<u64> = points.iter().map(|p| p.main_story.to_bits()).collect();
        assert_eq!(distinct.len(), 500);
        assert!(points.windows(2).all(|w| w[0].main_story < w[1].main_story));
    }

    #[test]
    fn test_sample_is_reproducible_with_seed() {
        let rows: Vec<GameRow> = (1..=800).map(|i| pair(i as f64, 1.0)).collect();

        let first = main_vs_completionist(&rows, 10, &mut scatter_rng(Some(9)));
        let second = main_vs_completionist(&rows, 10, &mut scatter_rng(Some(9)));

        assert_eq!(first.len(), 10);
        assert_eq!(first, second);
    }

    #[test]
    fn test_mode_counts() {
        let rows = vec![GameRow {
            single_player: parse_number("0"),
            co_op: parse_number("2"),
            versus: parse_number(""),
            ..Default::default()
        }];

        let modes = mode_counts(&rows);

        assert_eq!(
            modes,
            vec![
                ModeCount { mode: "Single Player".to_string(), count: 0 },
                ModeCount { mode: "Co-op".to_string(), count: 1 },
                ModeCount { mode: "Versus".to_string(), count: 0 },
            ]
        );
    }
}
