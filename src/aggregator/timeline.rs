//! Views keyed by release date: yearly averages, yearly type counts
//! and monthly averages.

use super::mean;
use super::schema::{MonthlyAverage, YearTypeCount, YearlyAverage};
use crate::dataset::{GameRow, ReleaseType};
use crate::utils::config::{MAX_PLAUSIBLE_YEAR, MIN_PLAUSIBLE_YEAR};
use log::debug;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct YearAccumulator {
    sum_main: f64,
    count_main: usize,
    sum_all: f64,
    count_all: usize,
}

/// Mean main-story and all-styles durations per release year
///
/// **Public** - feeds `byYearAvgMainStory`
///
/// Any row with a release year opens a bucket for it, even without
/// durations. Years outside (1970, 2030) are dropped as noise.
///
/// # Returns
/// One entry per year, ascending
pub fn yearly_averages(rows: &[GameRow]) -> Vec<YearlyAverage> {
    let mut by_year: BTreeMap<i32, YearAccumulator> = BTreeMap::new();

    for row in rows {
        let Some(year) = row.release_year else {
            continue;
        };
        let acc = by_year.entry(year).or_default();

        if let Some(main) = row.main_story {
            acc.sum_main += main;
            acc.count_main += 1;
        }
        if let Some(all) = row.all_styles {
            acc.sum_all += all;
            acc.count_all += 1;
        }
    }

    debug!("Yearly averages: {} distinct years", by_year.len());

    by_year
        .into_iter()
        .filter(|(year, _)| *year > MIN_PLAUSIBLE_YEAR && *year < MAX_PLAUSIBLE_YEAR)
        .map(|(year, acc)| YearlyAverage {
            year,
            avg_main_story: mean(acc.sum_main, acc.count_main),
            avg_all_styles: mean(acc.sum_all, acc.count_all),
            count: if acc.count_main > 0 {
                acc.count_main
            } else {
                acc.count_all
            },
        })
        .collect()
}

/// Number of games, DLCs, expansions and other entries per release year
///
/// # Returns
/// One entry per year, ascending, with no year filtering
pub fn yearly_type_counts(rows: &[GameRow]) -> Vec<YearTypeCount> {
    let mut by_year: BTreeMap<i32, YearTypeCount> = BTreeMap::new();

    for row in rows {
        let Some(year) = row.release_year else {
            continue;
        };
        let counts = by_year.entry(year).or_insert_with(|| YearTypeCount {
            year,
            ..Default::default()
        });

        match row.release_type() {
            ReleaseType::Game => counts.game_count += 1,
            ReleaseType::Dlc => counts.dlc_count += 1,
            ReleaseType::Expansion => counts.expansion_count += 1,
            ReleaseType::Other => counts.other_count += 1,
        }
    }

    by_year.into_values().collect()
}

/// Mean all-styles duration per release month
///
/// Always returns twelve entries, months 1 through 12; a month without
/// data reports 0.
pub fn monthly_averages(rows: &[GameRow]) -> Vec<MonthlyAverage> {
    let mut sums = [(0.0_f64, 0_usize); 12];

    for row in rows {
        let (Some(month), Some(all)) = (row.release_month, row.all_styles) else {
            continue;
        };
        if !(1..=12).contains(&month) {
            continue;
        }
        let slot = &mut sums[(month - 1) as usize];
        slot.0 += all;
        slot.1 += 1;
    }

    sums.iter()
        .zip(1u32..)
        .map(|(&(sum, count), month)| MonthlyAverage {
            month,
            avg_all_styles: mean(sum, count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(year: Option<i32>, main: Option<f64>, all: Option<f64>) -> GameRow {
        GameRow {
            release_year: year,
            main_story: main,
            all_styles: all,
            ..Default::default()
        }
    }

    #[test]
    fn test_yearly_averages() {
        let rows = vec![
            row(Some(2010), Some(10.0), Some(15.0)),
            row(Some(2010), Some(20.0), Some(25.0)),
            row(Some(2005), None, Some(8.0)),
            row(None, Some(99.0), Some(99.0)),
        ];

        let years = yearly_averages(&rows);

        assert_eq!(
            years,
            vec![
                YearlyAverage {
                    year: 2005,
                    avg_main_story: 0.0,
                    avg_all_styles: 8.0,
                    count: 1,
                },
                YearlyAverage {
                    year: 2010,
                    avg_main_story: 15.0,
                    avg_all_styles: 20.0,
                    count: 2,
                },
            ]
        );
    }

    #[test]
    fn test_yearly_averages_drops_noise_years() {
        let rows = vec![
            row(Some(1970), Some(1.0), None),
            row(Some(1971), Some(1.0), None),
            row(Some(2029), Some(1.0), None),
            row(Some(2030), Some(1.0), None),
            row(Some(0), Some(1.0), None),
        ];

        let years: Vec<i32> = yearly_averages(&rows).iter().map(|y| y.year).collect();
        assert_eq!(years, vec![1971, 2029]);
    }

    #[test]
    fn test_year_without_durations_reports_zero() {
        let years = yearly_averages(&[row(Some(2000), None, None)]);
        assert_eq!(years.len(), 1);
        assert_eq!(years[0].avg_main_story, 0.0);
        assert_eq!(years[0].count, 0);
    }

    #[test]
    fn test_yearly_type_counts() {
        let typed = |year: i32, kind: &str| GameRow {
            release_year: Some(year),
            kind: kind.to_string(),
            ..Default::default()
        };
        let rows = vec![
            typed(2012, "Game"),
            typed(2012, "dlc"),
            typed(2012, "game"),
            typed(1950, "Expansion"),
            typed(2012, ""),
        ];

        let counts = yearly_type_counts(&rows);

        assert_eq!(
            counts,
            vec![
                YearTypeCount {
                    year: 1950,
                    game_count: 0,
                    dlc_count: 0,
                    expansion_count: 1,
                    other_count: 0,
                },
                YearTypeCount {
                    year: 2012,
                    game_count: 2,
                    dlc_count: 1,
                    expansion_count: 0,
                    other_count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_monthly_averages_always_has_twelve_months() {
        assert_eq!(monthly_averages(&[]).len(), 12);

        let monthly = |month: u32, all: Option<f64>| GameRow {
            release_month: Some(month),
            all_styles: all,
            ..Default::default()
        };
        let rows = vec![
            monthly(3, Some(10.0)),
            monthly(3, Some(20.0)),
            monthly(12, Some(7.5)),
            monthly(5, None),
        ];

        let months = monthly_averages(&rows);

        assert_eq!(months.len(), 12);
        assert_eq!(
            months.iter().map(|m| m.month).collect::<Vec<_>>(),
            (1..=12).collect::<Vec<_>>()
        );
        assert_eq!(months[2].avg_all_styles, 15.0);
        assert_eq!(months[11].avg_all_styles, 7.5);
        assert_eq!(months[4].avg_all_styles, 0.0);
        assert_eq!(months[0].avg_all_styles, 0.0);
    }
}
