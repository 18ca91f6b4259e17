use hltb_dashboard::aggregator::{
    build_summary, genre_durations, main_vs_completionist, monthly_averages, playtime_histogram,
    top_developers, top_genres, top_platforms, yearly_averages, YearlyAverage,
};
use hltb_dashboard::dataset::{parse_rows, GameRow};
use hltb_dashboard::utils::config::{
    GENRE_MIN_SUPPORT, GENRE_PROFILE_LIMIT, PLAYTIME_BIN_EDGES, SCATTER_SAMPLE_CAP,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

const HEADER: &str = "id,name,type,platform,genres,developer,publisher,release_date,release_year,release_month,main_story,main_plus_sides,completionist,all_styles,single_player,co_op,versus";

fn rows_from(lines: &[&str]) -> Vec<GameRow> {
    let csv = format!("{}\n{}\n", HEADER, lines.join("\n"));
    parse_rows(csv.as_bytes()).unwrap()
}

/// A larger synthetic table with many genres, platforms and developers
fn synthetic_rows(n: usize) -> Vec<GameRow> {
    let genres = ["Action", "RPG", "Puzzle", "Strategy", "Shooter", "Racing", "Sports"];
    let platforms = ["PC", "PS4", "Switch", "Xbox One", "PS5", "Mobile", "Wii", "GBA", "DS", "3DS", "Vita", "N64"];
    (0..n)
        .map(|i| GameRow {
            name: format!("Game {}", i),
            kind: ["game", "dlc", "expansion", "mod"][i % 4].to_string(),
            genres: vec![genres[i % genres.len()].to_string(), genres[(i * 3) % genres.len()].to_string()],
            platforms: vec![platforms[i % platforms.len()].to_string()],
            developer: format!("Studio {}", i % 13),
            release_year: Some(1960 + (i % 80) as i32),
            release_month: Some((i % 12) as u32 + 1),
            main_story: Some((i % 90) as f64 + 0.5),
            main_plus_sides: if i % 3 == 0 { None } else { Some((i % 120) as f64) },
            completionist: Some((i % 300) as f64),
            all_styles: Some((i % 1500) as f64),
            single_player: Some((i % 2) as f64),
            co_op: Some((i % 3) as f64),
            versus: None,
            ..Default::default()
        })
        .collect()
}

#[test]
fn test_yearly_average_example() {
    let rows = rows_from(&[
        "1,A,game,PC,RPG,Dev,Pub,,2010,,10,,,15,,,",
        "2,B,game,PC,RPG,Dev,Pub,,2010,,20,,,25,,,",
    ]);

    assert_eq!(
        yearly_averages(&rows),
        vec![YearlyAverage {
            year: 2010,
            avg_main_story: 15.0,
            avg_all_styles: 20.0,
            count: 2,
        }]
    );
}

#[test]
fn test_multi_assignment_example() {
    let rows = rows_from(&[
        "1,A,game,PC,\"RPG, Action\",Dev,Pub,,,,,,,,,,",
        "2,B,game,PC,Action,Dev,Pub,,,,,,,,,,",
    ]);

    let genres = top_genres(&rows, 10);
    let count_of = |name: &str| genres.iter().find(|g| g.genre == name).map(|g| g.count);

    assert_eq!(count_of("Action"), Some(2));
    assert_eq!(count_of("RPG"), Some(1));
}

#[test]
fn test_malformed_numbers_are_absent_not_errors() {
    let rows = rows_from(&["1,A,game,PC,RPG,Dev,Pub,,20x0,13,ten,,NaN,-,,,"]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].release_year, None);
    assert_eq!(rows[0].release_month, None);
    assert_eq!(rows[0].main_story, None);
    assert_eq!(rows[0].completionist, None);
    assert_eq!(rows[0].all_styles, None);
    assert!(yearly_averages(&rows).is_empty());
}

#[test]
fn test_output_caps_hold_for_large_tables() {
    let rows = synthetic_rows(2000);
    let mut rng = StdRng::seed_from_u64(11);

    let summary = build_summary(&rows, &mut rng);

    assert!(summary.top_genres.len() <= 10);
    assert_eq!(summary.top_platforms.len(), 10);
    assert_eq!(summary.top_developers.len(), 10);
    assert!(summary.genre_avg_durations.len() <= 5);
    assert_eq!(summary.main_vs_completionist.len(), SCATTER_SAMPLE_CAP);
    assert_eq!(summary.release_month_averages.len(), 12);
    assert_eq!(summary.coop_vs_single_counts.len(), 3);
    assert!(summary
        .by_year_avg_main_story
        .iter()
        .all(|y| y.year > 1970 && y.year < 2030));

    // Type counts are not year-filtered
    let type_total: usize = summary
        .year_count_by_type
        .iter()
        .map(|y| y.game_count + y.dlc_count + y.expansion_count + y.other_count)
        .sum();
    assert_eq!(type_total, 2000);
}

#[test]
fn test_rankings_are_descending() {
    let rows = synthetic_rows(500);

    let platforms = top_platforms(&rows, 10);
    assert!(platforms.windows(2).all(|w| w[0].count >= w[1].count));

    let developers = top_developers(&rows, 10);
    assert!(developers.windows(2).all(|w| w[0].count >= w[1].count));

    let profile = genre_durations(&rows, GENRE_MIN_SUPPORT, GENRE_PROFILE_LIMIT);
    assert!(!profile.is_empty());
    assert!(profile.iter().all(|g| g.support > GENRE_MIN_SUPPORT));
    assert!(profile.windows(2).all(|w| w[0].support >= w[1].support));
}

#[test]
fn test_histogram_total_bounded_by_in_range_values() {
    let rows = synthetic_rows(3000);

    let in_range = rows
        .iter()
        .filter_map(|r| r.all_styles)
        .filter(|v| *v > 0.0 && *v < 1000.0)
        .count();
    let total: usize = playtime_histogram(&rows, &PLAYTIME_BIN_EDGES)
        .iter()
        .map(|b| b.count)
        .sum();

    assert!(total <= in_range);
    assert!(total <= rows.len());
}

#[test]
fn test_sample_size_equals_eligible_count_below_cap() {
    let rows = synthetic_rows(300);
    let eligible = rows
        .iter()
        .filter(|r| r.main_story.unwrap_or(0.0) > 0.0 && r.completionist.unwrap_or(0.0) > 0.0)
        .count();

    for seed in 0..5 {
        let points = main_vs_completionist(&rows, SCATTER_SAMPLE_CAP, &mut StdRng::seed_from_u64(seed));
        assert_eq!(points.len(), eligible);
    }
}

#[test]
fn test_monthly_averages_sparse_data() {
    let rows = rows_from(&["1,A,game,PC,RPG,Dev,Pub,,2001,6,,,,12,,,"]);

    let months = monthly_averages(&rows);

    assert_eq!(months.len(), 12);
    assert_eq!(months[5].month, 6);
    assert_eq!(months[5].avg_all_styles, 12.0);
    assert_eq!(months.iter().filter(|m| m.avg_all_styles == 0.0).count(), 11);
}
