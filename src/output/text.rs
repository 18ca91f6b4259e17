//! Plain-text rendering of a summary for terminals.

use crate::aggregator::DashboardSummary;

const BAR_WIDTH: usize = 40;

/// Render every view of the summary as aligned text
///
/// **Public** - used by the export and fetch commands
pub fn render_text_summary(summary: &DashboardSummary) -> String {
    let mut lines = Vec::new();

    section(&mut lines, "AVERAGE PLAYTIME BY YEAR");
    for y in &summary.by_year_avg_main_story {
        lines.push(format!(
            "  {:<6} main {:>7.1}h  all {:>7.1}h  ({} entries)",
            y.year, y.avg_main_story, y.avg_all_styles, y.count
        ));
    }

    section(&mut lines, "TOP GENRES");
    let genres: Vec<(&str, usize)> = summary
        .top_genres
        .iter()
        .map(|g| (g.genre.as_str(), g.count))
        .collect();
    bars(&mut lines, &genres);

    section(&mut lines, "TOP PLATFORMS");
    let platforms: Vec<(&str, usize)> = summary
        .top_platforms
        .iter()
        .map(|p| (p.platform.as_str(), p.count))
        .collect();
    bars(&mut lines, &platforms);

    section(&mut lines, "DURATION BY GENRE");
    lines.push(format!(
        "  {:<24} {:>9} {:>11} {:>14} {:>8}",
        "Genre", "Main", "Main+Sides", "Completionist", "Support"
    ));
    for g in &summary.genre_avg_durations {
        lines.push(format!(
            "  {:<24} {:>8.1}h {:>10.1}h {:>13.1}h {:>8}",
            truncate(&g.genre, 24),
            g.main,
            g.main_plus_sides,
            g.completionist,
            g.support
        ));
    }

    section(&mut lines, "PLAYTIME HISTOGRAM (ALL STYLES)");
    let bins: Vec<(&str, usize)> = summary
        .playtime_histogram
        .iter()
        .map(|b| (b.bin_label.as_str(), b.count))
        .collect();
    bars(&mut lines, &bins);

    section(&mut lines, "MAIN STORY VS COMPLETIONIST");
    lines.push(format!("  {} sampled points", summary.main_vs_completionist.len()));
    if !summary.main_vs_completionist.is_empty() {
        let ratio: f64 = summary
            .main_vs_completionist
            .iter()
            .map(|p| p.completionist / p.main_story)
            .sum::<f64>()
            / summary.main_vs_completionist.len() as f64;
        lines.push(format!("  completionist takes {:.2}x the main story on average", ratio));
    }

    section(&mut lines, "RELEASES BY YEAR AND TYPE");
    lines.push(format!(
        "  {:<6} {:>7} {:>7} {:>10} {:>7}",
        "Year", "Game", "DLC", "Expansion", "Other"
    ));
    for y in &summary.year_count_by_type {
        lines.push(format!(
            "  {:<6} {:>7} {:>7} {:>10} {:>7}",
            y.year, y.game_count, y.dlc_count, y.expansion_count, y.other_count
        ));
    }

    section(&mut lines, "PLAY MODES");
    let modes: Vec<(&str, usize)> = summary
        .coop_vs_single_counts
        .iter()
        .map(|m| (m.mode.as_str(), m.count))
        .collect();
    bars(&mut lines, &modes);

    section(&mut lines, "AVERAGE PLAYTIME BY RELEASE MONTH");
    for m in &summary.release_month_averages {
        lines.push(format!("  {:>2}  {:>7.1}h", m.month, m.avg_all_styles));
    }

    section(&mut lines, "TOP DEVELOPERS");
    let developers: Vec<(&str, usize)> = summary
        .top_developers
        .iter()
        .map(|d| (d.developer.as_str(), d.count))
        .collect();
    bars(&mut lines, &developers);

    lines.join("\n")
}

fn section(lines: &mut Vec<String>, title: &str) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("  {}", title));
    lines.push(format!("  {}", "─".repeat(title.chars().count())));
}

/// Horizontal bars scaled to the largest count
fn bars(lines: &mut Vec<String>, entries: &[(&str, usize)]) {
    if entries.is_empty() {
        lines.push("  (no data)".to_string());
        return;
    }

    let max = entries.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);
    for (label, count) in entries {
        let width = count * BAR_WIDTH / max;
        lines.push(format!(
            "  {:<24} {:>7} {}",
            truncate(label, 24),
            count,
            "█".repeat(width)
        ));
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max - 3).collect();
        format!("{}...", kept)
    }
}
