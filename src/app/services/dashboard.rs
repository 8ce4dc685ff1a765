//! Terminal dashboard
//!
//! Renders the catalog aggregates as horizontal bar charts. Each chart scales
//! its bars to the largest value it shows, so charts are comparable only
//! within themselves. Rendering returns a string; printing is up to the
//! caller.

use crate::app::services::aggregators::CatalogSummary;
use crate::config::DashboardConfig;
use colored::*;
use std::fmt::Write;

const BAR_CHAR: char = '█';
const NO_DATA: &str = "(no data)";

/// Render one horizontal bar chart
///
/// Bars are scaled so the largest value spans `width` characters. Any
/// positive value gets at least one character. Empty data renders the title
/// followed by a "(no data)" line.
pub fn render_bar_chart(title: &str, data: &[(String, f64)], width: usize) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", title.bright_cyan().bold());

    if data.is_empty() {
        let _ = writeln!(output, "  {}", NO_DATA.dimmed());
        return output;
    }

    let label_width = data
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max_value = data.iter().map(|(_, value)| *value).fold(0.0_f64, f64::max);

    for (label, value) in data {
        let bar = BAR_CHAR.to_string().repeat(bar_length(*value, max_value, width));
        let _ = writeln!(
            output,
            "  {:<label_width$} | {} {}",
            label,
            bar.green(),
            format_value(*value),
            label_width = label_width
        );
    }

    output
}

/// Render every dashboard chart for a summary
pub fn render_dashboard(summary: &CatalogSummary, config: &DashboardConfig) -> String {
    let width = config.bar_width;

    let charts = [
        render_bar_chart(
            "Movies vs Series",
            &[
                ("Movies".to_string(), summary.movies.count as f64),
                ("Series".to_string(), summary.series.count as f64),
            ],
            width,
        ),
        render_bar_chart(
            "Titles by Year Added",
            &series(summary.titles_by_year.iter().map(|y| (y.year.to_string(), y.count))),
            width,
        ),
        render_bar_chart(
            "Titles by Rating",
            &series(summary.titles_by_rating.iter().map(|r| (r.rating.clone(), r.total))),
            width,
        ),
        render_bar_chart(
            "Top Directors",
            &series(summary.top_directors.iter().map(|d| (d.director.clone(), d.count))),
            width,
        ),
        render_bar_chart(
            &format!("Top {} Countries", config.country_limit),
            &series(
                summary
                    .titles_by_country
                    .iter()
                    .take(config.country_limit)
                    .map(|c| (c.country.clone(), c.total)),
            ),
            width,
        ),
        render_bar_chart(
            "Directors as Actors",
            &series(summary.directors_as_actors.iter().map(|d| (d.director.clone(), d.count))),
            width,
        ),
        render_bar_chart(
            "Longest Movies (min)",
            &series(summary.longest_movies.iter().map(|m| (m.title.clone(), m.duration as usize))),
            width,
        ),
        render_bar_chart(
            "Longest Series (seasons)",
            &series(summary.longest_series.iter().map(|s| (s.title.clone(), s.seasons as usize))),
            width,
        ),
    ];

    let mut output = format!("{}\n\n", "Catalog Dashboard".bright_green().bold());
    output.push_str(&charts.join("\n"));
    output
}

fn series<I>(items: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = (String, usize)>,
{
    items
        .into_iter()
        .map(|(label, value)| (label, value as f64))
        .collect()
}

fn bar_length(value: f64, max_value: f64, width: usize) -> usize {
    if value <= 0.0 || max_value <= 0.0 {
        return 0;
    }
    let scaled = (value / max_value * width as f64).round() as usize;
    scaled.clamp(1, width.max(1))
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
