//! Chart rendering for the dashboard view.
//!
//! Maps each [`SeriesData`] shape onto a ratatui widget: a line chart for
//! the posts sequence, bars for the likes sequence, a scatter plot for
//! posts-vs-likes, a histogram for the minutes distribution, and a
//! multi-series scatter for the Overall comparison. Empty subsets render
//! empty axes rather than failing.

use ratatui::{
    layout::Rect,
    symbols,
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use dash_core::models::ChartKind;
use dash_data::charts::{AppSeries, Histogram, SeriesData};

use crate::themes::Theme;

/// Render the chart for a single-application selection.
pub fn render_chart(
    frame: &mut Frame,
    area: Rect,
    kind: ChartKind,
    series: &SeriesData,
    app_label: &str,
    theme: &Theme,
) {
    let title = format!(" {} for {} ", kind.label(), app_label);
    match series {
        SeriesData::Sequence(points) => match kind {
            ChartKind::PostsPerDay => {
                render_sequence_line(frame, area, &title, points, theme.chart_posts, theme);
            }
            // Likes render as bars; any other sequence falls back to a line.
            ChartKind::LikesPerDay => {
                render_sequence_bars(frame, area, &title, points, theme.chart_likes, theme);
            }
            _ => {
                render_sequence_line(frame, area, &title, points, theme.chart_posts, theme);
            }
        },
        SeriesData::Paired(points) => {
            render_paired_scatter(frame, area, &title, points, theme);
        }
        SeriesData::Distribution(histogram) => {
            render_histogram(frame, area, &title, histogram, theme);
        }
    }
}

/// Render the Overall comparison: one scatter series per application,
/// each in its fixed palette colour, minutes on the y axis.
pub fn render_overall_chart(frame: &mut Frame, area: Rect, series: &[AppSeries], theme: &Theme) {
    // Each series plots against its own record index; the point vectors
    // must outlive the datasets borrowing them.
    let point_sets: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|s| {
            s.points
                .iter()
                .enumerate()
                .map(|(i, (_, minutes))| (i as f64, *minutes))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .zip(point_sets.iter())
        .map(|(s, points)| {
            Dataset::default()
                .name(s.app.clone())
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(theme.app_style(&s.app))
                .data(points)
        })
        .collect();

    let max_x = point_sets
        .iter()
        .map(|p| p.len())
        .max()
        .unwrap_or(0)
        .saturating_sub(1) as f64;
    let max_y = point_sets
        .iter()
        .flatten()
        .map(|(_, y)| *y)
        .fold(0.0_f64, f64::max);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Daily Minutes Spent per App ")
                .border_style(theme.table_border),
        )
        .x_axis(
            Axis::default()
                .title("Users")
                .style(theme.axis)
                .bounds([0.0, max_x.max(1.0)])
                .labels(vec!["0".to_string(), format!("{}", max_x.max(1.0) as u64)]),
        )
        .y_axis(
            Axis::default()
                .title("Minutes")
                .style(theme.axis)
                .bounds(value_bounds(max_y))
                .labels(value_labels(max_y)),
        );

    frame.render_widget(chart, area);
}

// ── Internal renderers ────────────────────────────────────────────────────────

/// Line chart of `(user_id, value)` pairs plotted against row position.
fn render_sequence_line(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    points: &[(String, f64)],
    style: ratatui::style::Style,
    theme: &Theme,
) {
    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, (_, value))| (i as f64, *value))
        .collect();

    let max_x = data.len().saturating_sub(1) as f64;
    let max_y = data.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max);

    let datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(style)
        .data(&data)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(theme.table_border),
        )
        .x_axis(
            Axis::default()
                .title("User")
                .style(theme.axis)
                .bounds([0.0, max_x.max(1.0)])
                .labels(sequence_labels(points)),
        )
        .y_axis(
            Axis::default()
                .style(theme.axis)
                .bounds(value_bounds(max_y))
                .labels(value_labels(max_y)),
        );

    frame.render_widget(chart, area);
}

/// Bar chart of `(user_id, value)` pairs, one bar per user.
fn render_sequence_bars(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    points: &[(String, f64)],
    style: ratatui::style::Style,
    theme: &Theme,
) {
    let labelled: Vec<(String, u64)> = points
        .iter()
        .map(|(user, value)| (bar_label(user), value.round() as u64))
        .collect();
    let data: Vec<(&str, u64)> = labelled
        .iter()
        .map(|(label, value)| (label.as_str(), *value))
        .collect();

    let bars = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(theme.table_border),
        )
        .data(data.as_slice())
        .bar_width(5)
        .bar_gap(1)
        .bar_style(style)
        .value_style(theme.bold)
        .label_style(theme.axis);

    frame.render_widget(bars, area);
}

/// Scatter plot of `(posts, likes)` tuples.
fn render_paired_scatter(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    points: &[(f64, f64)],
    theme: &Theme,
) {
    let max_x = points.iter().map(|(x, _)| *x).fold(0.0_f64, f64::max);
    let max_y = points.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max);

    let datasets = vec![Dataset::default()
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(theme.chart_scatter)
        .data(points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(theme.table_border),
        )
        .x_axis(
            Axis::default()
                .title("Posts Per Day")
                .style(theme.axis)
                .bounds(value_bounds(max_x))
                .labels(value_labels(max_x)),
        )
        .y_axis(
            Axis::default()
                .title("Likes Per Day")
                .style(theme.axis)
                .bounds(value_bounds(max_y))
                .labels(value_labels(max_y)),
        );

    frame.render_widget(chart, area);
}

/// Histogram of the minutes distribution, one bar per bin labelled with
/// the bin's lower bound.
fn render_histogram(frame: &mut Frame, area: Rect, title: &str, histogram: &Histogram, theme: &Theme) {
    let width = histogram.bin_width();
    let labelled: Vec<(String, u64)> = histogram
        .counts
        .iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = histogram.min + width * i as f64;
            (format!("{}", lower.round() as i64), *count)
        })
        .collect();
    let data: Vec<(&str, u64)> = labelled
        .iter()
        .map(|(label, count)| (label.as_str(), *count))
        .collect();

    let bars = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(theme.table_border),
        )
        .data(data.as_slice())
        .bar_width(4)
        .bar_gap(1)
        .bar_style(theme.chart_histogram)
        .value_style(theme.bold)
        .label_style(theme.axis);

    frame.render_widget(bars, area);
}

// ── Axis helpers ──────────────────────────────────────────────────────────────

/// Y-axis bounds with 10% headroom; `[0, 1]` when there is no data.
fn value_bounds(max: f64) -> [f64; 2] {
    if max <= 0.0 {
        [0.0, 1.0]
    } else {
        [0.0, max * 1.1]
    }
}

/// Zero / mid / max tick labels for a value axis.
fn value_labels(max: f64) -> Vec<String> {
    let top = if max <= 0.0 { 1.0 } else { max };
    vec![
        "0".to_string(),
        format!("{}", (top / 2.0).round() as u64),
        format!("{}", top.round() as u64),
    ]
}

/// First and last user ids as x-axis labels for a sequence chart.
fn sequence_labels(points: &[(String, f64)]) -> Vec<String> {
    match points {
        [] => vec![String::new()],
        [only] => vec![only.0.clone()],
        [first, .., last] => vec![first.0.clone(), last.0.clone()],
    }
}

/// Compact bar label derived from a user id.
fn bar_label(user_id: &str) -> String {
    if user_id.len() <= 5 {
        user_id.to_string()
    } else {
        user_id.chars().rev().take(5).collect::<Vec<_>>().into_iter().rev().collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
