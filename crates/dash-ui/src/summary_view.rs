//! Summary panel and per-user record table for the dashboard view.
//!
//! The summary panel is the textual block of aggregate statistics for the
//! current selection; the record table lists the selected user's rows.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use dash_core::formatting;
use dash_core::models::UsageRecord;
use dash_data::aggregator::SummaryReport;

use crate::themes::Theme;

/// Render the aggregate statistics panel for `app_label` into `area`.
///
/// An empty subset renders zero counts and a "no data" average rather
/// than failing.
pub fn render_summary(
    frame: &mut Frame,
    area: Rect,
    report: &SummaryReport,
    app_label: &str,
    theme: &Theme,
) {
    let lines = summary_lines(report, theme);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Summary for {} ", app_label))
            .border_style(theme.table_border),
    );
    frame.render_widget(paragraph, area);
}

/// The summary panel body as styled label/value lines.
fn summary_lines<'a>(report: &SummaryReport, theme: &'a Theme) -> Vec<Line<'a>> {
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<32}", label), theme.label),
            Span::styled(value, theme.value),
        ])
    };

    vec![
        row(
            "Total Users:",
            formatting::format_count(report.total_users as u64),
        ),
        row(
            "Total Posts per Day:",
            formatting::format_count(report.total_posts),
        ),
        row(
            "Total Likes per Day:",
            formatting::format_count(report.total_likes),
        ),
        row(
            "Total Follows per Day:",
            formatting::format_count(report.total_follows),
        ),
        row(
            "Total Daily Minutes Spent:",
            format!("{} min", formatting::format_minutes(report.total_minutes)),
        ),
        row(
            "Avg Daily Minutes per User:",
            formatting::format_average(report.avg_minutes_per_user),
        ),
    ]
}

/// Render the selected user's records as a bordered table.
///
/// An absent user (empty subset) renders the table frame with a dimmed
/// placeholder row.
pub fn render_user_table(
    frame: &mut Frame,
    area: Rect,
    subset: &[&UsageRecord],
    user_id: &str,
    theme: &Theme,
) {
    let header_cells = ["User", "App", "Posts", "Likes", "Follows", "Minutes"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = if subset.is_empty() {
        vec![Row::new(vec![
            Cell::from("-").style(theme.dim),
            Cell::from("no records").style(theme.dim),
        ])]
    } else {
        subset
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let style = if i % 2 == 0 {
                    theme.table_row
                } else {
                    theme.table_row_alt
                };
                Row::new(vec![
                    Cell::from(record.user_id.clone()),
                    Cell::from(record.app.clone()).style(theme.app_style(&record.app)),
                    Cell::from(formatting::format_count(record.posts_per_day)),
                    Cell::from(formatting::format_count(record.likes_per_day)),
                    Cell::from(formatting::format_count(record.follows_per_day)),
                    Cell::from(format!(
                        "{} ({})",
                        formatting::format_minutes(record.daily_minutes_spent),
                        formatting::format_duration(record.daily_minutes_spent)
                    )),
                ])
                .style(style)
            })
            .collect()
    };

    let widths = [
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Data for User {} ", user_id))
                .border_style(theme.table_border),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render a "no data" placeholder when the store itself is empty.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No usage data found", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "Point --data at a usage CSV or place data.csv in the working directory.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Media Dash "),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
