//! Aggregate table view (`--view summary`) for Media Dash.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per
//! application plus a highlighted totals row at the bottom.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use dash_core::formatting;

use crate::themes::Theme;

/// Data for a single row in the aggregate table.
#[derive(Debug, Clone)]
pub struct TableRowData {
    /// Application label, e.g. `"Instagram"`.
    pub app: String,
    /// Count of distinct users for this application.
    pub users: usize,
    /// Summed posts per day across this application's records.
    pub posts: u64,
    /// Summed likes per day.
    pub likes: u64,
    /// Summed follows per day.
    pub follows: u64,
    /// Summed daily minutes spent.
    pub minutes: f64,
    /// Per-row average of daily minutes spent; `None` for no records.
    pub avg_minutes: Option<f64>,
}

/// Aggregated totals across all rows in the table.
#[derive(Debug, Clone)]
pub struct TableTotals {
    /// Distinct users across the whole store.
    pub users: usize,
    /// Total posts per day across all applications.
    pub posts: u64,
    /// Total likes per day across all applications.
    pub likes: u64,
    /// Total follows per day across all applications.
    pub follows: u64,
    /// Total daily minutes spent across all applications.
    pub minutes: f64,
    /// Number of applications (rows) represented.
    pub apps_count: usize,
}

/// Render the per-application aggregate table into `area`.
///
/// The table has one data row per [`TableRowData`] entry, followed by a
/// highlighted totals row, all within a bordered block.
pub fn render_table_view(
    frame: &mut Frame,
    area: Rect,
    rows: &[TableRowData],
    totals: &TableTotals,
    theme: &Theme,
) {
    let header_cells = [
        "App",
        "Users",
        "Posts/Day",
        "Likes/Day",
        "Follows/Day",
        "Minutes",
        "Avg Min/User",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(row.app.clone()).style(theme.app_style(&row.app)),
                Cell::from(formatting::format_count(row.users as u64)),
                Cell::from(formatting::format_count(row.posts)),
                Cell::from(formatting::format_count(row.likes)),
                Cell::from(formatting::format_count(row.follows)),
                Cell::from(formatting::format_minutes(row.minutes)),
                Cell::from(formatting::format_average(row.avg_minutes)),
            ])
            .style(style)
        })
        .collect();

    // Totals row – styled separately to stand out.
    let total_row = Row::new(vec![
        Cell::from("TOTAL").style(theme.table_total),
        Cell::from(formatting::format_count(totals.users as u64)),
        Cell::from(formatting::format_count(totals.posts)),
        Cell::from(formatting::format_count(totals.likes)),
        Cell::from(formatting::format_count(totals.follows)),
        Cell::from(formatting::format_minutes(totals.minutes)),
        Cell::from(format!("{} apps", totals.apps_count)),
    ])
    .style(theme.table_total);

    let mut all_rows = data_rows;
    all_rows.push(total_row);

    let widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(13),
        Constraint::Length(12),
        Constraint::Length(14),
    ];

    let table = Table::new(all_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Usage by App "),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render a "no data" placeholder when there are no applications to show.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No usage data found", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "The source CSV contains no records.",
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
