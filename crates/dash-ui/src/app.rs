//! Main application state and TUI event loop for Media Dash.
//!
//! [`App`] owns the theme, the immutable record store, and the three
//! selection surfaces (application, user, chart kind). Every key press
//! triggers one synchronous recomputation pass through the filter,
//! aggregation and chart pipeline; there is no background work.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use dash_core::models::{AppSelection, ChartKind};
use dash_data::store::RecordStore;
use dash_data::{aggregator, charts, export, filter};

use crate::chart_view;
use crate::components::header::Header;
use crate::components::selector::Selector;
use crate::summary_view;
use crate::table_view::{self, TableRowData, TableTotals};
use crate::themes::Theme;

// ── Focus ─────────────────────────────────────────────────────────────────────

/// Which selector currently receives the Up/Down keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    AppSelect,
    UserSelect,
    ChartSelect,
}

// ── StatusLine ────────────────────────────────────────────────────────────────

/// Transient feedback shown at the bottom of the dashboard (export
/// results), replaced by the key hints when absent.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusLine {
    Info(String),
    Error(String),
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the Media Dash TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// The immutable record store, loaded once at startup.
    store: RecordStore,
    /// Index into [`AppSelection::ALL`].
    app_idx: usize,
    /// Index into the current application's user list.
    user_idx: usize,
    /// Index into [`ChartKind::ALL`].
    chart_idx: usize,
    /// Selector with keyboard focus.
    focus: Focus,
    /// Directory exported CSV files are written to.
    export_dir: PathBuf,
    /// Transient status message, `None` shows the key hints.
    status: Option<StatusLine>,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// Construct a new application with the given configuration.
    pub fn new(
        theme_name: &str,
        store: RecordStore,
        initial_app: AppSelection,
        initial_chart: ChartKind,
        export_dir: PathBuf,
    ) -> Self {
        let app_idx = AppSelection::ALL
            .iter()
            .position(|s| *s == initial_app)
            .unwrap_or(0);
        let chart_idx = ChartKind::ALL
            .iter()
            .position(|k| *k == initial_chart)
            .unwrap_or(0);

        Self {
            theme: Theme::from_name(theme_name),
            store,
            app_idx,
            user_idx: 0,
            chart_idx,
            focus: Focus::AppSelect,
            export_dir,
            status: None,
            should_quit: false,
        }
    }

    // ── Selection accessors ───────────────────────────────────────────────────

    /// The current application selection.
    pub fn selection(&self) -> AppSelection {
        AppSelection::ALL[self.app_idx]
    }

    /// The current chart kind.
    pub fn chart_kind(&self) -> ChartKind {
        ChartKind::ALL[self.chart_idx]
    }

    /// Distinct user ids scoped to the current application selection.
    pub fn current_users(&self) -> Vec<String> {
        self.store.user_ids(&self.selection())
    }

    /// The currently selected user id, if the selection has any users.
    pub fn selected_user(&self) -> Option<String> {
        self.current_users().get(self.user_idx).cloned()
    }

    /// The selector that currently has focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The current status line, if any.
    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    // ── Event handling ────────────────────────────────────────────────────────

    /// Apply a single key event to the application state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Char('e') | KeyCode::Char('E') => self.export_current(),
            _ => {}
        }
    }

    /// Move focus to the next or previous selector.
    ///
    /// The user and chart selectors only apply to a single-application
    /// view; under Overall the application selector keeps focus.
    fn cycle_focus(&mut self, forward: bool) {
        if self.selection() == AppSelection::Overall {
            self.focus = Focus::AppSelect;
            return;
        }
        self.focus = match (self.focus, forward) {
            (Focus::AppSelect, true) => Focus::UserSelect,
            (Focus::UserSelect, true) => Focus::ChartSelect,
            (Focus::ChartSelect, true) => Focus::AppSelect,
            (Focus::AppSelect, false) => Focus::ChartSelect,
            (Focus::UserSelect, false) => Focus::AppSelect,
            (Focus::ChartSelect, false) => Focus::UserSelect,
        };
    }

    /// Step the focused selector by `delta`, wrapping at the ends.
    fn move_selection(&mut self, delta: i64) {
        match self.focus {
            Focus::AppSelect => {
                self.app_idx = step_wrapping(self.app_idx, delta, AppSelection::ALL.len());
                // A new application scopes a new user list.
                self.user_idx = 0;
                self.status = None;
                if self.selection() == AppSelection::Overall {
                    self.focus = Focus::AppSelect;
                }
            }
            Focus::UserSelect => {
                let count = self.current_users().len();
                if count > 0 {
                    self.user_idx = step_wrapping(self.user_idx, delta, count);
                    self.status = None;
                }
            }
            Focus::ChartSelect => {
                self.chart_idx = step_wrapping(self.chart_idx, delta, ChartKind::ALL.len());
            }
        }
    }

    /// Export the currently selected user's records to the export
    /// directory. Failures surface on the status line, never as a panic.
    fn export_current(&mut self) {
        let selection = self.selection();
        let AppSelection::App(app) = selection else {
            self.status = Some(StatusLine::Error(
                "Select an application before exporting".to_string(),
            ));
            return;
        };
        let Some(user_id) = self.selected_user() else {
            self.status = Some(StatusLine::Error("No user to export".to_string()));
            return;
        };

        let subset = filter::filter_by_app(self.store.records(), &selection);
        let user_subset = filter::filter_by_user(&subset, &user_id);
        if user_subset.is_empty() {
            self.status = Some(StatusLine::Error("No records to export".to_string()));
            return;
        }

        match export::write_export(&self.export_dir, app.label(), &user_id, &user_subset) {
            Ok(path) => {
                self.status = Some(StatusLine::Info(format!("Exported {}", path.display())));
            }
            Err(e) => {
                tracing::warn!("export failed: {}", e);
                self.status = Some(StatusLine::Error(format!("Export failed: {}", e)));
            }
        }
    }

    // ── Public event loops ────────────────────────────────────────────────────

    /// Run the interactive dashboard until `q` / `Ctrl+C`.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout; each key press
    /// is handled before the next frame is drawn, so interactions are
    /// serialized by construction.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the static per-application table view, then wait for `q` /
    /// `Ctrl+C`.
    pub fn run_table(self, rows: Vec<TableRowData>, totals: TableTotals) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                if rows.is_empty() {
                    table_view::render_no_data(frame, area, &self.theme);
                } else {
                    table_view::render_table_view(frame, area, &rows, &totals, &self.theme);
                }
            })?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break;
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        _ => {}
                    }
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        if self.store.is_empty() {
            summary_view::render_no_data(frame, area, &self.theme);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(40)])
            .split(area);

        self.render_sidebar(frame, chunks[0]);
        self.render_main(frame, chunks[1]);
    }

    /// Sidebar: the three selectors plus key hints.
    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let selection = self.selection();
        let width = area.width.saturating_sub(2);

        let app_options: Vec<String> = AppSelection::ALL
            .iter()
            .map(|s| s.label().to_string())
            .collect();
        let users = self.current_users();
        let chart_options: Vec<String> = ChartKind::ALL
            .iter()
            .map(|k| k.label().to_string())
            .collect();

        let mut lines = Selector {
            title: "Analysis based on App",
            options: &app_options,
            selected: self.app_idx,
            focused: self.focus == Focus::AppSelect,
            theme: &self.theme,
        }
        .to_lines(width);

        if selection != AppSelection::Overall {
            lines.extend(
                Selector {
                    title: "User ID",
                    options: &users,
                    selected: self.user_idx,
                    focused: self.focus == Focus::UserSelect,
                    theme: &self.theme,
                }
                .to_lines(width),
            );
            lines.extend(
                Selector {
                    title: "Graph",
                    options: &chart_options,
                    selected: self.chart_idx,
                    focused: self.focus == Focus::ChartSelect,
                    theme: &self.theme,
                }
                .to_lines(width),
            );
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Media Analysis ")
                .border_style(self.theme.table_border),
        );
        frame.render_widget(paragraph, area);
    }

    /// Main pane: header, summary, chart (and user table for a single
    /// application), status line.
    fn render_main(&self, frame: &mut Frame, area: Rect) {
        let selection = self.selection();
        let subset = filter::filter_by_app(self.store.records(), &selection);
        let report = aggregator::summarize(&subset);

        match selection {
            AppSelection::Overall => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(4),
                        Constraint::Length(8),
                        Constraint::Min(8),
                        Constraint::Length(1),
                    ])
                    .split(area);

                self.render_header(frame, chunks[0]);
                summary_view::render_summary(
                    frame,
                    chunks[1],
                    &report,
                    selection.label(),
                    &self.theme,
                );
                let series = charts::build_overall_series(self.store.records());
                chart_view::render_overall_chart(frame, chunks[2], &series, &self.theme);
                self.render_status(frame, chunks[3]);
            }
            AppSelection::App(_) => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(4),
                        Constraint::Length(8),
                        Constraint::Length(4),
                        Constraint::Min(8),
                        Constraint::Length(1),
                    ])
                    .split(area);

                self.render_header(frame, chunks[0]);
                summary_view::render_summary(
                    frame,
                    chunks[1],
                    &report,
                    selection.label(),
                    &self.theme,
                );

                let user_id = self.selected_user().unwrap_or_default();
                let user_subset = filter::filter_by_user(&subset, &user_id);
                summary_view::render_user_table(
                    frame,
                    chunks[2],
                    &user_subset,
                    &user_id,
                    &self.theme,
                );

                let series = charts::build_chart_data(&subset, self.chart_kind());
                chart_view::render_chart(
                    frame,
                    chunks[3],
                    self.chart_kind(),
                    &series,
                    selection.label(),
                    &self.theme,
                );
                self.render_status(frame, chunks[4]);
            }
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Header::new(
            self.selection().label(),
            self.chart_kind().label(),
            &self.theme,
        );
        frame.render_widget(Paragraph::new(header.to_lines(area.width)), area);
    }

    /// Status line: export feedback when present, key hints otherwise.
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(StatusLine::Info(msg)) => Line::from(Span::styled(msg.clone(), self.theme.success)),
            Some(StatusLine::Error(msg)) => Line::from(Span::styled(msg.clone(), self.theme.error)),
            None => Line::from(Span::styled(
                "Tab: focus  ↑/↓: select  e: export CSV  q: quit",
                self.theme.dim,
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Step `index` by `delta` within `len`, wrapping at both ends.
fn step_wrapping(index: usize, delta: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i64;
    ((index as i64 + delta).rem_euclid(len)) as usize
}

// ── Tests ──────────────────────────────────────────────────────────────────────
