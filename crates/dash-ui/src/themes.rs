use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by dash-ui
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_sparkle: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,

    // ── Selectors ────────────────────────────────────────────────────────────
    /// Title of the selector that currently has keyboard focus.
    pub selector_focused: Style,
    /// Title of an unfocused selector.
    pub selector_title: Style,
    /// Unselected option rows.
    pub selector_item: Style,
    /// The currently chosen option row.
    pub selector_selected: Style,

    // ── Charts ───────────────────────────────────────────────────────────────
    /// Axis titles and tick labels.
    pub axis: Style,
    /// Posts-per-day line.
    pub chart_posts: Style,
    /// Likes-per-day bars.
    pub chart_likes: Style,
    /// Posts-vs-likes scatter points.
    pub chart_scatter: Style,
    /// Minutes-spent histogram bars.
    pub chart_histogram: Style,

    // ── Per-app palette ──────────────────────────────────────────────────────
    pub app_instagram: Style,
    pub app_facebook: Style,
    pub app_snapchat: Style,
    pub app_pinterest: Style,
    pub app_tiktok: Style,
    pub app_linkedin: Style,
    pub app_twitter: Style,
    /// Fallback for application labels outside the known set.
    pub app_unknown: Style,

    // ── Table ────────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_border: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
    pub table_total: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            selector_focused: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            selector_title: Style::default().fg(Color::Gray),
            selector_item: Style::default().fg(Color::White),
            selector_selected: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),

            axis: Style::default().fg(Color::Gray),
            chart_posts: Style::default().fg(Color::Red),
            chart_likes: Style::default().fg(Color::Blue),
            chart_scatter: Style::default().fg(Color::Green),
            chart_histogram: Style::default().fg(Color::Magenta),

            app_instagram: Style::default().fg(Color::Red),
            app_facebook: Style::default().fg(Color::Blue),
            app_snapchat: Style::default().fg(Color::Yellow),
            app_pinterest: Style::default().fg(Color::Magenta),
            app_tiktok: Style::default().fg(Color::LightRed),
            app_linkedin: Style::default().fg(Color::Green),
            app_twitter: Style::default().fg(Color::Cyan),
            app_unknown: Style::default().fg(Color::Gray),

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text and bright accent colours so that content
    /// remains legible against a white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            selector_focused: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            selector_title: Style::default().fg(Color::DarkGray),
            selector_item: Style::default().fg(Color::Black),
            selector_selected: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            axis: Style::default().fg(Color::DarkGray),
            chart_posts: Style::default().fg(Color::Red),
            chart_likes: Style::default().fg(Color::Blue),
            chart_scatter: Style::default().fg(Color::Green),
            chart_histogram: Style::default().fg(Color::Magenta),

            app_instagram: Style::default().fg(Color::Red),
            app_facebook: Style::default().fg(Color::Blue),
            app_snapchat: Style::default().fg(Color::Yellow),
            app_pinterest: Style::default().fg(Color::Magenta),
            app_tiktok: Style::default().fg(Color::LightRed),
            app_linkedin: Style::default().fg(Color::Green),
            app_twitter: Style::default().fg(Color::Cyan),
            app_unknown: Style::default().fg(Color::DarkGray),

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),
            table_total: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// High-contrast theme using only the basic ANSI colours, for
    /// terminals without a reliable palette.
    pub fn classic() -> Self {
        let mut theme = Self::dark();
        theme.header = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        theme.header_sparkle = Style::default().fg(Color::White);
        theme.selector_focused = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        theme.selector_selected = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::REVERSED);
        theme.table_header = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        theme.table_total = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        theme
    }

    /// Resolve a theme name from the CLI: `"light"`, `"dark"`, `"classic"`,
    /// or `"auto"` (background detection). Unknown names fall back to the
    /// detected background.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => match detect_background() {
                BackgroundType::Light => Self::light(),
                _ => Self::dark(),
            },
        }
    }

    // ── Lookups ──────────────────────────────────────────────────────────────

    /// The fixed palette style for an application label, falling back to
    /// the default style for labels outside the known set.
    pub fn app_style(&self, app: &str) -> Style {
        match app {
            "Instagram" => self.app_instagram,
            "Facebook" => self.app_facebook,
            "Snapchat" => self.app_snapchat,
            "Pinterest" => self.app_pinterest,
            "TikTok" => self.app_tiktok,
            "LinkedIn" => self.app_linkedin,
            "Twitter" => self.app_twitter,
            _ => self.app_unknown,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
