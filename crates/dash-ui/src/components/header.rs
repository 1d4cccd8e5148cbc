use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::themes::Theme;

/// Decorative sparkle string placed either side of the application title.
pub const SPARKLES: &str = "✦ ✧ ✦ ✧";

/// Dashboard header rendering four lines:
///
/// 1. Application title with sparkle decorations (ALL CAPS), centred.
/// 2. A 60-column `=` separator, centred.
/// 3. Current selection in `[ app | chart ]` format, centred.
/// 4. An empty line.
pub struct Header<'a> {
    /// Current application selection label (e.g. "Overall", "Instagram").
    pub app: &'a str,
    /// Current chart-kind label (e.g. "Posts Per Day").
    pub chart: &'a str,
    /// Theme providing colour styles for each part of the header.
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Construct a new header.
    pub fn new(app: &'a str, chart: &'a str, theme: &'a Theme) -> Self {
        Self { app, chart, theme }
    }

    /// Render the header as a `Vec<Line>` containing exactly four lines,
    /// each centred within `width` terminal columns.
    pub fn to_lines(&self, width: u16) -> Vec<Line<'a>> {
        let title = " SOCIAL MEDIA USAGE DASHBOARD ";
        let title_width = SPARKLES.width() * 2 + title.width();
        let separator = "=".repeat(60);

        vec![
            Line::from(vec![
                Span::raw(pad_to_center(title_width, width)),
                Span::styled(SPARKLES, self.theme.header_sparkle),
                Span::styled(title, self.theme.header),
                Span::styled(SPARKLES, self.theme.header_sparkle),
            ]),
            Line::from(vec![
                Span::raw(pad_to_center(separator.width(), width)),
                Span::styled(separator, self.theme.separator),
            ]),
            Line::from(vec![
                Span::raw(pad_to_center(
                    self.app.width() + self.chart.width() + 7,
                    width,
                )),
                Span::styled("[ ", self.theme.label),
                Span::styled(self.app, self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(self.chart, self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            Line::from(""),
        ]
    }
}

/// Leading spaces that centre content of `content_width` display columns
/// within `total_width`. Empty when the content does not fit.
fn pad_to_center(content_width: usize, total_width: u16) -> String {
    let total = total_width as usize;
    if content_width >= total {
        return String::new();
    }
    " ".repeat((total - content_width) / 2)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_header_to_lines_count() {
        let theme = Theme::dark();
        let header = Header::new("Overall", "Posts Per Day", &theme);
        let lines = header.to_lines(120);
        assert_eq!(lines.len(), 4, "header must produce exactly 4 lines");
    }

    #[test]
    fn test_header_title_line_content() {
        let theme = Theme::dark();
        let header = Header::new("Overall", "Posts Per Day", &theme);
        let lines = header.to_lines(120);

        let title_text = line_text(&lines[0]);
        assert!(
            title_text.contains("SOCIAL MEDIA USAGE DASHBOARD"),
            "title line must contain the dashboard title, got: {title_text}"
        );
        assert!(
            title_text.contains(SPARKLES),
            "title line must contain sparkles, got: {title_text}"
        );
    }

    #[test]
    fn test_header_info_line_selection() {
        let theme = Theme::dark();
        let header = Header::new("Instagram", "Daily Time Spent", &theme);
        let lines = header.to_lines(120);

        let info_text = line_text(&lines[2]);
        assert!(info_text.contains("Instagram"));
        assert!(info_text.contains("Daily Time Spent"));
        assert!(
            info_text.contains("[ ") && info_text.contains(" | ") && info_text.contains(" ]"),
            "format must be '[ app | chart ]', got: {info_text}"
        );
    }

    #[test]
    fn test_header_separator_line() {
        let theme = Theme::dark();
        let header = Header::new("Overall", "Posts Per Day", &theme);
        let lines = header.to_lines(120);

        let sep_text = line_text(&lines[1]);
        let trimmed = sep_text.trim_start();
        assert_eq!(trimmed.chars().count(), 60, "separator must be 60 chars");
        assert!(trimmed.chars().all(|c| c == '='));
    }

    #[test]
    fn test_header_centres_within_width() {
        let theme = Theme::dark();
        let header = Header::new("Overall", "Posts Per Day", &theme);
        let lines = header.to_lines(100);

        // The separator is 60 wide: centring in 100 leaves 20 columns.
        let sep_text = line_text(&lines[1]);
        assert!(sep_text.starts_with(&" ".repeat(20)));
    }

    #[test]
    fn test_header_narrow_width_does_not_panic() {
        let theme = Theme::dark();
        let header = Header::new("Overall", "Posts Per Day", &theme);
        let lines = header.to_lines(10);
        assert_eq!(lines.len(), 4);
        // No padding when content overflows the pane.
        assert!(!line_text(&lines[1]).starts_with(' '));
    }

    #[test]
    fn test_header_empty_fourth_line() {
        let theme = Theme::dark();
        let header = Header::new("Overall", "Posts Per Day", &theme);
        let lines = header.to_lines(120);
        assert!(line_text(&lines[3]).is_empty());
    }
}
