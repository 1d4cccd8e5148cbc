use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::themes::Theme;

/// Marker placed in front of the chosen option.
const SELECTED_MARKER: &str = "▸ ";
/// Indent for unselected options, same display width as the marker.
const UNSELECTED_INDENT: &str = "  ";

/// A vertical option list standing in for a dropdown.
///
/// One selector is rendered per selection surface (application, user,
/// chart kind); the focused selector receives the Up/Down keys.
pub struct Selector<'a> {
    /// Title shown above the options.
    pub title: &'a str,
    /// All options, in display order.
    pub options: &'a [String],
    /// Index of the chosen option. Ignored when `options` is empty.
    pub selected: usize,
    /// Whether this selector currently has keyboard focus.
    pub focused: bool,
    /// Theme providing the styles.
    pub theme: &'a Theme,
}

impl<'a> Selector<'a> {
    /// Render the selector as a title line, one line per option, and a
    /// trailing blank line. Option labels are truncated to `width`
    /// display columns.
    pub fn to_lines(&self, width: u16) -> Vec<Line<'a>> {
        let title_style = if self.focused {
            self.theme.selector_focused
        } else {
            self.theme.selector_title
        };

        let mut lines = vec![Line::from(Span::styled(self.title, title_style))];

        if self.options.is_empty() {
            lines.push(Line::from(Span::styled("  (none)", self.theme.dim)));
        } else {
            for (index, option) in self.options.iter().enumerate() {
                let is_selected = index == self.selected;
                let marker = if is_selected {
                    SELECTED_MARKER
                } else {
                    UNSELECTED_INDENT
                };
                let style = if is_selected {
                    self.theme.selector_selected
                } else {
                    self.theme.selector_item
                };
                let label = truncate_to_width(option, (width as usize).saturating_sub(2));
                lines.push(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(label, style),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines
    }
}

/// Truncate `text` to at most `max` display columns, appending `…` when
/// anything was cut.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let budget = max.saturating_sub(1);
    for c in text.chars() {
        let next = format!("{out}{c}");
        if next.width() > budget {
            break;
        }
        out = next;
    }
    out.push('…');
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selector_line_count() {
        let theme = Theme::dark();
        let opts = options(&["Overall", "Instagram"]);
        let selector = Selector {
            title: "App",
            options: &opts,
            selected: 0,
            focused: false,
            theme: &theme,
        };
        // Title + 2 options + trailing blank.
        assert_eq!(selector.to_lines(26).len(), 4);
    }

    #[test]
    fn test_selector_marks_selected_option() {
        let theme = Theme::dark();
        let opts = options(&["Overall", "Instagram", "Facebook"]);
        let selector = Selector {
            title: "App",
            options: &opts,
            selected: 1,
            focused: true,
            theme: &theme,
        };
        let lines = selector.to_lines(26);

        assert!(line_text(&lines[2]).starts_with(SELECTED_MARKER));
        assert!(line_text(&lines[1]).starts_with(UNSELECTED_INDENT));
        assert!(line_text(&lines[3]).starts_with(UNSELECTED_INDENT));
    }

    #[test]
    fn test_selector_empty_options_placeholder() {
        let theme = Theme::dark();
        let opts: Vec<String> = vec![];
        let selector = Selector {
            title: "User",
            options: &opts,
            selected: 0,
            focused: false,
            theme: &theme,
        };
        let lines = selector.to_lines(26);
        assert_eq!(lines.len(), 3);
        assert!(line_text(&lines[1]).contains("(none)"));
    }

    #[test]
    fn test_selector_truncates_long_labels() {
        let theme = Theme::dark();
        let opts = options(&["a-very-long-user-identifier-string"]);
        let selector = Selector {
            title: "User",
            options: &opts,
            selected: 0,
            focused: false,
            theme: &theme,
        };
        let lines = selector.to_lines(12);
        let text = line_text(&lines[1]);
        assert!(text.ends_with('…'), "long label must be truncated: {text}");
        assert!(text.width() <= 12);
    }

    #[test]
    fn test_truncate_to_width_short_text_unchanged() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_to_width_exact_fit_unchanged() {
        assert_eq!(truncate_to_width("abcde", 5), "abcde");
    }
}
