use ratatui::prelude::Stylize;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::tui::{Element, Theme};

/// Progress header: every step title, styled done / current / pending
pub fn view<Msg>(titles: &[&str], current: usize, theme: &Theme) -> Element<Msg> {
    let mut spans = Vec::with_capacity(titles.len() * 2);

    for (index, title) in titles.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" ── ", theme.muted_style()));
        }
        let span = if index < current {
            Span::styled(format!("✓ {}", title), theme.success_style())
        } else if index == current {
            Span::styled(format!("{} {}", index + 1, title), theme.accent_style().bold())
        } else {
            Span::styled(format!("{} {}", index + 1, title), Style::default().fg(theme.overlay0))
        };
        spans.push(span);
    }

    Element::styled_text(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ThemeVariant;

    #[test]
    fn test_marks_completed_steps() {
        let theme = Theme::new(ThemeVariant::Mocha);
        let element: Element<()> = view(&["One", "Two", "Three"], 1, &theme);

        let Element::StyledText { line } = element else {
            panic!("expected a styled line");
        };
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "✓ One ── 2 Two ── 3 Three");
    }
}
