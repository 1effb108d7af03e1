use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::Theme;

/// Render a bordered single-line input with its label as the title
pub fn render_text_input(
    frame: &mut Frame,
    theme: &Theme,
    label: &str,
    value: &str,
    cursor_pos: usize,
    focused: bool,
    area: Rect,
) {
    let border_style = if focused {
        Style::default().fg(theme.lavender)
    } else {
        Style::default().fg(theme.overlay0)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(label.to_string());

    // Keep the cursor inside the visible window
    let visible_width = area.width.saturating_sub(3) as usize;
    let chars: Vec<char> = value.chars().collect();
    let cursor_pos = cursor_pos.min(chars.len());
    let start = cursor_pos.saturating_sub(visible_width);
    let end = (start + visible_width).min(chars.len());

    let line = if focused {
        let before: String = chars[start..cursor_pos].iter().collect();
        let at: String = chars.get(cursor_pos).map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
        let after: String = if cursor_pos < end { chars[cursor_pos + 1..end].iter().collect() } else { String::new() };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(before, Style::default().fg(theme.text)),
            Span::styled(at, theme.cursor_style()),
            Span::styled(after, Style::default().fg(theme.text)),
        ])
    } else {
        let visible: String = chars[start..end].iter().collect();
        Line::from(vec![Span::raw(" "), Span::styled(visible, Style::default().fg(theme.text))])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
