use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
};

use super::layout::inset;
use crate::tui::Theme;

/// Area the faded child is drawn into: low levels shrink it towards the centre
pub fn scaled_area(area: Rect, level: u8) -> Rect {
    let missing = 100u16.saturating_sub(level as u16);
    inset(area, missing / 20, missing / 50)
}

/// Wash out whatever was drawn into `area` according to the fade level
pub fn apply_fade(frame: &mut Frame, theme: &Theme, area: Rect, level: u8) {
    if level >= 100 {
        return;
    }
    let style = if level < 40 {
        Style::default().fg(theme.surface1).add_modifier(Modifier::DIM)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    let area = area.intersection(frame.area());
    frame.buffer_mut().set_style(area, style);
}
