use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::tui::renderer::{InteractionRegistry, RenderFn};
use crate::tui::{Element, LayoutConstraint, Theme};

fn to_constraint(constraint: LayoutConstraint) -> Constraint {
    match constraint {
        LayoutConstraint::Length(n) => Constraint::Length(n),
        LayoutConstraint::Min(n) => Constraint::Min(n),
        LayoutConstraint::Fill(n) => Constraint::Fill(n),
    }
}

/// Render a vertical stack of children
pub fn render_column<Msg: Clone>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    items: &[(LayoutConstraint, Element<Msg>)],
    spacing: u16,
    area: Rect,
    render: RenderFn<Msg>,
) {
    let areas = Layout::vertical(items.iter().map(|(c, _)| to_constraint(*c)))
        .spacing(spacing)
        .split(area);
    for ((_, child), child_area) in items.iter().zip(areas.iter()) {
        render(frame, theme, registry, child, *child_area);
    }
}

/// Render children side by side
pub fn render_row<Msg: Clone>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    items: &[(LayoutConstraint, Element<Msg>)],
    spacing: u16,
    area: Rect,
    render: RenderFn<Msg>,
) {
    let areas = Layout::horizontal(items.iter().map(|(c, _)| to_constraint(*c)))
        .spacing(spacing)
        .split(area);
    for ((_, child), child_area) in items.iter().zip(areas.iter()) {
        render(frame, theme, registry, child, *child_area);
    }
}

/// Shrink an area by `horizontal` columns and `vertical` rows on each side
pub fn inset(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    let horizontal = horizontal.min(area.width / 2);
    let vertical = vertical.min(area.height / 2);
    Rect {
        x: area.x + horizontal,
        y: area.y + vertical,
        width: area.width - horizontal * 2,
        height: area.height - vertical * 2,
    }
}
