use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::element::ListItem;
use crate::tui::{Element, Theme};

mod interaction_registry;
mod widgets;

pub use interaction_registry::InteractionRegistry;

use widgets::{fade, layout, text_input};

/// Signature shared by recursive render helpers
pub type RenderFn<Msg> = fn(&mut Frame, &Theme, &mut InteractionRegistry<Msg>, &Element<Msg>, Rect);

/// Renders elements to the terminal
pub struct Renderer;

impl Renderer {
    pub fn render<Msg: Clone>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        element: &Element<Msg>,
        area: Rect,
    ) {
        Self::render_element(frame, theme, registry, element, area);
    }

    fn render_element<Msg: Clone>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        element: &Element<Msg>,
        area: Rect,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match element {
            Element::None => {}

            Element::Text { content, style } => {
                let style = style.unwrap_or_else(|| Style::default().fg(theme.text));
                frame.render_widget(Paragraph::new(content.as_str()).style(style), area);
            }

            Element::StyledText { line } => {
                frame.render_widget(Paragraph::new(line.clone()), area);
            }

            Element::Button { label, on_press, primary } => {
                if let Some(msg) = on_press {
                    registry.register_click(area, msg.clone());
                }
                let (border, text) = if *primary {
                    (theme.accent_style(), theme.accent_style().add_modifier(Modifier::BOLD))
                } else {
                    (Style::default().fg(theme.overlay0), Style::default().fg(theme.text))
                };
                let block = Block::default().borders(Borders::ALL).border_style(border);
                let widget = Paragraph::new(label.as_str())
                    .block(block)
                    .alignment(Alignment::Center)
                    .style(text);
                frame.render_widget(widget, area);
            }

            Element::Column { items, spacing } => {
                layout::render_column(frame, theme, registry, items, *spacing, area, Self::render_element);
            }

            Element::Row { items, spacing } => {
                layout::render_row(frame, theme, registry, items, *spacing, area, Self::render_element);
            }

            Element::Container { child, padding } => {
                let inner = layout::inset(area, *padding, *padding / 2);
                Self::render_element(frame, theme, registry, child, inner);
            }

            Element::Panel { child, title, border_style } => {
                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style.unwrap_or_else(|| Style::default().fg(theme.overlay0)));
                if let Some(title_text) = title {
                    block = block.title(title_text.as_str());
                }
                let inner_area = block.inner(area);
                frame.render_widget(block, area);
                Self::render_element(frame, theme, registry, child, inner_area);
            }

            Element::List { items, selected } => {
                Self::render_list(frame, theme, registry, items, *selected, area);
            }

            Element::TextInput { label, value, cursor_pos, focused } => {
                text_input::render_text_input(
                    frame,
                    theme,
                    label,
                    value,
                    *cursor_pos,
                    *focused,
                    area,
                );
            }

            Element::Fade { child, level, interactive } => {
                let inner = fade::scaled_area(area, *level);
                if *interactive {
                    Self::render_element(frame, theme, registry, child, inner);
                } else {
                    let mut discarded = InteractionRegistry::new();
                    Self::render_element(frame, theme, &mut discarded, child, inner);
                }
                fade::apply_fade(frame, theme, inner, *level);
            }
        }
    }

    fn render_list<Msg: Clone>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        items: &[ListItem<Msg>],
        selected: Option<usize>,
        area: Rect,
    ) {
        let areas = Layout::vertical(items.iter().map(|item| Constraint::Length(item.height))).split(area);

        for (index, (item, item_area)) in items.iter().zip(areas.iter()).enumerate() {
            let is_selected = selected == Some(index);
            let marker = if is_selected { "▶ " } else { "  " };
            let marker_style = if is_selected { theme.accent_style() } else { theme.muted_style() };

            let [marker_area, content_area] =
                Layout::horizontal([Constraint::Length(2), Constraint::Fill(1)]).areas(*item_area);
            frame.render_widget(Paragraph::new(Line::styled(marker, marker_style)), marker_area);
            Self::render_element(frame, theme, registry, &item.content, content_area);

            if is_selected {
                let highlight = item_area.intersection(frame.area());
                frame.buffer_mut().set_style(highlight, Style::default().bg(theme.surface0));
            }
            if let Some(msg) = &item.on_click {
                registry.register_click(*item_area, msg.clone());
            }
        }
    }
}
