use ratatui::layout::Rect;

/// Stores click handlers for UI elements rendered in the last frame
pub struct InteractionRegistry<Msg> {
    click_handlers: Vec<(Rect, Msg)>,
}

impl<Msg: Clone> InteractionRegistry<Msg> {
    pub fn new() -> Self {
        Self {
            click_handlers: Vec::new(),
        }
    }

    pub fn register_click(&mut self, rect: Rect, msg: Msg) {
        self.click_handlers.push((rect, msg));
    }

    pub fn find_click(&self, x: u16, y: u16) -> Option<Msg> {
        // Search in reverse order so the innermost element wins
        for (rect, msg) in self.click_handlers.iter().rev() {
            if self.point_in_rect(x, y, *rect) {
                return Some(msg.clone());
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.click_handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.click_handlers.is_empty()
    }

    pub fn clear(&mut self) {
        self.click_handlers.clear();
    }

    fn point_in_rect(&self, x: u16, y: u16, rect: Rect) -> bool {
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    }
}

impl<Msg: Clone> Default for InteractionRegistry<Msg> {
    fn default() -> Self {
        Self::new()
    }
}
