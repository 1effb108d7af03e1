use crossterm::event::KeyCode;

/// Value and cursor of a single-line text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor_pos: usize, // Character index (0 = before first char)
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field pre-filled with `value`, cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor_pos = value.chars().count();
        Self { value, cursor_pos }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Apply an editing key. Returns true if the text changed.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let char_count = self.value.chars().count();

        match key {
            KeyCode::Char(c) => {
                let byte_idx = self.byte_index(self.cursor_pos);
                self.value.insert(byte_idx, c);
                self.cursor_pos += 1;
                true
            }
            KeyCode::Backspace => {
                // Delete character before cursor
                if self.cursor_pos == 0 {
                    return false;
                }
                self.cursor_pos -= 1;
                let byte_idx = self.byte_index(self.cursor_pos);
                self.value.remove(byte_idx);
                true
            }
            KeyCode::Delete => {
                // Delete character at cursor position
                if self.cursor_pos >= char_count {
                    return false;
                }
                let byte_idx = self.byte_index(self.cursor_pos);
                self.value.remove(byte_idx);
                true
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor_pos = (self.cursor_pos + 1).min(char_count);
                false
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                false
            }
            KeyCode::End => {
                self.cursor_pos = char_count;
                false
            }
            _ => false,
        }
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_cursor_movement() {
        let mut field = TextField::new();
        for c in "Wanjiku".chars() {
            assert!(field.handle_key(KeyCode::Char(c)));
        }
        assert_eq!(field.value(), "Wanjiku");

        field.handle_key(KeyCode::Home);
        field.handle_key(KeyCode::Delete);
        assert_eq!(field.value(), "anjiku");

        field.handle_key(KeyCode::End);
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.value(), "anjik");
        assert_eq!(field.cursor_pos(), 5);
    }

    #[test]
    fn test_multibyte_insert_in_middle() {
        let mut field = TextField::with_value("Nairobi");
        field.handle_key(KeyCode::Left);
        field.handle_key(KeyCode::Char('é'));
        assert_eq!(field.value(), "Nairobéi");
        assert_eq!(field.cursor_pos(), 7);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = TextField::new();
        assert!(!field.handle_key(KeyCode::Backspace));
        assert!(!field.handle_key(KeyCode::Left));
        assert_eq!(field.cursor_pos(), 0);
    }
}
