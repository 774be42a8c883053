//! Single-line text input widget.

use crate::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A labeled single-line text input.
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    /// The text content.
    content: &'a str,
    /// Cursor position (character index).
    cursor: usize,
    /// Whether the input is focused.
    focused: bool,
    /// Placeholder text.
    placeholder: Option<&'a str>,
    /// Label prefix (e.g., "Name: ").
    label: &'a str,
}

impl<'a> TextInput<'a> {
    /// Create a new text input over the given content.
    pub fn new(content: &'a str, cursor: usize) -> Self {
        Self {
            content,
            cursor,
            focused: false,
            placeholder: None,
            label: "",
        }
    }

    /// Set focus state.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set the label prefix.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 1 {
            return;
        }

        let label_style = if self.focused {
            Styles::active()
        } else {
            Styles::dim()
        };

        let mut spans = vec![Span::styled(self.label, label_style)];

        if self.content.is_empty() {
            if self.focused {
                spans.push(Span::styled("_", Styles::active()));
            }
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(placeholder, Styles::dim()));
            }
        } else {
            // Split content around the cursor so the marker lands between chars
            let offset = byte_offset_at(self.content, self.cursor);
            let (before, after) = self.content.split_at(offset);

            spans.push(Span::styled(before, Styles::default()));
            if self.focused {
                let marker = if after.is_empty() { "_" } else { "|" };
                spans.push(Span::styled(marker, Styles::active()));
            }
            spans.push(Span::styled(after, Styles::default()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// State for a text input, managing content and cursor position.
///
/// The cursor is a character index; byte offsets are derived when mutating so
/// multi-byte input stays intact.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    /// The text content.
    pub content: String,
    /// Cursor position (character index).
    pub cursor: usize,
}

impl TextInputState {
    /// Create a new empty text input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state prefilled with content, cursor at the end.
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let offset = byte_offset_at(&self.content, self.cursor);
        self.content.insert(offset, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        let offset = byte_offset_at(&self.content, self.cursor);
        self.content.insert_str(offset, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = byte_offset_at(&self.content, self.cursor);
            self.content.remove(offset);
        }
    }

    /// Delete the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let offset = byte_offset_at(&self.content, self.cursor);
            self.content.remove(offset);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    /// Create a widget from this state.
    pub fn widget(&self) -> TextInput<'_> {
        TextInput::new(&self.content, self.cursor)
    }
}

/// Byte offset of the given character index, clamped to the string end.
fn byte_offset_at(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_editing() {
        let mut state = TextInputState::new();
        assert!(state.is_empty());

        state.insert('H');
        state.insert('i');
        assert_eq!(state.content(), "Hi");
        assert_eq!(state.cursor, 2);

        state.backspace();
        assert_eq!(state.content(), "H");

        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_cursor_movement() {
        let mut state = TextInputState::new();
        state.insert_str("Hello");

        state.move_left();
        state.move_left();
        assert_eq!(state.cursor, 3);

        state.insert('X');
        assert_eq!(state.content(), "HelXlo");

        state.move_home();
        assert_eq!(state.cursor, 0);

        state.move_end();
        assert_eq!(state.cursor, 6);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut state = TextInputState::with_content("abc");
        state.move_home();
        state.delete();
        assert_eq!(state.content(), "bc");

        state.move_end();
        state.delete(); // Past the end: no-op
        assert_eq!(state.content(), "bc");
    }

    #[test]
    fn test_multibyte_input() {
        let mut state = TextInputState::new();
        state.insert('é');
        state.insert('v');
        state.move_left();
        state.move_left();
        state.insert('r');
        assert_eq!(state.content(), "rév");

        state.move_end();
        state.backspace();
        state.backspace();
        assert_eq!(state.content(), "r");
    }

    #[test]
    fn test_with_content_cursor_at_end() {
        let state = TextInputState::with_content("Launch");
        assert_eq!(state.cursor, 6);
    }
}
