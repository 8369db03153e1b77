//! Reusable text input state with cursor management.
//!
//! The cursor is a char index, not a byte index, so editing emoji and
//! accented names behaves. The message field allows embedded newlines; the
//! renderer places the cursor on the right row for those.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    /// Current input text
    input: String,
    /// Cursor position as a char index
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial value, cursor at the end
    pub fn with_value(value: &str) -> Self {
        Self {
            input: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.input.chars().count();
    }

    /// Clear the input
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    /// Delete character at cursor (delete)
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Delete from cursor to start (Ctrl+U)
    pub fn delete_to_start(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input = self.input[at..].to_string();
        self.cursor = 0;
    }

    /// Delete from cursor to end (Ctrl+K)
    pub fn delete_to_end(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input.truncate(at);
    }

    /// Delete word before cursor (Ctrl+W)
    pub fn delete_word(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let end = self.byte_index(self.cursor);
        let chars: Vec<char> = self.input.chars().collect();
        // Skip spaces
        while self.cursor > 0 && chars[self.cursor - 1] == ' ' {
            self.cursor -= 1;
        }
        // Delete word
        while self.cursor > 0 && chars[self.cursor - 1] != ' ' {
            self.cursor -= 1;
        }
        let start = self.byte_index(self.cursor);
        self.input.drain(start..end);
    }

    /// Cursor position as (row, column-width) within the text, accounting
    /// for embedded newlines and wide characters.
    fn cursor_rowcol(&self) -> (u16, u16) {
        let at = self.byte_index(self.cursor);
        let prefix = &self.input[..at];
        let row = prefix.matches('\n').count();
        let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = prefix[line_start..].width();
        (row.min(u16::MAX as usize) as u16, col.min(u16::MAX as usize) as u16)
    }

    /// Render the text, optionally with the cursor cell highlighted.
    pub fn render(&self, area: Rect, buf: &mut Buffer, style: Style, focused: bool) {
        let text = Paragraph::new(self.input.as_str()).style(style);
        text.render(area, buf);
        if focused {
            self.render_cursor(area, buf);
        }
    }

    /// Render with placeholder text when empty
    pub fn render_with_placeholder(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        placeholder: &str,
        placeholder_style: Style,
        focused: bool,
    ) {
        if self.input.is_empty() {
            let text = Paragraph::new(placeholder).style(placeholder_style);
            text.render(area, buf);
        } else {
            let text = Paragraph::new(self.input.as_str()).style(style);
            text.render(area, buf);
        }
        if focused {
            self.render_cursor(area, buf);
        }
    }

    fn render_cursor(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let (row, col) = self.cursor_rowcol();
        let cursor_x = area.x + col.min(area.width.saturating_sub(1));
        let cursor_y = area.y + row.min(area.height.saturating_sub(1));
        buf[(cursor_x, cursor_y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
    }
}

impl std::fmt::Display for TextInputState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input)
    }
}
