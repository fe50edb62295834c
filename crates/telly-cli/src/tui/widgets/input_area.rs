//! Input Area Widget - single-line text entry
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ ❯ Text to send...                                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::theme::{current_theme, Theme};

/// Input state
#[derive(Debug, Clone)]
pub struct InputState {
    /// Input text
    pub content: String,
    /// Cursor position (byte index)
    pub cursor: usize,
    /// Placeholder
    pub placeholder: String,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            placeholder: "Text to send... (Enter to send)".to_string(),
        }
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.content[..self.cursor]
            .chars()
            .last()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.content.remove(self.cursor - prev);
        self.cursor -= prev;
    }

    /// Delete key
    pub fn delete(&mut self) {
        if self.cursor >= self.content.len() {
            return;
        }
        self.content.remove(self.cursor);
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .last()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            let next = self.content[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next;
        }
    }

    /// Take the content and clear the field
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    /// Cursor position in display columns
    pub fn cursor_col(&self) -> usize {
        self.content[..self.cursor].chars().count()
    }

    /// Handle an editing key. Returns true when Enter was pressed with
    /// non-empty content.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                if !self.content.is_empty() {
                    return true;
                }
            }
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.content.len(),
            _ => {}
        }
        false
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Input area widget
pub struct InputArea<'a> {
    state: &'a InputState,
    theme: Theme,
}

impl<'a> InputArea<'a> {
    pub fn new(state: &'a InputState) -> Self {
        Self {
            state,
            theme: current_theme(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Widget for InputArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_focused())
            .title(Span::styled(" Send Text ", self.theme.border_focused()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 1 {
            return;
        }

        let (text, style) = if self.state.content.is_empty() {
            (self.state.placeholder.as_str(), self.theme.text_muted())
        } else {
            (self.state.content.as_str(), self.theme.text())
        };

        let visible_width = inner.width.saturating_sub(2) as usize;
        let cursor_col = self.state.cursor_col();

        // Keep the cursor visible when the content overflows
        let scroll_offset = if cursor_col >= visible_width {
            cursor_col - visible_width + 1
        } else {
            0
        };

        let visible: String = text.chars().skip(scroll_offset).take(visible_width).collect();

        let line = ratatui::text::Line::from(vec![
            Span::styled("❯ ", self.theme.text_accent()),
            Span::styled(visible, style),
        ]);
        Paragraph::new(line).render(inner, buf);

        // Block cursor over the current cell
        let cursor_x = inner.x + 2 + (cursor_col - scroll_offset).min(visible_width) as u16;
        if cursor_x < inner.x + inner.width {
            let cursor_char = self
                .state
                .content
                .chars()
                .nth(cursor_col)
                .unwrap_or(' ');
            if let Some(cell) = buf.cell_mut((cursor_x, inner.y)) {
                cell.set_char(cursor_char)
                    .set_style(Style::default().bg(self.theme.fg).fg(self.theme.bg));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_insert_and_cursor() {
        let mut state = InputState::new();
        state.insert('6');
        state.insert('7');
        assert_eq!(state.content, "67");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = InputState::new();
        state.insert('é');
        state.insert('!');
        assert_eq!(state.cursor, 3);
        assert_eq!(state.cursor_col(), 2);

        state.move_left();
        state.move_left();
        assert_eq!(state.cursor, 0);

        state.move_right();
        assert_eq!(state.cursor, 2);

        state.backspace();
        assert_eq!(state.content, "!");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_take_clears() {
        let mut state = InputState::new();
        for c in "hello".chars() {
            state.insert(c);
        }

        assert_eq!(state.take(), "hello");
        assert!(state.content.is_empty());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_enter_requires_content() {
        let mut state = InputState::new();
        assert!(!state.handle_key(key(KeyCode::Enter)));

        state.insert('x');
        assert!(state.handle_key(key(KeyCode::Enter)));
    }

    #[test]
    fn test_editing_keys() {
        let mut state = InputState::new();
        for c in "abc".chars() {
            state.insert(c);
        }

        state.handle_key(key(KeyCode::Home));
        assert_eq!(state.cursor, 0);

        state.handle_key(key(KeyCode::Delete));
        assert_eq!(state.content, "bc");

        state.handle_key(key(KeyCode::End));
        state.handle_key(key(KeyCode::Backspace));
        assert_eq!(state.content, "b");
    }
}
