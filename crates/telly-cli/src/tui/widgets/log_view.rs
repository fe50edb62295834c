//! Log View Widget - append-only activity log with stick-to-bottom scroll

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use telly_link::ActivityLog;

use crate::tui::theme::{current_theme, Theme};

/// Scroll state for the log view
#[derive(Debug, Clone)]
pub struct LogViewState {
    /// First visible entry when not following the tail
    pub offset: usize,
    /// Stick to the newest entries
    pub follow: bool,
}

impl LogViewState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }

    /// Scroll one line towards older entries
    pub fn scroll_up(&mut self) {
        if self.follow {
            self.follow = false;
        } else {
            self.offset = self.offset.saturating_sub(1);
        }
    }

    /// Scroll one line towards newer entries; re-follows at the tail
    pub fn scroll_down(&mut self, total: usize, visible: usize) {
        if self.follow {
            return;
        }
        self.offset += 1;
        if self.offset + visible >= total {
            self.follow = true;
        }
    }

    /// First visible entry index for the current state
    pub fn first_visible(&self, total: usize, visible: usize) -> usize {
        if self.follow {
            total.saturating_sub(visible)
        } else {
            self.offset.min(total.saturating_sub(1))
        }
    }

    /// Pin the offset when leaving follow mode so scrolling starts from
    /// the current view
    pub fn detach_at(&mut self, total: usize, visible: usize) {
        self.offset = total.saturating_sub(visible);
    }
}

impl Default for LogViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Log view widget
pub struct LogView<'a> {
    log: &'a ActivityLog,
    state: &'a LogViewState,
    theme: Theme,
}

impl<'a> LogView<'a> {
    pub fn new(log: &'a ActivityLog, state: &'a LogViewState) -> Self {
        Self {
            log,
            state,
            theme: current_theme(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Widget for LogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.state.follow {
            " Log ".to_string()
        } else {
            " Log (scrolled) ".to_string()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(Span::styled(title, self.theme.text_muted()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 1 {
            return;
        }

        let visible = inner.height as usize;
        let first = self.state.first_visible(self.log.len(), visible);

        let lines: Vec<Line> = self
            .log
            .entries()
            .iter()
            .skip(first)
            .take(visible)
            .map(|entry| {
                let text = entry.format();
                let style = if entry.message.starts_with("Sent: ") {
                    self.theme.text()
                } else if entry.message.starts_with("Connected") {
                    self.theme.success()
                } else if entry.message.starts_with("Disconnected") {
                    self.theme.text_muted()
                } else {
                    self.theme.error()
                };
                Line::from(Span::styled(text, style))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_sticks_to_tail() {
        let state = LogViewState::new();
        assert_eq!(state.first_visible(100, 10), 90);
        assert_eq!(state.first_visible(5, 10), 0);
    }

    #[test]
    fn test_scroll_back_and_refollow() {
        let mut state = LogViewState::new();
        state.detach_at(100, 10);
        state.scroll_up();
        assert!(!state.follow);
        state.scroll_up();
        assert_eq!(state.offset, 89);

        // Scrolling forward past the tail re-follows
        state.scroll_down(100, 10);
        assert_eq!(state.offset, 90);
        assert!(state.follow);
    }
}
