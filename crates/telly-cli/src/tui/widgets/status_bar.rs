//! Status Bar Widget - keybinding hints
//!
//! ```text
//! Enter send │ F2 connect │ F3 time │ F5-F8 quick │ ↑↓ scroll │ Ctrl+C quit
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::{current_theme, Theme};

/// Status bar widget
pub struct StatusBar {
    items: Vec<(String, String)>,
    theme: Theme,
}

impl StatusBar {
    /// Hints for the current connection state
    pub fn new(connected: bool) -> Self {
        let connect_hint = if connected { "disconnect" } else { "connect" };
        Self {
            items: vec![
                ("Enter".to_string(), "send".to_string()),
                ("F2".to_string(), connect_hint.to_string()),
                ("F3".to_string(), "time".to_string()),
                ("F5-F8".to_string(), "quick".to_string()),
                ("↑↓".to_string(), "scroll".to_string()),
                ("Ctrl+C".to_string(), "quit".to_string()),
            ],
            theme: current_theme(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];

        for (i, (key, desc)) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.theme.text_muted()));
            }
            spans.push(Span::styled(key.clone(), self.theme.keybind()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(desc.clone(), self.theme.keybind_desc()));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.theme.bg))
            .render(area, buf);
    }
}
