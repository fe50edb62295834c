//! Quick Send Widget - the four canned payloads
//!
//! ```text
//! ┌ Quick Send ─────────────────────────────────────┐
//! │ F5 Solar │ F6 67 │ F7 GOATed │ F8 Clear         │
//! └─────────────────────────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::theme::{current_theme, Theme};

/// One canned payload with its key hint
#[derive(Debug, Clone, Copy)]
pub struct QuickAction {
    pub key: &'static str,
    pub label: &'static str,
    pub payload: &'static str,
}

/// The quick-send payloads, byte-for-byte what the display expects.
/// `---` tells the display to clear.
pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        key: "F5",
        label: "Solar",
        payload: "This is MSU Solar Car!",
    },
    QuickAction {
        key: "F6",
        label: "67",
        payload: "67",
    },
    QuickAction {
        key: "F7",
        label: "GOATed",
        payload: "The Telly team",
    },
    QuickAction {
        key: "F8",
        label: "Clear",
        payload: "---",
    },
];

/// Quick send widget
pub struct QuickBar {
    theme: Theme,
}

impl QuickBar {
    pub fn new() -> Self {
        Self {
            theme: current_theme(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Default for QuickBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for QuickBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(Span::styled(" Quick Send ", self.theme.text_muted()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 10 || inner.height < 1 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, action) in QUICK_ACTIONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.theme.text_muted()));
            }
            spans.push(Span::styled(action.key, self.theme.keybind()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action.label, self.theme.keybind_desc()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
