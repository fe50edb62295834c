//! Clock Panel Widget - time readout and sending-session toggle label
//!
//! ```text
//! ┌ Send Time ──────────────┐
//! │        14:03:27         │
//! │  F3 Stop Sending Time   │
//! └─────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::theme::{current_theme, Theme};

/// Clock text shown before any time has been sent
pub const IDLE_CLOCK: &str = "--:--:--";

/// Clock panel widget
pub struct ClockPanel<'a> {
    clock: &'a str,
    sending: bool,
    theme: Theme,
}

impl<'a> ClockPanel<'a> {
    pub fn new(clock: &'a str, sending: bool) -> Self {
        Self {
            clock,
            sending,
            theme: current_theme(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Toggle label for the current session state
    pub fn toggle_label(sending: bool) -> &'static str {
        if sending {
            "Stop Sending Time"
        } else {
            "Start Sending Time"
        }
    }
}

impl Widget for ClockPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(Span::styled(" Send Time ", self.theme.text_muted()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 10 || inner.height < 1 {
            return;
        }

        let clock_style = if self.sending {
            self.theme.text_bold()
        } else {
            self.theme.text_muted()
        };

        let mut lines = vec![Line::from(Span::styled(self.clock.to_string(), clock_style))];

        if inner.height >= 2 {
            lines.push(Line::from(vec![
                Span::styled("F3 ", self.theme.keybind()),
                Span::styled(
                    Self::toggle_label(self.sending),
                    if self.sending {
                        self.theme.warning()
                    } else {
                        self.theme.keybind_desc()
                    },
                ),
            ]));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
