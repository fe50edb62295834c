//! Header Widget - title, target address, connection status
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ Tellycast          Display 192.168.1.100:5000  ● Connected  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::theme::{current_theme, Theme};

/// Header widget
pub struct Header<'a> {
    addr: &'a str,
    connected: bool,
    theme: Theme,
}

impl<'a> Header<'a> {
    pub fn new(addr: &'a str, connected: bool) -> Self {
        Self {
            addr,
            connected,
            theme: current_theme(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 10 || inner.height < 1 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(12), Constraint::Min(10)])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(" Tellycast", self.theme.header())))
            .render(chunks[0], buf);

        let status = if self.connected {
            Span::styled("● Connected", self.theme.success())
        } else {
            Span::styled("○ Disconnected", self.theme.error())
        };

        let right = Line::from(vec![
            Span::styled(format!("Display {}", self.addr), self.theme.text_muted()),
            Span::raw("  "),
            status,
            Span::raw(" "),
        ]);
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
