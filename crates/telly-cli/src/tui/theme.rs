//! Theme - Tellycast TUI styles

use ratatui::style::{Color, Modifier, Style};

/// Tellycast theme
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Background
    pub bg: Color,
    /// Foreground (default text)
    pub fg: Color,
    /// Muted text (secondary info)
    pub muted: Color,
    /// Accent color
    pub accent: Color,
    /// Success
    pub success: Color,
    /// Warning
    pub warning: Color,
    /// Error
    pub error: Color,
    /// Border color
    pub border: Color,
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(22, 22, 26),
            fg: Color::Rgb(220, 220, 224),
            muted: Color::Rgb(128, 128, 140),
            accent: Color::Rgb(120, 180, 255),
            success: Color::Rgb(80, 200, 120),
            warning: Color::Rgb(255, 200, 80),
            error: Color::Rgb(255, 100, 100),
            border: Color::Rgb(60, 60, 70),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 252),
            fg: Color::Rgb(30, 30, 40),
            muted: Color::Rgb(120, 120, 130),
            accent: Color::Rgb(0, 100, 200),
            success: Color::Rgb(30, 150, 80),
            warning: Color::Rgb(200, 150, 0),
            error: Color::Rgb(200, 60, 60),
            border: Color::Rgb(220, 220, 225),
        }
    }

    // === Style helpers ===

    /// Default text
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Muted text
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Accent text
    pub fn text_accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Bold text
    pub fn text_bold(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// Header
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Border
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Focused border
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Success
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Warning
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Error
    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Keybinding hint
    pub fn keybind(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Keybinding description
    pub fn keybind_desc(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Global theme (thread_local, no lazy_static)
thread_local! {
    static CURRENT_THEME: std::cell::RefCell<Theme> = std::cell::RefCell::new(Theme::dark());
}

/// Get current theme
pub fn current_theme() -> Theme {
    CURRENT_THEME.with(|t| *t.borrow())
}

/// Set theme
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.with(|t| *t.borrow_mut() = theme);
}
