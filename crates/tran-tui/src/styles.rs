//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::constants::PADDING;

/// Color theme for the receiver UI.
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub primary: Color,
    pub info: Color,
    pub muted: Color,
    pub track: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x94, 0x7b, 0xf5),
            info: Color::Cyan,
            muted: Color::DarkGray,
            track: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Style for the spinner glyph and the filled part of the bar.
    #[must_use]
    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Style for status lines.
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for the help line.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the unfilled part of the bar.
    #[must_use]
    pub fn track_style(&self) -> Style {
        Style::default().fg(self.track)
    }
}

/// Bold span.
#[must_use]
pub fn bold(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().add_modifier(Modifier::BOLD))
}

/// Italic span.
#[must_use]
pub fn italic(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().add_modifier(Modifier::ITALIC))
}

/// Leading padding span.
#[must_use]
pub fn pad() -> Span<'static> {
    indent(PADDING)
}

/// Blank span `width` cells wide.
#[must_use]
pub fn indent(width: u16) -> Span<'static> {
    Span::raw(" ".repeat(usize::from(width)))
}
