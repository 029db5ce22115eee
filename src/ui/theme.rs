//! Colour themes for student-form
//!
//! One theme instance, chosen from the config and swapped with F2.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    is_transparent: bool,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Gruvbox => Self::gruvbox(),
            ThemeName::Nord => Self::nord(),
            ThemeName::Catppuccin => Self::catppuccin(),
            ThemeName::Dracula => Self::dracula(),
            ThemeName::Transparent => Self::transparent(),
        }
    }

    /// Gruvbox dark theme (default)
    pub fn gruvbox() -> Self {
        Self {
            bg: Color::Rgb(40, 40, 40),
            fg: Color::Rgb(235, 219, 178),
            fg_dim: Color::Rgb(146, 131, 116),
            accent: Color::Rgb(254, 128, 25),
            success: Color::Rgb(184, 187, 38),
            error: Color::Rgb(251, 73, 52),
            border: Color::Rgb(80, 73, 69),
            border_focused: Color::Rgb(168, 153, 132),
            selection_bg: Color::Rgb(80, 73, 69),
            selection_fg: Color::Rgb(235, 219, 178),
            is_transparent: false,
        }
    }

    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(236, 239, 244),
            fg_dim: Color::Rgb(76, 86, 106),
            accent: Color::Rgb(136, 192, 208),
            success: Color::Rgb(163, 190, 140),
            error: Color::Rgb(191, 97, 106),
            border: Color::Rgb(59, 66, 82),
            border_focused: Color::Rgb(136, 192, 208),
            selection_bg: Color::Rgb(76, 86, 106),
            selection_fg: Color::Rgb(236, 239, 244),
            is_transparent: false,
        }
    }

    /// Catppuccin Mocha
    pub fn catppuccin() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 46),
            fg: Color::Rgb(205, 214, 244),
            fg_dim: Color::Rgb(108, 112, 134),
            accent: Color::Rgb(137, 180, 250),
            success: Color::Rgb(166, 227, 161),
            error: Color::Rgb(243, 139, 168),
            border: Color::Rgb(69, 71, 90),
            border_focused: Color::Rgb(137, 180, 250),
            selection_bg: Color::Rgb(69, 71, 90),
            selection_fg: Color::Rgb(205, 214, 244),
            is_transparent: false,
        }
    }

    pub fn dracula() -> Self {
        Self {
            bg: Color::Rgb(40, 42, 54),
            fg: Color::Rgb(248, 248, 242),
            fg_dim: Color::Rgb(98, 114, 164),
            accent: Color::Rgb(189, 147, 249),
            success: Color::Rgb(80, 250, 123),
            error: Color::Rgb(255, 85, 85),
            border: Color::Rgb(68, 71, 90),
            border_focused: Color::Rgb(189, 147, 249),
            selection_bg: Color::Rgb(68, 71, 90),
            selection_fg: Color::Rgb(248, 248, 242),
            is_transparent: false,
        }
    }

    /// Uses the terminal's own background
    pub fn transparent() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            fg_dim: Color::Gray,
            accent: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection_bg: Color::Reset,
            selection_fg: Color::White,
            is_transparent: true,
        }
    }

    // === STYLE HELPERS ===

    fn on_bg(&self, style: Style) -> Style {
        if self.is_transparent {
            style
        } else {
            style.bg(self.bg)
        }
    }

    pub fn text(&self) -> Style {
        self.on_bg(Style::default().fg(self.fg))
    }

    pub fn text_dim(&self) -> Style {
        self.on_bg(Style::default().fg(self.fg_dim))
    }

    pub fn title(&self) -> Style {
        self.on_bg(Style::default().fg(self.accent).add_modifier(Modifier::BOLD))
    }

    pub fn selected(&self) -> Style {
        let style = Style::default()
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD);
        if self.is_transparent {
            style
        } else {
            style.bg(self.selection_bg)
        }
    }

    pub fn border(&self) -> Style {
        self.on_bg(Style::default().fg(self.border))
    }

    pub fn border_focused(&self) -> Style {
        self.on_bg(Style::default().fg(self.border_focused))
    }

    /// Border for a field that failed validation
    pub fn border_invalid(&self) -> Style {
        self.on_bg(Style::default().fg(self.error))
    }

    pub fn success(&self) -> Style {
        self.on_bg(Style::default().fg(self.success))
    }

    pub fn error(&self) -> Style {
        self.on_bg(Style::default().fg(self.error))
    }

    pub fn button(&self, focused: bool) -> Style {
        if focused {
            self.selected()
        } else {
            self.on_bg(Style::default().fg(self.accent))
        }
    }

    pub fn button_disabled(&self) -> Style {
        self.on_bg(
            Style::default()
                .fg(self.fg_dim)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    }

    pub fn block_style(&self) -> Style {
        if self.is_transparent {
            Style::default()
        } else {
            Style::default().bg(self.bg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        let gruvbox = Theme::from_name(ThemeName::Gruvbox);
        assert_eq!(gruvbox.bg, Color::Rgb(40, 40, 40));
        assert!(!gruvbox.is_transparent);

        let transparent = Theme::from_name(ThemeName::Transparent);
        assert!(transparent.is_transparent);
        assert_eq!(transparent.text().bg, None);
    }

    #[test]
    fn test_invalid_border_uses_error_color() {
        let theme = Theme::nord();
        assert_eq!(theme.border_invalid().fg, Some(theme.error));
    }
}
