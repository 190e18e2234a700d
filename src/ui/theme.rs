//! Theme definitions for fitdash
//!
//! Provides three built-in themes: Gruvbox, Nord, and Transparent.
//! Each theme defines colors for all UI elements.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Metric colors
    pub calories: Color,
    pub protein: Color,
    pub water: Color,

    // Rest timer overlay
    pub timer: Color,
}

impl Theme {
    /// Create a theme from a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Gruvbox => Self::gruvbox(),
            ThemeName::Nord => Self::nord(),
            ThemeName::Transparent => Self::transparent(),
        }
    }

    /// Gruvbox dark theme (default)
    pub fn gruvbox() -> Self {
        Self {
            // Base
            bg: Color::Rgb(40, 40, 40),        // #282828
            fg: Color::Rgb(235, 219, 178),     // #ebdbb2
            fg_dim: Color::Rgb(146, 131, 116), // #928374

            // Accent (orange)
            accent: Color::Rgb(254, 128, 25), // #fe8019

            // Status
            success: Color::Rgb(184, 187, 38), // #b8bb26
            warning: Color::Rgb(250, 189, 47), // #fabd2f

            // UI elements
            border: Color::Rgb(80, 73, 69),             // #504945
            border_focused: Color::Rgb(168, 153, 132),  // #a89984
            selection_bg: Color::Rgb(80, 73, 69),       // #504945
            selection_fg: Color::Rgb(235, 219, 178),    // #ebdbb2

            // Metrics
            calories: Color::Rgb(254, 128, 25),  // orange
            protein: Color::Rgb(211, 134, 155),  // #d3869b
            water: Color::Rgb(131, 165, 152),    // #83a598

            // Timer
            timer: Color::Rgb(250, 189, 47), // yellow
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            // Base (Polar Night)
            bg: Color::Rgb(46, 52, 64),      // #2e3440
            fg: Color::Rgb(236, 239, 244),   // #eceff4
            fg_dim: Color::Rgb(76, 86, 106), // #4c566a

            // Accent (Frost - blue)
            accent: Color::Rgb(136, 192, 208), // #88c0d0

            // Status (Aurora)
            success: Color::Rgb(163, 190, 140), // #a3be8c (green)
            warning: Color::Rgb(235, 203, 139), // #ebcb8b (yellow)

            // UI elements
            border: Color::Rgb(59, 66, 82),            // #3b4252
            border_focused: Color::Rgb(136, 192, 208), // #88c0d0
            selection_bg: Color::Rgb(76, 86, 106),     // #4c566a
            selection_fg: Color::Rgb(236, 239, 244),   // #eceff4

            // Metrics
            calories: Color::Rgb(208, 135, 112), // #d08770
            protein: Color::Rgb(180, 142, 173),  // #b48ead
            water: Color::Rgb(129, 161, 193),    // #81a1c1

            // Timer
            timer: Color::Rgb(235, 203, 139),
        }
    }

    /// Transparent theme (uses terminal colors)
    pub fn transparent() -> Self {
        Self {
            // Base - use terminal defaults
            bg: Color::Reset,
            fg: Color::Reset,
            fg_dim: Color::DarkGray,

            // Accent
            accent: Color::Cyan,

            // Status
            success: Color::Green,
            warning: Color::Yellow,

            // UI elements
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,

            // Metrics
            calories: Color::Yellow,
            protein: Color::Magenta,
            water: Color::Blue,

            // Timer
            timer: Color::Yellow,
        }
    }

    // Style helpers for common UI patterns

    /// Background style for block areas
    pub fn block_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item style
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Tab style (inactive)
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Tab style (active)
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Warning message style
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning).bg(self.bg)
    }

    /// Calories metric style
    pub fn calories(&self) -> Style {
        Style::default().fg(self.calories).bg(self.bg)
    }

    /// Protein metric style
    pub fn protein(&self) -> Style {
        Style::default().fg(self.protein).bg(self.bg)
    }

    /// Water metric style
    pub fn water(&self) -> Style {
        Style::default().fg(self.water).bg(self.bg)
    }

    /// Rest timer style
    pub fn timer(&self) -> Style {
        Style::default()
            .fg(self.timer)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        let gruvbox = Theme::from_name(ThemeName::Gruvbox);
        assert_eq!(gruvbox.bg, Color::Rgb(40, 40, 40));

        let nord = Theme::from_name(ThemeName::Nord);
        assert_eq!(nord.bg, Color::Rgb(46, 52, 64));

        let transparent = Theme::from_name(ThemeName::Transparent);
        assert_eq!(transparent.bg, Color::Reset);
    }
}
