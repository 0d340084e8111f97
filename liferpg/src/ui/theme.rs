//! Color theme and styling for the Life RPG TUI

use ratatui::style::{Color, Modifier, Style};

/// Game UI color theme
#[derive(Debug, Clone)]
pub struct GameTheme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Chat text colors
    pub player_text: Color,
    pub gm_text: Color,
    pub system_text: Color,
    pub error_text: Color,

    // Player panel colors
    pub xp_bar: Color,
    pub gold: Color,
    pub stat_value: Color,

    // Accents
    pub title: Color,
    pub quest_name: Color,
    pub illustration: Color,
}

impl Default for GameTheme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            player_text: Color::Cyan,
            gm_text: Color::White,
            system_text: Color::DarkGray,
            error_text: Color::Red,

            xp_bar: Color::Magenta,
            gold: Color::Yellow,
            stat_value: Color::LightGreen,

            title: Color::LightMagenta,
            quest_name: Color::Yellow,
            illustration: Color::LightBlue,
        }
    }
}

impl GameTheme {
    /// Get style for GM narration
    pub fn gm_style(&self) -> Style {
        Style::default().fg(self.gm_text)
    }

    /// Get style for the player's own messages
    pub fn player_style(&self) -> Style {
        Style::default()
            .fg(self.player_text)
            .add_modifier(Modifier::ITALIC)
    }

    /// Get style for system messages
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get style for error entries
    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Get style for the title bar
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for gold amounts
    pub fn gold_style(&self) -> Style {
        Style::default().fg(self.gold)
    }

    /// Get style for stat values
    pub fn stat_value_style(&self) -> Style {
        Style::default()
            .fg(self.stat_value)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for quest names
    pub fn quest_name_style(&self) -> Style {
        Style::default()
            .fg(self.quest_name)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for the illustration URL
    pub fn illustration_style(&self) -> Style {
        Style::default().fg(self.illustration)
    }

    /// Get style for dim hints and placeholders
    pub fn hint_style(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }
}
