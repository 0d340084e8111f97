//! Status bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use liferpg_api::PlayerData;

use crate::app::InputMode;
use crate::ui::render::Overlay;
use crate::ui::theme::GameTheme;

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Status bar widget showing quick stats and transient notices
pub struct StatusBarWidget<'a> {
    player: &'a PlayerData,
    input_mode: InputMode,
    theme: &'a GameTheme,
    message: Option<&'a str>,
    busy: bool,
    animation_frame: u8,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(player: &'a PlayerData, input_mode: InputMode, theme: &'a GameTheme) -> Self {
        Self {
            player,
            input_mode,
            theme,
            message: None,
            busy: false,
            animation_frame: 0,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    /// Show the request spinner while a backend call is pending.
    pub fn busy(mut self, busy: bool, animation_frame: u8) -> Self {
        self.busy = busy;
        self.animation_frame = animation_frame;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Input mode indicator (vim-style)
        let (input_mode_text, input_mode_style) = match self.input_mode {
            InputMode::Normal => (
                "NORMAL",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            InputMode::Insert => (
                "INSERT",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        };

        let mut spans = vec![
            Span::styled(format!("-- {} --", input_mode_text), input_mode_style),
            Span::raw(" | "),
            Span::styled(
                format!("Lv {}", self.player.level),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(format!("{}G", self.player.gold), self.theme.gold_style()),
        ];

        if self.busy {
            let spinner = SPINNER_FRAMES[(self.animation_frame as usize) % SPINNER_FRAMES.len()];
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("{spinner} contacting server"),
                Style::default().fg(Color::Yellow),
            ));
        }

        if let Some(msg) = self.message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                msg,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        paragraph.render(area, buf);
    }
}

/// Hotkey bar widget
pub struct HotkeyBarWidget {
    input_mode: InputMode,
    overlay: Option<Overlay>,
}

impl HotkeyBarWidget {
    pub fn new(input_mode: InputMode, overlay: Option<Overlay>) -> Self {
        Self {
            input_mode,
            overlay,
        }
    }
}

impl Widget for HotkeyBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hotkeys: Vec<(&str, bool)> = match self.overlay {
            Some(Overlay::CreateCharacter) => vec![
                ("j/k:stat", true),
                ("h/l:adjust", true),
                ("Enter:confirm", true),
                ("Esc:cancel", false),
            ],
            Some(Overlay::ConfirmReset) => {
                vec![("y:reset everything", true), ("n/Esc:cancel", false)]
            }
            Some(Overlay::Help) => vec![("Esc:close", true)],
            None => match self.input_mode {
                InputMode::Normal => vec![
                    ("i:type", true),
                    ("c:create character", true),
                    ("R:reset", true),
                    ("j/k:scroll", true),
                    ("G:bottom", false),
                    ("?:help", false),
                    ("q:quit", false),
                ],
                InputMode::Insert => vec![
                    ("Esc:normal", true),
                    ("Enter:send", true),
                    ("↑↓:history", false),
                ],
            },
        };

        let spans: Vec<Span> = hotkeys
            .iter()
            .flat_map(|(text, primary)| {
                let style = if *primary {
                    Style::default()
                } else {
                    Style::default().add_modifier(Modifier::DIM)
                };
                vec![Span::styled(*text, style), Span::raw("  ")]
            })
            .collect();

        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        paragraph.render(area, buf);
    }
}
