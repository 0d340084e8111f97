//! Character-creation modal: allocate the starting stat budget.
//!
//! The modal owns a draft [`StatBlock`] that exists only while it is open.
//! Values are clamped to the allowed range as they are edited; the draft is
//! validated again on submit, and the server's rejection text (if any) is
//! shown inline in place of the local hint.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

use liferpg_api::{Stat, StatBlock};

use crate::ui::theme::GameTheme;

/// Points the player distributes across the five stats.
pub const TOTAL_ALLOCATABLE_POINTS: i32 = 25;
/// Lowest value a single stat may take.
pub const STAT_MIN: u8 = 1;
/// Highest value a single stat may take.
pub const STAT_MAX: u8 = 15;

/// What a key press inside the modal asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    None,
    Submit,
    Cancel,
}

/// Draft state of the character-creation modal.
#[derive(Debug, Clone)]
pub struct AllocationModal {
    values: StatBlock,
    selected: usize,
    error: Option<String>,
}

impl AllocationModal {
    /// Open with every stat at its default value and no error shown.
    pub fn new() -> Self {
        Self {
            values: StatBlock::default(),
            selected: 0,
            error: None,
        }
    }

    /// Points still unallocated. Negative when the draft overspends.
    pub fn remaining(&self) -> i32 {
        TOTAL_ALLOCATABLE_POINTS - self.values.total() as i32
    }

    /// Submit is available only when the whole budget is spent.
    pub fn submit_enabled(&self) -> bool {
        self.remaining() == 0
    }

    /// The inline error or hint currently shown, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Show an error inline: a local validation failure or the server's
    /// rejection text.
    pub fn set_error(&mut self, detail: String) {
        self.error = Some(detail);
    }

    fn selected_stat(&self) -> Stat {
        Stat::ALL[self.selected]
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(Stat::ALL.len() - 1);
    }

    fn increment(&mut self) {
        let stat = self.selected_stat();
        let value = self.values.get(stat);
        if value < STAT_MAX {
            self.values.set(stat, value + 1);
        }
        self.refresh_hint();
    }

    fn decrement(&mut self) {
        let stat = self.selected_stat();
        let value = self.values.get(stat);
        if value > STAT_MIN {
            self.values.set(stat, value - 1);
        }
        self.refresh_hint();
    }

    /// Recompute the live hint after an edit: shown while the budget is not
    /// exactly spent, cleared the moment it is.
    fn refresh_hint(&mut self) {
        let remaining = self.remaining();
        if remaining == 0 {
            self.error = None;
        } else {
            self.error = Some(format!(
                "You must use all {TOTAL_ALLOCATABLE_POINTS} points. Remaining: {remaining}"
            ));
        }
    }

    /// Validate the draft for submission. On success returns the stats to
    /// send; on failure returns the message to show inline.
    pub fn validate(&self) -> Result<StatBlock, String> {
        for stat in Stat::ALL {
            let value = self.values.get(stat);
            if !(STAT_MIN..=STAT_MAX).contains(&value) {
                return Err(format!(
                    "Stat {} must be between {STAT_MIN} and {STAT_MAX}.",
                    stat.key()
                ));
            }
        }

        let total = self.values.total() as i32;
        if total != TOTAL_ALLOCATABLE_POINTS {
            return Err(format!(
                "Total points must be exactly {TOTAL_ALLOCATABLE_POINTS}. Current: {total}"
            ));
        }

        Ok(self.values)
    }

    /// Handle a key press while the modal is open.
    pub fn handle_key(&mut self, key: KeyEvent) -> ModalAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                ModalAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                ModalAction::None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.increment();
                ModalAction::None
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
                self.decrement();
                ModalAction::None
            }
            KeyCode::Enter => ModalAction::Submit,
            KeyCode::Esc => ModalAction::Cancel,
            _ => ModalAction::None,
        }
    }
}

impl Default for AllocationModal {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the modal into the given popup area.
pub fn render(frame: &mut Frame, area: Rect, modal: &AllocationModal, theme: &GameTheme) {
    let block = Block::default()
        .title(" Character Creation ")
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));

    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Instructions
            Constraint::Length(5), // The five stats
            Constraint::Length(2), // Remaining points
            Constraint::Length(2), // Inline error
            Constraint::Min(0),    // Help
        ])
        .split(inner);

    let instructions = Paragraph::new(format!(
        "Distribute {TOTAL_ALLOCATABLE_POINTS} points across your stats \
         ({STAT_MIN}-{STAT_MAX} each)."
    ))
    .style(Style::default().fg(Color::Yellow))
    .wrap(Wrap { trim: true });
    frame.render_widget(instructions, chunks[0]);

    let stat_lines: Vec<Line> = Stat::ALL
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let marker = if i == modal.selected { "> " } else { "  " };
            let style = if i == modal.selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{marker}{} ({}): ", stat.label(), stat.key()), style),
                Span::styled(
                    format!("{:2}", modal.values.get(*stat)),
                    theme.stat_value_style(),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(stat_lines), chunks[1]);

    let remaining = modal.remaining();
    let remaining_style = if remaining == 0 {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Yellow)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Points remaining: {remaining}"),
            remaining_style,
        ))),
        chunks[2],
    );

    if let Some(error) = modal.error() {
        frame.render_widget(
            Paragraph::new(error.to_string())
                .style(theme.error_style())
                .wrap(Wrap { trim: true }),
            chunks[3],
        );
    }

    let help = if modal.submit_enabled() {
        "Enter: confirm  Esc: cancel"
    } else {
        "Spend every point to enable confirm  Esc: cancel"
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );
}
