//! Player stats panel widget for sidebar display

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use liferpg_api::{PlayerData, Stat};

use crate::ui::theme::GameTheme;

/// Compact player panel for the sidebar
pub struct PlayerPanelWidget<'a> {
    player: &'a PlayerData,
    theme: &'a GameTheme,
}

impl<'a> PlayerPanelWidget<'a> {
    pub fn new(player: &'a PlayerData, theme: &'a GameTheme) -> Self {
        Self { player, theme }
    }
}

impl Widget for PlayerPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Player ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        // Split into sections
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Level
                Constraint::Length(2), // XP bar
                Constraint::Length(2), // Gold / stat points
                Constraint::Length(5), // The five stats
                Constraint::Min(0),
            ])
            .split(inner);

        // Level
        let level_line = Line::from(Span::styled(
            format!("Level: {}", self.player.level),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(level_line).render(chunks[0], buf);

        // XP bar toward the next level
        let threshold = self.player.xp_to_next_level.max(1);
        let ratio = (self.player.xp as f64 / threshold as f64).min(1.0);
        let gauge = Gauge::default()
            .block(Block::default())
            .gauge_style(Style::default().fg(self.theme.xp_bar))
            .ratio(ratio)
            .label(format!(
                "XP: {} / {}",
                self.player.xp, self.player.xp_to_next_level
            ));
        gauge.render(chunks[1], buf);

        // Gold and unallocated stat points
        let wealth_lines = vec![
            Line::from(vec![
                Span::raw("Gold: "),
                Span::styled(format!("{}G", self.player.gold), self.theme.gold_style()),
            ]),
            Line::from(vec![
                Span::raw("Stat Points: "),
                Span::styled(
                    format!("{}", self.player.stat_points),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        Paragraph::new(wealth_lines).render(chunks[2], buf);

        // The five stats
        let stat_lines: Vec<Line> = Stat::ALL
            .iter()
            .map(|stat| {
                Line::from(vec![
                    Span::raw(format!("{} ({}): ", stat.label(), stat.key())),
                    Span::styled(
                        format!("{}", self.player.stats.get(*stat)),
                        self.theme.stat_value_style(),
                    ),
                ])
            })
            .collect();
        Paragraph::new(stat_lines).render(chunks[3], buf);
    }
}
