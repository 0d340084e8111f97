//! Quests panel widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use liferpg_api::QuestView;

use crate::ui::theme::GameTheme;

/// Sidebar list of active quests, fully replaced on every state update.
pub struct QuestsWidget<'a> {
    quests: &'a [QuestView],
    theme: &'a GameTheme,
}

impl<'a> QuestsWidget<'a> {
    pub fn new(quests: &'a [QuestView], theme: &'a GameTheme) -> Self {
        Self { quests, theme }
    }
}

impl Widget for QuestsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Quests ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();

        if self.quests.is_empty() {
            lines.push(Line::from(Span::styled(
                "No active quests.",
                self.theme.hint_style(),
            )));
        } else {
            for quest in self.quests {
                lines.push(Line::from(Span::styled(
                    quest.name.clone(),
                    self.theme.quest_name_style(),
                )));
                lines.push(Line::from(quest.description.clone()));
                lines.push(Line::from(Span::styled(
                    format!("Status: {}", quest.status),
                    self.theme.hint_style(),
                )));
                lines.push(Line::from(""));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
