//! Inventory panel widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use liferpg_api::InventoryItem;

use crate::ui::theme::GameTheme;

/// Sidebar list of everything the player carries. Rendered wholesale from
/// the latest snapshot, so stale entries cannot survive an update.
pub struct InventoryWidget<'a> {
    items: &'a [InventoryItem],
    theme: &'a GameTheme,
}

impl<'a> InventoryWidget<'a> {
    pub fn new(items: &'a [InventoryItem], theme: &'a GameTheme) -> Self {
        Self { items, theme }
    }
}

impl Widget for InventoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Inventory ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = if self.items.is_empty() {
            vec![Line::from(Span::styled(
                "Your inventory is empty.",
                self.theme.hint_style(),
            ))]
        } else {
            self.items
                .iter()
                .map(|item| Line::from(format!("- {}", item.display())))
                .collect()
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
