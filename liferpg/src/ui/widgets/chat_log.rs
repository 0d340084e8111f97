//! Chat log widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::scrollbar,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget, Wrap,
    },
};

use crate::ui::theme::GameTheme;

/// What produced a chat entry; decides prefix and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The player's own message.
    Player,
    /// GM narration.
    Gm,
    /// Client or server notices (initialization, quest updates, ...).
    System,
    /// A failed action, shown but never retried.
    Error,
}

/// A single entry in the chat log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub text: String,
    pub kind: EntryKind,
}

impl ChatEntry {
    pub fn player(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: EntryKind::Player,
        }
    }

    pub fn gm(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: EntryKind::Gm,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: EntryKind::System,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: EntryKind::Error,
        }
    }
}

/// Widget for displaying the scrolling chat log
pub struct ChatLogWidget<'a> {
    entries: &'a [ChatEntry],
    scroll: usize,
    theme: &'a GameTheme,
    focused: bool,
}

impl<'a> ChatLogWidget<'a> {
    pub fn new(entries: &'a [ChatEntry], theme: &'a GameTheme) -> Self {
        Self {
            entries,
            scroll: 0,
            theme,
            focused: false,
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn style_for_kind(&self, kind: EntryKind) -> Style {
        match kind {
            EntryKind::Player => self.theme.player_style(),
            EntryKind::Gm => self.theme.gm_style(),
            EntryKind::System => self.theme.system_style(),
            EntryKind::Error => self.theme.error_style(),
        }
    }
}

impl Widget for ChatLogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.focused {
            " Chat [j/k scroll] "
        } else {
            " Chat "
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        // Build lines from chat entries
        let mut lines: Vec<Line> = Vec::new();

        for entry in self.entries {
            let style = self.style_for_kind(entry.kind);

            // Speaker prefix on the first line of the entry
            let prefix = match entry.kind {
                EntryKind::Player => "You: ",
                EntryKind::Gm => "GM: ",
                EntryKind::System | EntryKind::Error => "",
            };

            for (i, line) in entry.text.lines().enumerate() {
                let text = if i == 0 {
                    format!("{prefix}{line}")
                } else {
                    line.to_string()
                };
                lines.push(Line::from(Span::styled(text, style)));
            }
            if entry.text.is_empty() {
                lines.push(Line::from(Span::styled(prefix.to_string(), style)));
            }

            // Blank line between entries
            lines.push(Line::from(""));
        }

        // Calculate scroll position
        let visible_height = inner.height as usize;
        let total_lines = lines.len();
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll = self.scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .wrap(Wrap { trim: false });

        paragraph.render(inner, buf);

        // Render scrollbar if content exceeds visible area
        if total_lines > visible_height {
            let scrollbar_area = Rect {
                x: inner.x + inner.width.saturating_sub(1),
                y: inner.y,
                width: 1,
                height: inner.height,
            };

            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .thumb_style(Style::default().fg(Color::DarkGray))
                .track_style(Style::default().fg(Color::Black))
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(scroll);
            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);

            // Scroll position hints
            if scroll > 0 {
                let hint = format!(" ↑{scroll} ");
                draw_hint(buf, inner, inner.y, &hint);
            }
            if scroll < max_scroll {
                let remaining = max_scroll - scroll;
                let hint = format!(" ↓{remaining} more ");
                let hint_y = inner.y + inner.height.saturating_sub(1);
                draw_hint(buf, inner, hint_y, &hint);
            }
        }
    }
}

fn draw_hint(buf: &mut Buffer, inner: Rect, y: u16, hint: &str) {
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM);
    for (i, ch) in hint.chars().enumerate() {
        let x = inner.x + (i as u16);
        if x < inner.x + inner.width.saturating_sub(2) {
            buf[(x, y)].set_char(ch).set_style(hint_style);
        }
    }
}
