//! Layout calculations for the Life RPG TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculate the main layout areas
pub struct AppLayout {
    pub title_area: Rect,
    pub chat_area: Rect,
    pub player_area: Rect,
    pub inventory_area: Rect,
    pub quests_area: Rect,
    pub illustration_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
    pub input_area: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        // Main vertical split
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(8),    // Main content
                Constraint::Length(3), // Input area
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Hotkey bar
            ])
            .split(area);

        // Content area: chat log + sidebar
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(36)])
            .split(main_chunks[1]);

        // Sidebar: player panel, inventory, quests, illustration
        let sidebar_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(12),     // Player panel
                Constraint::Percentage(35), // Inventory
                Constraint::Min(5),         // Quests
                Constraint::Length(4),      // Illustration
            ])
            .split(content_chunks[1]);

        Self {
            title_area: main_chunks[0],
            chat_area: content_chunks[0],
            player_area: sidebar_chunks[0],
            inventory_area: sidebar_chunks[1],
            quests_area: sidebar_chunks[2],
            illustration_area: sidebar_chunks[3],
            input_area: main_chunks[2],
            status_bar: main_chunks[3],
            hotkey_bar: main_chunks[4],
        }
    }
}

/// Calculate fixed-size centered popup
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_covers_standard_terminal() {
        let layout = AppLayout::calculate(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.title_area.height, 1);
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.hotkey_bar.height, 1);
        // Chat and sidebar split the content row.
        assert_eq!(
            layout.chat_area.width + layout.player_area.width,
            120,
            "chat and sidebar should span the full width"
        );
        assert_eq!(layout.player_area.width, 36);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_rect_fixed(60, 20, area);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }
}
