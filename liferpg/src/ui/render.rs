//! Render orchestration for the Life RPG TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::allocation;
use crate::app::{App, InputMode};
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{
    ChatLogWidget, HotkeyBarWidget, InputWidget, InventoryWidget, PlayerPanelWidget, QuestsWidget,
    StatusBarWidget,
};

/// Overlay types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    CreateCharacter,
    ConfirmReset,
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    render_title_bar(frame, app, layout.title_area);

    let chat_widget = ChatLogWidget::new(app.chat(), app.theme())
        .scroll(app.chat_scroll())
        .focused(app.input_mode() == InputMode::Normal && app.overlay().is_none());
    frame.render_widget(chat_widget, layout.chat_area);

    frame.render_widget(
        PlayerPanelWidget::new(app.player(), app.theme()),
        layout.player_area,
    );
    frame.render_widget(
        InventoryWidget::new(&app.player().inventory, app.theme()),
        layout.inventory_area,
    );
    frame.render_widget(
        QuestsWidget::new(&app.player().active_quests, app.theme()),
        layout.quests_area,
    );
    render_illustration(frame, app, layout.illustration_area);

    render_input(frame, app, layout.input_area);

    let status_widget = StatusBarWidget::new(app.player(), app.input_mode(), app.theme())
        .message(app.status_message())
        .busy(app.request_in_flight(), app.animation_frame());
    frame.render_widget(status_widget, layout.status_bar);

    frame.render_widget(
        HotkeyBarWidget::new(app.input_mode(), app.overlay()),
        layout.hotkey_bar,
    );

    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, overlay, area);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let player = app.player();
    let title = format!(
        " Life RPG | Lv {} | XP {}/{} ",
        player.level, player.xp, player.xp_to_next_level
    );
    let line = Line::from(Span::styled(title, app.theme().title_style()));
    frame.render_widget(Paragraph::new(line), area);
}

/// The latest item image the server generated, shown as a link since a
/// terminal cannot display the image itself.
fn render_illustration(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Illustration ")
        .borders(Borders::ALL)
        .border_style(app.theme().border_style(false));

    let content = match app.illustration_url() {
        Some(url) => Paragraph::new(url.to_string())
            .style(app.theme().illustration_style())
            .wrap(Wrap { trim: true }),
        None => Paragraph::new("No item image yet.").style(app.theme().hint_style()),
    };

    frame.render_widget(content.block(block), area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let is_active = app.input_mode() == InputMode::Insert && app.overlay().is_none();

    let input_widget = InputWidget::new(app.input(), app.theme())
        .cursor_position(app.cursor_position())
        .active(is_active)
        .placeholder("Type a message for the GM...");

    frame.render_widget(input_widget, area);
}

fn render_overlay(frame: &mut Frame, app: &App, overlay: Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help_overlay(frame, app, area),
        Overlay::CreateCharacter => {
            let popup_area = centered_rect_fixed(52, 18, area);
            frame.render_widget(Clear, popup_area);
            allocation::render(frame, popup_area, app.allocation(), app.theme());
        }
        Overlay::ConfirmReset => render_reset_confirm(frame, app, area),
    }
}

fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(58, 24, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            " Life RPG - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Keys (NORMAL mode):",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  i/Enter        Type a message"),
        Line::from("  j/k or ↑/↓     Scroll the chat"),
        Line::from("  g/G            Jump to top/bottom"),
        Line::from("  c              Create character (allocate stats)"),
        Line::from("  R              Reset all progress"),
        Line::from("  q              Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Keys (INSERT mode):",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  Enter          Send the message"),
        Line::from("  ↑/↓            Walk through sent messages"),
        Line::from("  Esc            Back to NORMAL mode"),
        Line::from(""),
        Line::from(Span::styled(
            "Stats:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  Strength (힘), Intelligence (지능), Willpower (의지력),"),
        Line::from("  Health (체력), Charisma (매력)"),
        Line::from(""),
        Line::from("Slash commands like /스탯 and /인벤토리 are sent as-is;"),
        Line::from("the server answers them directly."),
        Line::from(Span::styled(
            "Press Esc to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme().border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

fn render_reset_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(56, 7, area);
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from("Are you sure you want to reset all game progress?"),
        Line::from(Span::styled(
            "This cannot be undone.",
            app.theme().error_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y: reset    n: cancel",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Reset Game ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(Paragraph::new(text).block(block), popup_area);
}
