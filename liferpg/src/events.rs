//! Event handling for the Life RPG TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::allocation::ModalAction;
use crate::app::{App, InputMode};
use crate::ui::Overlay;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.scroll_up(3);
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.scroll_down(3);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Overlays capture the keyboard while open
    if app.overlay().is_some() {
        return handle_overlay_key(app, key);
    }

    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    match app.input_mode() {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Insert => handle_insert_mode(app, key),
    }
}

/// Keys in NORMAL mode: vim-style navigation and hotkeys.
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        // Mode switching
        KeyCode::Char('i') | KeyCode::Enter => {
            app.enter_insert_mode();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('a') => {
            app.enter_insert_mode();
            app.move_cursor_end();
            EventResult::NeedsRedraw
        }

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.open_help();
            EventResult::NeedsRedraw
        }

        // Quit
        KeyCode::Char('q') => EventResult::Quit,

        // Game actions
        KeyCode::Char('c') => {
            app.open_character_creation();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('R') => {
            app.open_reset_confirm();
            EventResult::NeedsRedraw
        }

        // Chat navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('G') => {
            app.scroll_to_bottom();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('g') => {
            app.scroll_to_top();
            EventResult::NeedsRedraw
        }
        KeyCode::PageUp => {
            app.scroll_up(10);
            EventResult::NeedsRedraw
        }
        KeyCode::PageDown => {
            app.scroll_down(10);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_up(10);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_down(10);
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

/// Keys in INSERT mode: free text for the GM.
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.enter_normal_mode();
            EventResult::NeedsRedraw
        }

        KeyCode::Enter => {
            app.submit_message();
            EventResult::NeedsRedraw
        }

        // Input editing
        KeyCode::Left => {
            app.move_cursor_left();
            EventResult::NeedsRedraw
        }
        KeyCode::Right => {
            app.move_cursor_right();
            EventResult::NeedsRedraw
        }
        KeyCode::Home => {
            app.move_cursor_start();
            EventResult::NeedsRedraw
        }
        KeyCode::End => {
            app.move_cursor_end();
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.delete_char();
            EventResult::NeedsRedraw
        }
        KeyCode::Delete => {
            app.delete_char_forward();
            EventResult::NeedsRedraw
        }

        // Sent-message history
        KeyCode::Up => {
            app.history_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Down => {
            app.history_next();
            EventResult::NeedsRedraw
        }

        KeyCode::Char(c) => {
            app.insert_char(c);
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

/// Keys while an overlay is open.
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match app.overlay() {
        Some(Overlay::Help) => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                app.close_overlay();
                EventResult::NeedsRedraw
            }
            _ => EventResult::Continue,
        },
        Some(Overlay::CreateCharacter) => match app.allocation_mut().handle_key(key) {
            ModalAction::Submit => {
                app.submit_allocation();
                EventResult::NeedsRedraw
            }
            ModalAction::Cancel => {
                app.close_overlay();
                EventResult::NeedsRedraw
            }
            ModalAction::None => EventResult::NeedsRedraw,
        },
        Some(Overlay::ConfirmReset) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.confirm_reset();
                EventResult::NeedsRedraw
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_overlay();
                EventResult::NeedsRedraw
            }
            _ => EventResult::Continue,
        },
        None => EventResult::Continue,
    }
}
