//! TUI widgets for the Life RPG client

pub mod chat_log;
pub mod input;
pub mod inventory;
pub mod player_panel;
pub mod quests;
pub mod status_bar;

pub use chat_log::ChatLogWidget;
pub use input::InputWidget;
pub use inventory::InventoryWidget;
pub use player_panel::PlayerPanelWidget;
pub use quests::QuestsWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
