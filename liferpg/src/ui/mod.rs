//! UI module for the Life RPG TUI

pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;

pub use render::{render, Overlay};
