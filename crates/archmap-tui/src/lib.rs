//! archmap-tui - Terminal UI for archmap
//!
//! Draws the mind map with ratatui, polls crossterm events, and resolves
//! mouse clicks against the same layout the renderer uses.

pub mod event;
pub mod geometry;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{render_to_string, run};
