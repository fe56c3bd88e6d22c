//! Terminal UI components using ratatui

mod terminal;
mod ui;

pub use terminal::Tui;
pub use ui::{board_area, cell_at, render};
