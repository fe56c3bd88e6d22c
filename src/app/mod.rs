//! Application state and core logic

pub mod state;

pub use state::{App, FoundWord, Move, DEFAULT_ROUND_DURATION};
