//! Boggle - find words on a grid of letter tiles
//!
//! Click (or cursor-select) adjacent tiles to spell a word, submit it,
//! and beat the clock.

pub mod app;
pub mod config;
pub mod game;
pub mod tui;
