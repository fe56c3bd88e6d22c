//! Game logic: letter tiles, boards, cell selection, word lists, scoring

pub mod board;
pub mod letters;
pub mod selection;
pub mod validation;
pub mod word_list;

pub use board::{BoardError, BoggleBoard, DEFAULT_SIZE};
pub use letters::Tile;
pub use selection::{CellStatus, GridCell, SelectionError, SelectionMachine};
pub use validation::{validate_word, ValidationResult};
pub use word_list::{WordListError, WordSet};

/// Classic Boggle points by word length (in letters, so "Qu" counts twice).
pub fn score_word(word: &str) -> u32 {
    match word.trim().chars().count() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}
