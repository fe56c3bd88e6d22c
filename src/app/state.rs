//! Application state management

use crate::game::{
    score_word, validate_word, BoardError, BoggleBoard, SelectionError, SelectionMachine,
    ValidationResult, WordSet,
};
use rand::rngs::StdRng;

/// Default round duration in seconds (classic three-minute timer)
pub const DEFAULT_ROUND_DURATION: u32 = 180;

/// A word accepted this round with its point value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub points: u32,
}

/// Cursor movement for keyboard play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Feedback message from last action
    pub feedback: String,
    /// Current score
    pub score: u32,
    /// Time remaining in seconds
    pub time_remaining: u32,
    /// Whether the round has ended (timer hit 0)
    pub round_ended: bool,
    board: BoggleBoard,
    selection: SelectionMachine,
    /// `None` means free play: any word of legal length is accepted
    dictionary: Option<WordSet>,
    /// Words accepted this round, for duplicate checks
    found: WordSet,
    /// Words accepted this round, in the order they were found
    found_words: Vec<FoundWord>,
    round_duration: u32,
    /// Keyboard cursor as `(x, y)`
    cursor: (usize, usize),
    rng: StdRng,
}

impl App {
    /// Create a new game with a freshly generated board.
    pub fn new(
        size: usize,
        round_duration: u32,
        dictionary: Option<WordSet>,
        mut rng: StdRng,
    ) -> Result<Self, BoardError> {
        let board = BoggleBoard::generate_with_rng(size, &mut rng)?;
        let selection = SelectionMachine::with_board(&board);
        tracing::info!(size, round_duration, "new game");

        let mut app = Self {
            should_quit: false,
            feedback: String::new(),
            score: 0,
            time_remaining: round_duration,
            round_ended: false,
            board,
            selection,
            dictionary,
            found: WordSet::new(),
            found_words: Vec::new(),
            round_duration,
            cursor: (0, 0),
            rng,
        };
        app.start_clock();
        Ok(app)
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn board(&self) -> &BoggleBoard {
        &self.board
    }

    pub fn selection(&self) -> &SelectionMachine {
        &self.selection
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// The word spelled by the current selection
    pub fn current_word(&self) -> String {
        self.selection.current_word()
    }

    /// Number of words in the loaded dictionary, if any
    pub fn dictionary_size(&self) -> Option<usize> {
        self.dictionary.as_ref().map(WordSet::len)
    }

    /// Words accepted this round, in the order they were found
    pub fn found_words(&self) -> &[FoundWord] {
        &self.found_words
    }

    /// Replace the displayed board. The size must match the current grid.
    pub fn set_board(&mut self, board: BoggleBoard) -> Result<(), SelectionError> {
        self.selection.set_board(&board)?;
        self.board = board;
        self.cursor = (0, 0);
        Ok(())
    }

    /// Handle a click on cell `(x, y)` (locked when round is over)
    pub fn on_click(&mut self, x: usize, y: usize) {
        if self.round_ended {
            return;
        }
        if let Err(e) = self.selection.handle_click(x, y) {
            tracing::warn!("click rejected: {}", e);
            return;
        }
        self.cursor = (x, y);
        self.feedback.clear();
        tracing::debug!(x, y, word = %self.selection.current_word(), "click");
    }

    /// Click the cell under the keyboard cursor
    pub fn on_select(&mut self) {
        let (x, y) = self.cursor;
        self.on_click(x, y);
    }

    /// Move the keyboard cursor, clamped to the board
    pub fn on_move(&mut self, dir: Move) {
        let max = self.board.size() - 1;
        let (x, y) = self.cursor;
        self.cursor = match dir {
            Move::Up => (x.saturating_sub(1), y),
            Move::Down => ((x + 1).min(max), y),
            Move::Left => (x, y.saturating_sub(1)),
            Move::Right => (x, (y + 1).min(max)),
        };
    }

    /// Undo the most recent selection (locked when round is over)
    pub fn on_backspace(&mut self) {
        if self.round_ended {
            return;
        }
        self.selection.undo();
        self.feedback.clear();
    }

    /// Clear the whole selection (locked when round is over)
    pub fn on_clear(&mut self) {
        if self.round_ended {
            return;
        }
        self.selection.reset();
        self.feedback.clear();
    }

    /// Handle word submission (locked when round is over)
    pub fn on_submit(&mut self) {
        if self.round_ended {
            return;
        }
        let word = self.selection.current_word();
        if word.is_empty() {
            return;
        }
        let word_upper = word.to_uppercase();

        let result = validate_word(&word, self.dictionary.as_ref(), &self.found);
        match result {
            ValidationResult::Valid => {
                let points = score_word(&word);
                self.score += points;
                self.found.add(&word);
                self.feedback = format!("OK +{} ({})", points, word_upper);
                tracing::info!(word = %word_upper, points, "word accepted");
                self.found_words.push(FoundWord {
                    word: word_upper,
                    points,
                });
            }
            _ => {
                self.feedback = format!("{}: {}", word_upper, result.message());
                tracing::debug!(word = %word_upper, ?result, "word rejected");
            }
        }

        self.selection.reset();
    }

    /// Update the timer and trigger end-of-round when it hits zero
    pub fn tick(&mut self) {
        if self.time_remaining > 0 {
            self.time_remaining -= 1;
            if self.time_remaining == 0 {
                self.end_round();
            }
        }
    }

    /// End the current round (locks input, shows results)
    fn end_round(&mut self) {
        self.round_ended = true;
        self.selection.reset();
        self.feedback = "TIME'S UP!".to_string();
        tracing::info!(score = self.score, words = self.found_words.len(), "round over");
    }

    /// Start a new round on a fresh board of the same size
    pub fn new_round(&mut self) {
        let size = self.board.size();
        let board = match BoggleBoard::generate_with_rng(size, &mut self.rng) {
            Ok(board) => board,
            Err(e) => {
                tracing::error!("failed to generate board: {}", e);
                return;
            }
        };
        if let Err(e) = self.set_board(board) {
            tracing::error!("failed to display board: {}", e);
            return;
        }

        self.score = 0;
        self.feedback.clear();
        self.found = WordSet::new();
        self.found_words.clear();
        self.start_clock();
    }

    /// Reset the timer. A zero-length round is over before it starts.
    fn start_clock(&mut self) {
        self.time_remaining = self.round_duration;
        self.round_ended = false;
        if self.round_duration == 0 {
            self.end_round();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::CellStatus;
    use rand::SeedableRng;

    /// C A T
    /// O R E
    /// D Qu S
    fn app_with(dictionary: Option<WordSet>) -> App {
        let rng = StdRng::seed_from_u64(1);
        let mut app = App::new(3, 10, dictionary, rng).unwrap();
        let board = BoggleBoard::from_rows(&[
            vec!["C", "A", "T"],
            vec!["O", "R", "E"],
            vec!["D", "Qu", "S"],
        ])
        .unwrap();
        app.set_board(board).unwrap();
        app
    }

    fn app() -> App {
        app_with(Some(["cat", "rate", "cats", "quest"].into_iter().collect()))
    }

    fn spell(app: &mut App, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            app.on_click(x, y);
        }
    }

    #[test]
    fn test_new_rejects_zero_size() {
        let rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            App::new(0, 10, None, rng),
            Err(BoardError::InvalidSize { size: 0 })
        ));
    }

    #[test]
    fn test_submit_valid_word() {
        let mut app = app();
        spell(&mut app, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(app.current_word(), "CAT");
        app.on_submit();

        assert_eq!(app.score, 1);
        assert_eq!(app.feedback, "OK +1 (CAT)");
        assert_eq!(
            app.found_words(),
            &[FoundWord {
                word: "CAT".to_string(),
                points: 1
            }]
        );
        // Selection is cleared after submitting
        assert_eq!(app.current_word(), "");
    }

    #[test]
    fn test_submit_duplicate_word() {
        let mut app = app();
        spell(&mut app, &[(0, 0), (0, 1), (0, 2)]);
        app.on_submit();
        spell(&mut app, &[(0, 0), (0, 1), (0, 2)]);
        app.on_submit();

        assert_eq!(app.score, 1);
        assert_eq!(app.found_words().len(), 1);
        assert_eq!(app.feedback, "CAT: Already found");
    }

    #[test]
    fn test_submit_unknown_word() {
        let mut app = app();
        spell(&mut app, &[(0, 2), (0, 1), (0, 0)]);
        app.on_submit();
        assert_eq!(app.score, 0);
        assert_eq!(app.feedback, "TAC: Not in dictionary");
    }

    #[test]
    fn test_submit_qu_word() {
        let mut app = app();
        spell(&mut app, &[(2, 1), (1, 2), (2, 2), (1, 1)]);
        assert_eq!(app.current_word(), "QuESR");
        app.on_submit();
        assert_eq!(app.feedback, "QUESR: Not in dictionary");
    }

    #[test]
    fn test_free_play_accepts_any_word() {
        let mut app = app_with(None);
        assert_eq!(app.dictionary_size(), None);
        spell(&mut app, &[(0, 2), (0, 1), (0, 0)]);
        app.on_submit();
        assert_eq!(app.score, 1);
    }

    #[test]
    fn test_submit_empty_selection_does_nothing() {
        let mut app = app();
        app.on_submit();
        assert!(app.feedback.is_empty());
        assert_eq!(app.score, 0);
    }

    #[test]
    fn test_keyboard_cursor_selects() {
        let mut app = app();
        app.on_move(Move::Up);
        app.on_move(Move::Left);
        assert_eq!(app.cursor(), (0, 0));
        app.on_select();
        app.on_move(Move::Right);
        app.on_select();
        app.on_move(Move::Right);
        app.on_move(Move::Right);
        assert_eq!(app.cursor(), (0, 2));
        app.on_select();
        assert_eq!(app.current_word(), "CAT");

        app.on_move(Move::Down);
        app.on_move(Move::Down);
        app.on_move(Move::Down);
        assert_eq!(app.cursor(), (2, 2));
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut app = app();
        spell(&mut app, &[(0, 0), (0, 1), (0, 2)]);
        app.on_backspace();
        assert_eq!(app.current_word(), "CA");
        app.on_clear();
        assert_eq!(app.current_word(), "");
        assert_eq!(app.selection().status(2, 2), Some(CellStatus::Available));
    }

    #[test]
    fn test_out_of_bounds_click_is_ignored() {
        let mut app = app();
        app.on_click(5, 5);
        assert_eq!(app.current_word(), "");
        assert_eq!(app.cursor(), (0, 0));
    }

    #[test]
    fn test_timer_ends_round() {
        let mut app = app();
        app.on_click(0, 0);
        for _ in 0..10 {
            app.tick();
        }
        assert!(app.round_ended);
        assert_eq!(app.time_remaining, 0);
        assert_eq!(app.feedback, "TIME'S UP!");
        assert_eq!(app.current_word(), "");

        // Input is locked
        spell(&mut app, &[(0, 0), (0, 1), (0, 2)]);
        app.on_submit();
        assert_eq!(app.current_word(), "");
        assert_eq!(app.score, 0);

        // Extra ticks are harmless
        app.tick();
        assert_eq!(app.time_remaining, 0);
    }

    #[test]
    fn test_zero_duration_round_is_over_immediately() {
        let rng = StdRng::seed_from_u64(1);
        let mut app = App::new(3, 0, None, rng).unwrap();
        assert!(app.round_ended);
        assert_eq!(app.feedback, "TIME'S UP!");

        for _ in 0..5 {
            app.tick();
        }
        assert!(app.round_ended);
        assert_eq!(app.time_remaining, 0);

        app.on_select();
        assert_eq!(app.current_word(), "");

        app.new_round();
        assert!(app.round_ended);
        assert_eq!(app.time_remaining, 0);
    }

    #[test]
    fn test_new_round_resets_state() {
        let mut app = app();
        spell(&mut app, &[(0, 0), (0, 1), (0, 2)]);
        app.on_submit();
        for _ in 0..10 {
            app.tick();
        }

        app.new_round();
        assert!(!app.round_ended);
        assert_eq!(app.score, 0);
        assert_eq!(app.time_remaining, 10);
        assert!(app.found_words().is_empty());
        assert_eq!(app.board().size(), 3);
    }

    #[test]
    fn test_set_board_dimension_mismatch() {
        let mut app = app();
        let board = BoggleBoard::from_rows(&[vec!["A"]]).unwrap();
        assert_eq!(
            app.set_board(board),
            Err(SelectionError::DimensionMismatch {
                expected: 3,
                found: 1
            })
        );
        assert_eq!(app.board().size(), 3);
    }
}
