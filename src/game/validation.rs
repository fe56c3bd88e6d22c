//! Word validation for submitted selections
//!
//! Validates submitted words against:
//! - Minimum length (3 letters)
//! - Words already found this round
//! - Dictionary presence (when a dictionary is loaded)

use super::word_list::WordSet;

/// Minimum word length for valid submissions
pub const MIN_WORD_LENGTH: usize = 3;

/// Result of word validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Word is valid
    Valid,
    /// Word is too short (less than 3 letters)
    TooShort { length: usize },
    /// Word was already found this round
    AlreadyFound,
    /// Word not found in dictionary
    NotInDictionary,
}

impl ValidationResult {
    /// Returns true if the word is valid
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns a user-friendly message
    pub fn message(&self) -> String {
        match self {
            ValidationResult::Valid => "Valid word!".to_string(),
            ValidationResult::TooShort { length } => {
                format!("Too short ({} letters, need {}+)", length, MIN_WORD_LENGTH)
            }
            ValidationResult::AlreadyFound => "Already found".to_string(),
            ValidationResult::NotInDictionary => "Not in dictionary".to_string(),
        }
    }
}

/// Validate a word formed on the board.
///
/// Checks in order:
/// 1. Length >= 3
/// 2. Not already found
/// 3. Word exists in dictionary (skipped when `dictionary` is `None`)
///
/// The word is always formable because the selection rules only allow
/// adjacent, unused cells.
pub fn validate_word(word: &str, dictionary: Option<&WordSet>, found: &WordSet) -> ValidationResult {
    let length = word.trim().chars().count();
    if length < MIN_WORD_LENGTH {
        return ValidationResult::TooShort { length };
    }

    if found.contains(word) {
        return ValidationResult::AlreadyFound;
    }

    if let Some(dictionary) = dictionary {
        if !dictionary.contains(word) {
            return ValidationResult::NotInDictionary;
        }
    }

    ValidationResult::Valid
}
