//! Start-up configuration: default file locations and dictionary assembly
//!
//! Default files live in the OS-standard data directory (via `directories`):
//! - Linux: `$XDG_DATA_HOME/boggle/` or `~/.local/share/boggle/`
//! - macOS: `~/Library/Application Support/boggle/`

use crate::game::{WordListError, WordSet};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Word list picked up from the data directory when none is given
pub const DEFAULT_WORD_LIST: &str = "words.txt";
pub const LOG_FILE_NAME: &str = "boggle.log";

/// Get the OS-standard data directory, if the platform has one
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "boggle").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Word lists to load: the explicit ones, or the default list if it exists.
pub fn word_list_paths(explicit: &[PathBuf], data_dir: Option<&Path>) -> Vec<PathBuf> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }
    data_dir
        .map(|dir| dir.join(DEFAULT_WORD_LIST))
        .filter(|path| path.is_file())
        .into_iter()
        .collect()
}

/// Where to write the log: the explicit path, the data directory, or the
/// working directory as a last resort.
pub fn log_file_path(explicit: Option<&Path>, data_dir: Option<&Path>) -> PathBuf {
    match (explicit, data_dir) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(dir)) => dir.join(LOG_FILE_NAME),
        (None, None) => PathBuf::from(LOG_FILE_NAME),
    }
}

/// Build the dictionary: the union of every word list, minus every word in
/// the exclusion lists. `None` when there are no word lists (free play).
pub fn load_dictionary(
    words: &[PathBuf],
    exclude: &[PathBuf],
) -> Result<Option<WordSet>, WordListError> {
    if words.is_empty() {
        if !exclude.is_empty() {
            tracing::warn!("exclusion lists given without a word list; ignoring them");
        }
        return Ok(None);
    }

    let mut dictionary = WordSet::new();
    for path in words {
        dictionary.union(&WordSet::load(path)?);
    }
    for path in exclude {
        dictionary.difference(&WordSet::load(path)?);
    }

    tracing::info!(words = dictionary.len(), "dictionary ready");
    Ok(Some(dictionary))
}
