//! Normalized word sets used as dictionaries and found-word lists.
//!
//! Words are trimmed and lowercased before they are stored or compared,
//! so " Cat\n", "CAT" and "cat" are the same entry.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Failure to load a word list. Loading is all-or-nothing.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to open word list {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to read word list: {0}")]
    Read(#[from] io::Error),
}

/// A set of normalized words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one word per line from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| WordListError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let words = Self::from_reader(BufReader::new(file))?;
        tracing::info!(path = %path.display(), count = words.len(), "loaded word list");
        Ok(words)
    }

    /// Read one word per line. A read error discards everything read so far.
    ///
    /// Lines that are not valid UTF-8 (e.g. Latin-1 lists) are decoded
    /// lossily rather than failing the load.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, WordListError> {
        let mut words = Self::new();
        let mut line = Vec::new();
        while reader.read_until(b'\n', &mut line)? > 0 {
            let word = String::from_utf8_lossy(&line);
            if matches!(word, Cow::Owned(_)) {
                tracing::warn!(line = %word.trim(), "word list line is not valid UTF-8");
            }
            words.add(&word);
            line.clear();
        }
        Ok(words)
    }

    /// Add a word. Returns true if it was not already present.
    /// Words that are empty after trimming are ignored.
    pub fn add(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Add every word of `other` to this set.
    pub fn union(&mut self, other: &WordSet) {
        self.words.extend(other.words.iter().cloned());
    }

    /// Remove every word of `other` from this set.
    pub fn difference(&mut self, other: &WordSet) {
        self.words.retain(|w| !other.words.contains(w));
    }

    /// Words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words in alphabetical order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> Extend<S> for WordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut words = Self::new();
        words.extend(iter);
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    /// Write `contents` to a unique temp file and return its path.
    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "boggle-{}-{}.txt",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_empty_set() {
        let words = WordSet::new();
        assert_eq!(words.len(), 0);
        assert!(words.is_empty());
        assert!(!words.contains("word"));
    }

    #[test]
    fn test_add_and_contains() {
        let mut words = WordSet::new();
        assert!(words.add("first"));
        assert!(words.add("second"));
        assert!(words.add("third"));

        assert_eq!(words.len(), 3);
        assert!(words.contains("first"));
        assert!(words.contains("second"));
        assert!(words.contains("third"));
        assert!(!words.contains("none"));
        assert!(!words.contains("fourth"));
    }

    #[test]
    fn test_add_normalizes() {
        let mut words = WordSet::new();
        words.add("FiRst");
        words.add("   second");
        words.add("third   ");
        words.add(" FOURTH ");

        assert!(words.contains("first"));
        assert!(words.contains("second"));
        assert!(words.contains("third"));
        assert!(words.contains("fourth"));
        assert!(words.contains("  FIRST\t"));
        assert_eq!(words.sorted(), vec!["first", "fourth", "second", "third"]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut words = WordSet::new();
        assert!(words.add("a"));
        assert!(!words.add("A"));
        assert!(!words.add(" a "));
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_blank_words_are_skipped() {
        let mut words = WordSet::new();
        assert!(!words.add(""));
        assert!(!words.add("   "));
        assert!(!words.add("\t\n"));
        assert!(words.is_empty());
    }

    #[test]
    fn test_union_distinct() {
        let mut list1: WordSet = ["first", "second"].into_iter().collect();
        let list2: WordSet = ["third", "fourth"].into_iter().collect();
        list1.union(&list2);

        assert_eq!(list1.len(), 4);
        assert_eq!(list2.len(), 2);
        assert!(list1.contains("third"));
        assert!(list1.contains("fourth"));
        assert!(!list2.contains("first"));
    }

    #[test]
    fn test_union_overlapping() {
        let mut list1: WordSet = ["a", "b"].into_iter().collect();
        let list2: WordSet = ["b", "c"].into_iter().collect();
        list1.union(&list2);

        assert_eq!(list1.sorted(), vec!["a", "b", "c"]);
        assert_eq!(list2.sorted(), vec!["b", "c"]);
    }

    #[test]
    fn test_difference_distinct() {
        let mut list1: WordSet = ["first", "second"].into_iter().collect();
        let list2: WordSet = ["third", "fourth"].into_iter().collect();
        list1.difference(&list2);

        assert_eq!(list1.len(), 2);
        assert_eq!(list2.len(), 2);
    }

    #[test]
    fn test_difference_common() {
        let mut list1: WordSet = ["a", "b"].into_iter().collect();
        let list2: WordSet = ["A ", "c"].into_iter().collect();
        list1.difference(&list2);

        assert_eq!(list1.sorted(), vec!["b"]);
        assert_eq!(list2.sorted(), vec!["a", "c"]);
    }

    #[test]
    fn test_from_reader_collapses_duplicates() {
        let input = Cursor::new("first\nSECOND\n third \n\nfirst\n");
        let words = WordSet::from_reader(input).unwrap();
        assert_eq!(words.sorted(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_from_reader_tolerates_invalid_utf8() {
        let input = Cursor::new(b"caf\xe9\nfirst\r\nsecond".to_vec());
        let words = WordSet::from_reader(input).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains("first"));
        assert!(words.contains("second"));
        assert!(words.contains("caf\u{fffd}"));
    }

    /// Reader that yields one line and then fails.
    struct BrokenReader {
        served: bool,
    }

    impl Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("disk on fire"));
            }
            self.served = true;
            let line = b"first\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    #[test]
    fn test_read_failure_discards_partial_list() {
        let reader = BufReader::new(BrokenReader { served: false });
        let result = WordSet::from_reader(reader);
        assert!(matches!(result, Err(WordListError::Read(_))));
    }

    #[test]
    fn test_load_file() {
        let path = temp_file("load", "first\nSECOND\n third \nfirst\n");
        let words = WordSet::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
        assert!(words.contains("first"));
        assert!(words.contains("second"));
        assert!(words.contains("third"));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("boggle-definitely-missing.txt");
        assert!(!path.exists());
        match WordSet::load(&path) {
            Err(WordListError::Open { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Open error, got {:?}", other),
        }
    }
}
