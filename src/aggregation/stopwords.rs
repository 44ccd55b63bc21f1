//! Stopword classification.
//!
//! The set is built once before the first block and is read-only afterwards,
//! so any number of worker threads can classify tokens against it.

use std::collections::HashSet;
use std::path::Path;

use crate::errors::{Error, Result};

/// Built-in list of common English words.
const COMMON_WORDS: &str = include_str!("../../words/common-words.txt");

/// Immutable set of uninteresting tokens
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Set built from the embedded common-words list.
    pub fn common() -> Self {
        Self::from_lines(COMMON_WORDS)
    }

    /// Set with no entries; every token is interesting.
    pub fn empty() -> Self {
        Self::default()
    }

    /// One word per line; entries are trimmed and lower-cased, blanks skipped.
    pub fn from_lines(contents: &str) -> Self {
        let mut set = Self::empty();
        set.extend_from_lines(contents);
        set
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        set.extend(words);
        set
    }

    /// Add every word of `words`.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            if let Some(normalized) = normalize_entry(word.as_ref()) {
                self.words.insert(normalized);
            }
        }
    }

    pub fn extend_from_lines(&mut self, contents: &str) {
        self.extend(contents.lines());
    }

    /// Union the contents of a one-word-per-line file into the set.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::io_with_path("Failed to read word list", path, e))?;
        let before = self.words.len();
        self.extend_from_lines(&contents);
        log::debug!(
            "Loaded {} stopwords from {}",
            self.words.len() - before,
            path.display()
        );
        Ok(())
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize_entry(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace());
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}
