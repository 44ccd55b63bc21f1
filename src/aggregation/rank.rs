//! Final filtering, ordering, and plain-text rendering of the table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::table::FrequencyTable;

/// Substrings that mark a word as noise in the default configuration.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "http://", "https://", "r/", "u/", "...", "--", "deleted", "k/year", ")x", "amp;c",
];

/// Default minimum count; words at or below it are dropped.
pub const DEFAULT_MIN_COUNT: u64 = 5;

/// A word and its final count
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub count: u64,
}

impl RankedWord {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Count descending, then word ascending.
pub fn compare_ranked(a: &RankedWord, b: &RankedWord) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Whether the word is purely an integer, in any script's digits.
pub fn is_numeric(word: &str) -> bool {
    !word.is_empty() && (word.chars().all(char::is_numeric) || word.parse::<i64>().is_ok())
}

/// Whether any exclusion fragment occurs inside the word.
pub fn is_excluded(word: &str, exclusions: &[String]) -> bool {
    exclusions.iter().any(|fragment| word.contains(fragment.as_str()))
}

/// Filtering and ordering of the merged table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranker {
    min_count: u64,
    exclusions: Vec<String>,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(
            DEFAULT_MIN_COUNT,
            DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl Ranker {
    pub fn new(min_count: u64, exclusions: Vec<String>) -> Self {
        Self {
            min_count,
            exclusions,
        }
    }

    pub fn min_count(&self) -> u64 {
        self.min_count
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    /// Whether a word with `count` makes it into the output.
    pub fn keeps(&self, word: &str, count: u64) -> bool {
        count > self.min_count && !is_numeric(word) && !is_excluded(word, &self.exclusions)
    }

    /// Surviving words, highest count first, ties in lexicographic order.
    pub fn rank(&self, table: &FrequencyTable) -> Vec<RankedWord> {
        let mut ranked: Vec<RankedWord> = table
            .iter()
            .filter(|&(word, count)| self.keeps(word, count))
            .map(|(word, count)| RankedWord::new(word, count))
            .collect();
        ranked.sort_by(compare_ranked);

        log::info!(
            "Kept {} of {} words (min count {}, {} exclusions)",
            ranked.len(),
            table.len(),
            self.min_count,
            self.exclusions.len()
        );
        ranked
    }
}

/// Every entry of the table in rank order, with no filtering.
pub fn sorted_entries(table: &FrequencyTable) -> Vec<RankedWord> {
    let mut entries: Vec<RankedWord> = table
        .iter()
        .map(|(word, count)| RankedWord::new(word, count))
        .collect();
    entries.sort_by(compare_ranked);
    entries
}

/// One `word:count` line per entry.
pub fn render_lines(words: &[RankedWord]) -> String {
    words
        .iter()
        .map(|w| format!("{}:{}\n", w.word, w.count))
        .collect()
}

/// Each word repeated `count` times, space separated, for renderers that
/// weight by repetition.
pub fn render_repeated(words: &[RankedWord]) -> String {
    let mut out = String::new();
    for entry in words {
        for _ in 0..entry.count {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&entry.word);
        }
    }
    out
}
