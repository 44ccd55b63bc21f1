//! Run-scoped word → count tables.

use std::collections::HashMap;

use super::block::{BlockCounts, FoldMode};

/// What a single fold did to the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldOutcome {
    /// Tokens added to the table
    pub folded: usize,
    /// Tokens rejected by the anti-spam threshold
    pub rejected: usize,
    /// Whether the block was empty and skipped
    pub skipped: bool,
}

/// Mapping from normalized word to accumulated count.
///
/// The global table only ever holds positive counts. It records whether the
/// morphological merge has already been applied so that a second merge can be
/// refused instead of double-counting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    merged: bool,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one block's surviving candidates into the table.
    pub fn fold(&mut self, block: &BlockCounts, max_threshold: f64, mode: FoldMode) -> FoldOutcome {
        if block.is_empty() {
            log::trace!("Skipping empty block");
            return FoldOutcome {
                skipped: true,
                ..FoldOutcome::default()
            };
        }

        let mut outcome = FoldOutcome::default();
        for (word, count) in block.survivors(max_threshold) {
            self.add(word, mode.contribution(count));
            outcome.folded += 1;
        }

        outcome.rejected = block.words().count() - outcome.folded;
        if outcome.rejected > 0 {
            log::debug!(
                "Rejected {} of {} candidate words above {:.2} in a {}-token block",
                outcome.rejected,
                block.words().count(),
                max_threshold,
                block.total()
            );
        }
        outcome
    }

    /// Add every token of the block, stopwords included, with no threshold.
    pub fn fold_all_words(&mut self, block: &BlockCounts) {
        for (word, count) in block.all_words() {
            self.add(word, count);
        }
    }

    pub fn add(&mut self, word: &str, amount: u64) {
        if amount == 0 {
            return;
        }
        match self.counts.get_mut(word) {
            Some(count) => *count += amount,
            None => {
                self.counts.insert(word.to_string(), amount);
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    pub fn remove(&mut self, word: &str) -> Option<u64> {
        self.counts.remove(word)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Words in ascending lexicographic order, copied out of the table.
    pub fn sorted_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.counts.keys().cloned().collect();
        words.sort_unstable();
        words
    }

    pub fn is_merged(&self) -> bool {
        self.merged
    }

    pub(crate) fn mark_merged(&mut self) {
        self.merged = true;
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (word, count) in iter {
            let word = word.into();
            table.add(&word, count);
        }
        table
    }
}
