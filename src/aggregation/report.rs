use chrono::{DateTime, Utc};
use serde::Serialize;

use super::block::FoldMode;
use super::merge::MergeDecision;
use super::rank::{render_lines, render_repeated, RankedWord};
use super::tokenizer::TokenizerKind;

/// Totals describing how a run arrived at its word list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub blocks_seen: u64,
    pub blocks_skipped: u64,
    pub tokens_seen: u64,
    pub words_rejected: u64,
    pub distinct_before_merge: usize,
    pub merges_applied: usize,
    pub words_emitted: usize,
    pub fold_mode: FoldMode,
    pub tokenizer: TokenizerKind,
    pub max_threshold: f64,
    pub min_count: u64,
    pub generated_at: DateTime<Utc>,
}

/// Final output of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyReport {
    /// Ranked, merged, filtered words
    pub words: Vec<RankedWord>,
    /// Every token seen, stopwords included, in rank order
    #[serde(skip)]
    pub raw: Vec<RankedWord>,
    pub merges: Vec<MergeDecision>,
    pub summary: ReportSummary,
}

impl FrequencyReport {
    /// Keep only the first `n` ranked words.
    pub fn truncate(&mut self, n: usize) {
        self.words.truncate(n);
        self.summary.words_emitted = self.words.len();
    }

    pub fn lines(&self) -> String {
        render_lines(&self.words)
    }

    pub fn repeated(&self) -> String {
        render_repeated(&self.words)
    }

    pub fn raw_lines(&self) -> String {
        render_lines(&self.raw)
    }
}
