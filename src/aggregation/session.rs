//! One aggregation run: the owner of the global and raw tables.
//!
//! Counting a block is pure and can happen on any thread. Folding is a
//! read-modify-write on the tables and is always serialized: either by `&mut`
//! access to an [`AggregationSession`] or by the mutex inside a
//! [`SharedSession`]. The table is consistent after every individual fold, so
//! a run stopped early still holds valid counts.

use std::sync::Arc;

use chrono::Utc;
use indicatif::{ParallelProgressIterator, ProgressBar};
use parking_lot::Mutex;
use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::errors::Result;

use super::block::{BlockCounts, Entry, TextBlock};
use super::merge::MergeDecision;
use super::rank::sorted_entries;
use super::report::{FrequencyReport, ReportSummary};
use super::stopwords::StopwordSet;
use super::table::{FoldOutcome, FrequencyTable};

/// Counts blocks against the run's tokenizer, stopwords, and threshold
#[derive(Debug, Clone)]
pub struct BlockAccumulator {
    config: EngineConfig,
    stopwords: Arc<StopwordSet>,
}

impl BlockAccumulator {
    pub fn new(config: EngineConfig, stopwords: Arc<StopwordSet>) -> Self {
        Self { config, stopwords }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Tokenize and count one block. Touches no shared state.
    pub fn count(&self, text: &str) -> BlockCounts {
        BlockCounts::count(text, self.config.tokenizer(), &self.stopwords)
    }

    /// Fold counted blocks into `state`.
    pub fn fold(&self, counts: &BlockCounts, state: &mut SessionState) -> FoldOutcome {
        state.stats.blocks_seen += 1;
        state.stats.tokens_seen += counts.total();

        let outcome = state.table.fold(
            counts,
            self.config.max_threshold(),
            self.config.fold_mode(),
        );
        if outcome.skipped {
            state.stats.blocks_skipped += 1;
            return outcome;
        }

        state.raw.fold_all_words(counts);
        state.stats.words_rejected += outcome.rejected as u64;
        outcome
    }
}

/// Running totals for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub blocks_seen: u64,
    pub blocks_skipped: u64,
    pub tokens_seen: u64,
    pub words_rejected: u64,
}

/// Tables and totals mutated by folding
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub table: FrequencyTable,
    pub raw: FrequencyTable,
    pub stats: SessionStats,
}

/// Single-writer aggregation run
#[derive(Debug, Clone)]
pub struct AggregationSession {
    accumulator: BlockAccumulator,
    state: SessionState,
}

impl AggregationSession {
    pub fn new(config: EngineConfig, stopwords: StopwordSet) -> Self {
        Self::with_shared_stopwords(config, Arc::new(stopwords))
    }

    pub fn with_shared_stopwords(config: EngineConfig, stopwords: Arc<StopwordSet>) -> Self {
        Self {
            accumulator: BlockAccumulator::new(config, stopwords),
            state: SessionState::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        self.accumulator.config()
    }

    /// Count and fold one block.
    pub fn process_block(&mut self, block: TextBlock<'_>) -> FoldOutcome {
        let counts = self.accumulator.count(block.text);
        log::trace!("{:?} block: {} tokens", block.kind, counts.total());
        self.accumulator.fold(&counts, &mut self.state)
    }

    pub fn process_text(&mut self, text: &str) -> FoldOutcome {
        self.process_block(TextBlock::comment(text))
    }

    /// Fold every block of an entry in its processing order.
    pub fn process_entry(&mut self, entry: &Entry) {
        for block in entry.blocks() {
            self.process_block(block);
        }
    }

    /// Count blocks in parallel, then fold them in input order.
    pub fn process_blocks_parallel(
        &mut self,
        blocks: &[TextBlock<'_>],
        progress: Option<&ProgressBar>,
    ) {
        let accumulator = &self.accumulator;
        let counted: Vec<BlockCounts> = blocks
            .par_iter()
            .progress_with(progress.cloned().unwrap_or_else(ProgressBar::hidden))
            .map(|block| accumulator.count(block.text))
            .collect();

        for counts in &counted {
            self.accumulator.fold(counts, &mut self.state);
        }
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.state.table
    }

    /// Every token seen, stopwords included, unmerged and unfiltered.
    pub fn raw_table(&self) -> &FrequencyTable {
        &self.state.raw
    }

    pub fn stats(&self) -> SessionStats {
        self.state.stats
    }

    /// Run the morphological merge on the global table. A second call fails.
    pub fn merge(&mut self) -> Result<Vec<MergeDecision>> {
        self.accumulator.config().merger().merge(&mut self.state.table)
    }

    /// Merge, rank, and summarize. Consumes the session.
    pub fn finish(mut self) -> Result<FrequencyReport> {
        let distinct_before_merge = self.state.table.len();
        let merges = self.merge()?;

        let config = self.accumulator.config();
        let words = config.ranker().rank(&self.state.table);
        let raw = sorted_entries(&self.state.raw);
        let stats = self.state.stats;

        let summary = ReportSummary {
            blocks_seen: stats.blocks_seen,
            blocks_skipped: stats.blocks_skipped,
            tokens_seen: stats.tokens_seen,
            words_rejected: stats.words_rejected,
            distinct_before_merge,
            merges_applied: merges.len(),
            words_emitted: words.len(),
            fold_mode: config.fold_mode(),
            tokenizer: config.tokenizer(),
            max_threshold: config.max_threshold(),
            min_count: config.min_count(),
            generated_at: Utc::now(),
        };

        Ok(FrequencyReport {
            words,
            raw,
            merges,
            summary,
        })
    }
}

/// Session that many threads can feed; folds are serialized by a mutex.
#[derive(Debug)]
pub struct SharedSession {
    accumulator: BlockAccumulator,
    state: Mutex<SessionState>,
}

impl SharedSession {
    pub fn new(config: EngineConfig, stopwords: StopwordSet) -> Self {
        Self {
            accumulator: BlockAccumulator::new(config, Arc::new(stopwords)),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Count outside the lock, fold under it.
    pub fn process_block(&self, block: TextBlock<'_>) -> FoldOutcome {
        let counts = self.accumulator.count(block.text);
        let mut state = self.state.lock();
        self.accumulator.fold(&counts, &mut state)
    }

    pub fn process_entry(&self, entry: &Entry) {
        for block in entry.blocks() {
            self.process_block(block);
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.state.lock().stats
    }

    /// End concurrent feeding; the merge needs exclusive access.
    pub fn into_session(self) -> AggregationSession {
        AggregationSession {
            accumulator: self.accumulator,
            state: self.state.into_inner(),
        }
    }
}
