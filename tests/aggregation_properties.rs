//! Property-based tests for word frequency aggregation
//!
//! These tests verify invariants that should hold for all inputs:
//! - Presence mode contributes at most one vote per block
//! - Refolding a block doubles its counts
//! - A word dominating its block never reaches the table
//! - Ranked output is sorted and free of numbers in any script
//! - Merging never changes the total count

use proptest::prelude::*;
use wordfreqs::aggregation::{
    AggregationSession, BlockCounts, FoldMode, FrequencyTable, MorphologicalMerger, Ranker,
    StopwordSet, TokenizerKind,
};
use wordfreqs::config::EngineConfig;

/// Lower-case word that survives both tokenizers unchanged
fn word() -> impl Strategy<Value = String> {
    "[a-z]{2,8}"
}

fn session(mode: FoldMode, max_threshold: f64) -> AggregationSession {
    let config = EngineConfig::builder()
        .fold_mode(mode)
        .max_threshold(max_threshold)
        .build()
        .unwrap();
    AggregationSession::new(config, StopwordSet::empty())
}

proptest! {
    /// Property: N blocks mentioning a word yield exactly N in presence mode,
    /// however often each block repeats it
    #[test]
    fn prop_presence_counts_blocks(repeats in prop::collection::vec(1usize..5, 1..20)) {
        let mut run = session(FoldMode::Presence, 1.0);
        for r in &repeats {
            let text = vec!["x"; *r].join(" ");
            run.process_text(&text);
        }
        prop_assert_eq!(run.table().get("x"), Some(repeats.len() as u64));
    }

    /// Property: folding a block twice doubles every count it contributed
    #[test]
    fn prop_refold_doubles(words in prop::collection::vec(word(), 1..30)) {
        let text = words.join(" ");

        let mut once = session(FoldMode::Count, 1.0);
        once.process_text(&text);
        let mut twice = session(FoldMode::Count, 1.0);
        twice.process_text(&text);
        twice.process_text(&text);

        for (w, count) in once.table().iter() {
            prop_assert_eq!(twice.table().get(w), Some(count * 2));
        }
        prop_assert_eq!(twice.table().len(), once.table().len());
    }

    /// Property: a word is folded iff its share of the block is within the threshold
    #[test]
    fn prop_threshold_decides_folding(
        words in prop::collection::vec(word(), 1..40),
        max_threshold in 0.0f64..=1.0,
    ) {
        let text = words.join(" ");
        let counts = BlockCounts::count(&text, TokenizerKind::Regex, &StopwordSet::empty());
        let mut run = session(FoldMode::Count, max_threshold);
        run.process_text(&text);

        for (w, count) in counts.words() {
            let share = count as f64 / counts.total() as f64;
            prop_assert_eq!(run.table().contains(w), share <= max_threshold);
        }
    }

    /// Property: ranked output is sorted by count desc then word asc,
    /// and contains no numeric words
    #[test]
    fn prop_ranking_is_ordered(
        entries in prop::collection::hash_map("[a-z0-9٠-٩０-９]{1,6}", 0u64..50, 0..40)
    ) {
        let table: FrequencyTable = entries.into_iter().collect();
        let ranked = Ranker::new(2, Vec::new()).rank(&table);

        for pair in ranked.windows(2) {
            let ordered = pair[0].count > pair[1].count
                || (pair[0].count == pair[1].count && pair[0].word < pair[1].word);
            prop_assert!(ordered, "{:?} before {:?}", pair[0], pair[1]);
        }
        for entry in &ranked {
            prop_assert!(entry.count > 2);
            prop_assert!(entry.word.parse::<i64>().is_err());
            prop_assert!(!entry.word.chars().all(char::is_numeric), "{} is a number", entry.word);
        }
    }

    /// Property: merging moves counts between keys without losing any
    #[test]
    fn prop_merge_preserves_total(
        entries in prop::collection::hash_map("[a-z]{1,5}(s|ies)?", 1u64..30, 0..40)
    ) {
        let mut table: FrequencyTable = entries.into_iter().collect();
        let before = table.total();
        MorphologicalMerger::default().merge(&mut table).unwrap();
        prop_assert_eq!(table.total(), before);
        prop_assert!(table.is_merged());
    }
}
