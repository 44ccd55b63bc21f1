//! End-to-end behaviour of an aggregation run: folding, merging, ranking.

use pretty_assertions::assert_eq;
use wordfreqs::aggregation::{
    AggregationSession, BlockKind, Entry, FoldMode, FrequencyTable, MorphologicalMerger, Ranker,
    RankedWord, StopwordSet, TextBlock,
};
use wordfreqs::config::EngineConfig;
use wordfreqs::errors::Error;
use wordfreqs::io::parse_jsonl;

fn session(mode: FoldMode, min_count: u64) -> AggregationSession {
    let config = EngineConfig::builder()
        .fold_mode(mode)
        .min_count(min_count)
        .build()
        .unwrap();
    AggregationSession::new(config, StopwordSet::empty())
}

#[test]
fn test_folding_same_block_twice_doubles_counts() {
    let mut once = session(FoldMode::Count, 0);
    once.process_text("rust ferris crab");

    let mut twice = session(FoldMode::Count, 0);
    twice.process_text("rust ferris crab");
    twice.process_text("rust ferris crab");

    for word in ["rust", "ferris", "crab"] {
        assert_eq!(twice.table().get(word), once.table().get(word).map(|c| c * 2));
    }
}

#[test]
fn test_dominant_word_is_not_folded() {
    let mut run = session(FoldMode::Count, 0);
    let outcome = run.process_text("a a a a b");

    assert_eq!(outcome.folded, 1);
    assert_eq!(outcome.rejected, 1);
    assert_eq!(run.table().get("a"), None);
    assert_eq!(run.table().get("b"), Some(1));
    // Rejected words still reach the raw table
    assert_eq!(run.raw_table().get("a"), Some(4));
}

#[test]
fn test_merge_picks_higher_count_as_canonical() {
    let mut table: FrequencyTable = [("cat", 3), ("cats", 5)].into_iter().collect();
    MorphologicalMerger::default().merge(&mut table).unwrap();
    assert_eq!(table.get("cats"), Some(8));
    assert!(!table.contains("cat"));

    let mut table: FrequencyTable = [("furry", 2), ("furries", 7)].into_iter().collect();
    MorphologicalMerger::default().merge(&mut table).unwrap();
    assert_eq!(table.get("furries"), Some(9));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_second_merge_is_refused_without_changing_counts() {
    let mut table: FrequencyTable = [("dog", 4), ("dogs", 2)].into_iter().collect();
    let merger = MorphologicalMerger::default();
    merger.merge(&mut table).unwrap();
    let after_first = table.clone();

    assert!(matches!(merger.merge(&mut table), Err(Error::MergeAlreadyApplied)));
    assert_eq!(table, after_first);
}

#[test]
fn test_numbers_and_excluded_fragments_never_exported() {
    let table: FrequencyTable = [
        ("42", 100),
        ("http://example.com/x", 50),
        ("deleted", 40),
        ("crab", 10),
    ]
    .into_iter()
    .collect();

    let ranked = Ranker::default().rank(&table);
    assert_eq!(ranked, vec![RankedWord::new("crab", 10)]);
}

#[test]
fn test_numbers_in_other_scripts_never_exported() {
    let mut run = session(FoldMode::Count, 0);
    for _ in 0..3 {
        run.process_text("４２ ٤٢ crab");
    }
    assert_eq!(run.table().get("４２"), Some(3));
    assert_eq!(run.table().get("٤٢"), Some(3));

    let report = run.finish().unwrap();
    assert_eq!(report.lines(), "crab:3\n");
}

#[test]
fn test_ties_are_ordered_lexicographically() {
    let table: FrequencyTable = [("zebra", 9), ("apple", 9), ("mango", 12), ("kiwi", 9)]
        .into_iter()
        .collect();

    let ranked = Ranker::new(0, Vec::new()).rank(&table);
    let words: Vec<&str> = ranked.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, vec!["mango", "apple", "kiwi", "zebra"]);
}

#[test]
fn test_empty_block_leaves_table_unchanged() {
    let mut run = session(FoldMode::Count, 0);
    run.process_text("rust ferris crab");
    let before = run.table().clone();

    let outcome = run.process_text("   ");
    assert!(outcome.skipped);
    assert_eq!(run.table(), &before);
    assert_eq!(run.stats().blocks_skipped, 1);
}

#[test]
fn test_presence_mode_counts_each_block_once() {
    let mut run = session(FoldMode::Presence, 0);
    for _ in 0..7 {
        run.process_text("x x alpha beta gamma delta");
    }
    assert_eq!(run.table().get("x"), Some(7));
    assert_eq!(run.table().get("alpha"), Some(7));
}

#[test]
fn test_submission_blocks_feed_one_table() {
    let entry = Entry::Submission {
        title: "ferris the crab".to_string(),
        selftext: Some("ferris likes rust and crab".to_string()),
        comments: vec!["crab rave forever".to_string()],
    };
    let kinds: Vec<BlockKind> = entry.blocks().iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BlockKind::Comment, BlockKind::Title, BlockKind::Selftext]);

    let mut run = session(FoldMode::Count, 0);
    run.process_entry(&entry);
    assert_eq!(run.table().get("crab"), Some(3));
    assert_eq!(run.table().get("ferris"), Some(2));
}

#[test]
fn test_jsonl_corpus_to_ranked_lines() {
    let mut corpus = String::new();
    for i in 0..6 {
        corpus.push_str(&format!(
            "{{\"kind\":\"comment\",\"body\":\"my cat sleeps all day {i}\"}}\n"
        ));
        corpus.push_str("{\"kind\":\"comment\",\"body\":\"those cats chase mice\"}\n");
    }
    corpus.push_str(
        "{\"kind\":\"submission\",\"title\":\"cats and mice\",\"comments\":[\"mice everywhere, help\"]}\n",
    );

    let entries = parse_jsonl(&corpus, std::path::Path::new("corpus.jsonl")).unwrap();
    assert_eq!(entries.len(), 13);

    let config = EngineConfig::builder().build().unwrap();
    let mut run = AggregationSession::new(config, StopwordSet::common());
    for entry in &entries {
        run.process_entry(entry);
    }
    let report = run.finish().unwrap();

    // cat (6) and cats (7) merge into cats (13); mice appears 8 times
    assert_eq!(
        report.lines(),
        "cats:13\nmice:8\nchase:6\nsleeps:6\n".to_string()
    );
    assert_eq!(report.summary.blocks_seen, 14);
    assert_eq!(report.summary.merges_applied, 1);
}

#[test]
fn test_parallel_counting_matches_sequential() {
    let texts: Vec<String> = (0..200)
        .map(|i| format!("block {} of ferris crab rust number {}", i % 7, i % 3))
        .collect();
    let blocks: Vec<TextBlock<'_>> = texts.iter().map(|t| TextBlock::comment(t)).collect();

    let mut sequential = session(FoldMode::Count, 0);
    for block in &blocks {
        sequential.process_block(*block);
    }

    let mut parallel = session(FoldMode::Count, 0);
    parallel.process_blocks_parallel(&blocks, None);

    assert_eq!(parallel.table(), sequential.table());
    assert_eq!(parallel.raw_table(), sequential.raw_table());
    assert_eq!(parallel.stats(), sequential.stats());
}
