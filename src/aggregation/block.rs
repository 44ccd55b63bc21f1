//! Text blocks and per-block counting.
//!
//! A block is one title, one selftext body, or one comment. Each block is
//! counted on its own; only the tokens that survive the anti-spam threshold
//! reach the global table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::stopwords::StopwordSet;
use super::tokenizer::TokenizerKind;

/// Where a block of text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Title,
    Selftext,
    Comment,
}

/// One unit of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBlock<'a> {
    pub kind: BlockKind,
    pub text: &'a str,
}

impl<'a> TextBlock<'a> {
    pub fn new(kind: BlockKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    pub fn comment(text: &'a str) -> Self {
        Self::new(BlockKind::Comment, text)
    }
}

/// A corpus entry: either a standalone comment or a submission with its
/// title, optional selftext, and flattened comment bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Comment {
        body: String,
    },
    Submission {
        title: String,
        #[serde(default)]
        selftext: Option<String>,
        #[serde(default)]
        comments: Vec<String>,
    },
}

impl Entry {
    /// Blocks of this entry in processing order: a submission's comments
    /// come first, then its title, then its selftext.
    pub fn blocks(&self) -> Vec<TextBlock<'_>> {
        match self {
            Entry::Comment { body } => vec![TextBlock::comment(body)],
            Entry::Submission {
                title,
                selftext,
                comments,
            } => {
                let mut blocks: Vec<TextBlock<'_>> =
                    comments.iter().map(|c| TextBlock::comment(c)).collect();
                blocks.push(TextBlock::new(BlockKind::Title, title));
                if let Some(body) = selftext {
                    blocks.push(TextBlock::new(BlockKind::Selftext, body));
                }
                blocks
            }
        }
    }
}

/// How a surviving token contributes to the global table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldMode {
    /// Add the token's in-block count
    #[default]
    Count,
    /// Add one per block, however often the token appears in it
    Presence,
}

impl FoldMode {
    pub fn contribution(self, count: u64) -> u64 {
        match self {
            FoldMode::Count => count,
            FoldMode::Presence => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FoldMode::Count => "count",
            FoldMode::Presence => "presence",
        }
    }
}

/// Token counts for a single block. Dropped once folded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockCounts {
    total: u64,
    all_words: HashMap<String, u64>,
    words: HashMap<String, u64>,
}

impl BlockCounts {
    /// Tokenize and count `text`. Every token counts toward the total and the
    /// all-words tally; only non-stopwords are counted as candidates.
    pub fn count(text: &str, tokenizer: TokenizerKind, stopwords: &StopwordSet) -> Self {
        let mut counts = Self::default();
        for token in tokenizer.tokenize(text) {
            counts.total += 1;
            if !stopwords.is_stopword(&token) {
                *counts.words.entry(token.clone()).or_insert(0) += 1;
            }
            *counts.all_words.entry(token).or_insert(0) += 1;
        }
        counts
    }

    /// Number of tokens in the block, stopwords included.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Share of the block's tokens taken by `count` occurrences.
    pub fn relative_frequency(&self, count: u64) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64
    }

    /// Candidate (non-stopword) tokens and their in-block counts.
    pub fn words(&self) -> impl Iterator<Item = (&str, u64)> {
        self.words.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Every token and its in-block count, stopwords included.
    pub fn all_words(&self) -> impl Iterator<Item = (&str, u64)> {
        self.all_words.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Candidates whose relative frequency is within `max_threshold`.
    pub fn survivors(&self, max_threshold: f64) -> impl Iterator<Item = (&str, u64)> {
        self.words()
            .filter(move |&(_, count)| self.relative_frequency(count) <= max_threshold)
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(text: &str) -> BlockCounts {
        BlockCounts::count(text, TokenizerKind::Regex, &StopwordSet::from_words(["the"]))
    }

    #[test]
    fn test_stopwords_count_toward_total_only() {
        let counts = count("the cat the hat");
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get("the"), None);
        assert_eq!(counts.get("cat"), Some(1));
        assert_eq!(counts.all_words().find(|(w, _)| *w == "the"), Some(("the", 2)));
    }

    #[test]
    fn test_survivors_apply_threshold_inclusively() {
        let counts = count("a a a a b");
        let survivors: Vec<_> = counts.survivors(0.34).collect();
        assert_eq!(survivors, vec![("b", 1)]);

        // 1/3 sits just under 0.34, 0.2 exactly at a 0.2 threshold
        let counts = count("x y z");
        assert_eq!(counts.survivors(0.34).count(), 3);
        let counts = count("a b c d e");
        assert_eq!(counts.survivors(0.2).count(), 5);
    }

    #[test]
    fn test_empty_block_has_no_tokens() {
        let counts = count("   \n ");
        assert!(counts.is_empty());
        assert_eq!(counts.relative_frequency(1), 0.0);
        assert_eq!(counts.survivors(1.0).count(), 0);
    }

    #[test]
    fn test_fold_mode_contribution() {
        assert_eq!(FoldMode::Count.contribution(7), 7);
        assert_eq!(FoldMode::Presence.contribution(7), 1);
    }

    #[test]
    fn test_submission_blocks_follow_processing_order() {
        let entry = Entry::Submission {
            title: "title text".to_string(),
            selftext: Some("body text".to_string()),
            comments: vec!["first".to_string(), "second".to_string()],
        };
        let kinds: Vec<_> = entry.blocks().iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Comment,
                BlockKind::Comment,
                BlockKind::Title,
                BlockKind::Selftext
            ]
        );
    }

    #[test]
    fn test_link_submission_has_no_selftext_block() {
        let entry = Entry::Submission {
            title: "look".to_string(),
            selftext: None,
            comments: vec![],
        };
        assert_eq!(entry.blocks(), vec![TextBlock::new(BlockKind::Title, "look")]);
    }

    #[test]
    fn test_entry_deserializes_from_tagged_json() {
        let comment: Entry = serde_json::from_str(r#"{"kind":"comment","body":"hi"}"#).unwrap();
        assert_eq!(
            comment,
            Entry::Comment {
                body: "hi".to_string()
            }
        );

        let submission: Entry =
            serde_json::from_str(r#"{"kind":"submission","title":"t"}"#).unwrap();
        assert_eq!(submission.blocks().len(), 1);
    }
}
