//! Word frequency aggregation engine.
//!
//! Data flows one way through the submodules:
//!
//! ```text
//! tokenizer → stopwords → block (BlockCounts) → table (fold)
//!           → merge (singular/plural) → rank (filter, sort, render)
//! ```
//!
//! [`AggregationSession`] ties the steps together for a single run.
//!
//! # Example
//!
//! ```
//! use wordfreqs::aggregation::{AggregationSession, StopwordSet};
//! use wordfreqs::config::EngineConfig;
//!
//! let config = EngineConfig::builder().min_count(1).build().unwrap();
//! let mut session = AggregationSession::new(config, StopwordSet::common());
//!
//! session.process_text("Cats chase mice. My cat naps while the cats play.");
//! session.process_text("Cats rule, mice drool, cat videos forever.");
//!
//! let report = session.finish().unwrap();
//! assert_eq!(report.words[0].word, "cats");
//! ```

pub mod block;
pub mod merge;
pub mod rank;
pub mod report;
pub mod session;
pub mod stopwords;
pub mod table;
pub mod tokenizer;

pub use block::{BlockCounts, BlockKind, Entry, FoldMode, TextBlock};
pub use merge::{MergeDecision, MorphologicalMerger, PluralRule};
pub use rank::{render_lines, render_repeated, RankedWord, Ranker};
pub use report::{FrequencyReport, ReportSummary};
pub use session::{
    AggregationSession, BlockAccumulator, SessionState, SessionStats, SharedSession,
};
pub use stopwords::StopwordSet;
pub use table::{FoldOutcome, FrequencyTable};
pub use tokenizer::TokenizerKind;
