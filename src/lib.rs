// Export modules for library usage
pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod progress;

// Re-export commonly used types
pub use crate::aggregation::{
    AggregationSession, BlockCounts, Entry, FoldMode, FrequencyReport, FrequencyTable,
    MorphologicalMerger, RankedWord, Ranker, SharedSession, StopwordSet, TextBlock,
    TokenizerKind,
};

pub use crate::config::{EngineConfig, EngineConfigBuilder, WordFreqsConfig};

pub use crate::errors::{Error, Result};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
