use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::aggregation::rank::{DEFAULT_EXCLUSIONS, DEFAULT_MIN_COUNT};
use crate::aggregation::{FoldMode, StopwordSet, TokenizerKind};
use crate::errors::Result;
use crate::io::output::OutputFormat;

use super::engine::{EngineConfig, DEFAULT_MAX_THRESHOLD};

/// Root configuration structure, as read from `.wordfreqs.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WordFreqsConfig {
    /// Block counting and folding
    #[serde(default)]
    pub aggregation: AggregationSettings,

    /// Stopword sources
    #[serde(default)]
    pub stopwords: StopwordSettings,

    /// Singular/plural merging
    #[serde(default)]
    pub merge: MergeSettings,

    /// Ranking and rendering
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregationSettings {
    /// Maximum share of a block one word may take and still be counted
    #[serde(default = "default_max_threshold")]
    pub max_threshold: f64,

    #[serde(default)]
    pub fold_mode: FoldMode,

    #[serde(default)]
    pub tokenizer: TokenizerKind,

    /// Count blocks on the rayon pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Worker threads, 0 = one per core
    #[serde(default)]
    pub jobs: usize,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            max_threshold: default_max_threshold(),
            fold_mode: FoldMode::default(),
            tokenizer: TokenizerKind::default(),
            parallel: default_parallel(),
            jobs: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StopwordSettings {
    /// Also treat every dictionary word as a stopword
    #[serde(default)]
    pub strict: bool,

    /// Replaces the built-in common-words list
    #[serde(default)]
    pub common_words: Option<PathBuf>,

    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,

    #[serde(default)]
    pub extra: Vec<String>,
}

impl Default for StopwordSettings {
    fn default() -> Self {
        Self {
            strict: false,
            common_words: None,
            dictionary: default_dictionary(),
            extra: Vec::new(),
        }
    }
}

impl StopwordSettings {
    /// Build the run's stopword set. Runs once, before the first block.
    pub fn load(&self) -> Result<StopwordSet> {
        let mut set = match &self.common_words {
            Some(path) => {
                let mut set = StopwordSet::empty();
                set.extend_from_file(path)?;
                set
            }
            None => StopwordSet::common(),
        };

        if self.strict {
            set.extend_from_file(&self.dictionary)?;
        }
        set.extend(&self.extra);

        log::info!("Loaded {} stopwords (strict: {})", set.len(), self.strict);
        Ok(set)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MergeSettings {
    /// Also fold `word's` into `word`
    #[serde(default)]
    pub possessive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputSettings {
    /// Words with a count at or below this are dropped
    #[serde(default = "default_min_count")]
    pub min_count: u64,

    #[serde(default = "default_exclusions")]
    pub exclusions: Vec<String>,

    #[serde(default)]
    pub format: OutputFormat,

    /// Write the unfiltered all-words table alongside the output
    #[serde(default = "default_raw")]
    pub raw: bool,

    #[serde(default)]
    pub top: Option<usize>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            min_count: default_min_count(),
            exclusions: default_exclusions(),
            format: OutputFormat::default(),
            raw: default_raw(),
            top: None,
        }
    }
}

impl WordFreqsConfig {
    /// Validate and freeze the engine-facing settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordfreqs::config::WordFreqsConfig;
    ///
    /// let mut config = WordFreqsConfig::default();
    /// assert!(config.engine_config().is_ok());
    ///
    /// config.aggregation.max_threshold = 2.0;
    /// assert!(config.engine_config().is_err());
    /// ```
    pub fn engine_config(&self) -> Result<EngineConfig> {
        EngineConfig::builder()
            .max_threshold(self.aggregation.max_threshold)
            .fold_mode(self.aggregation.fold_mode)
            .tokenizer(self.aggregation.tokenizer)
            .possessive_merge(self.merge.possessive)
            .min_count(self.output.min_count)
            .exclusions(self.output.exclusions.clone())
            .build()
    }
}

fn default_max_threshold() -> f64 {
    DEFAULT_MAX_THRESHOLD
}
fn default_parallel() -> bool {
    true
}
fn default_dictionary() -> PathBuf {
    PathBuf::from("/usr/share/dict/words")
}
fn default_min_count() -> u64 {
    DEFAULT_MIN_COUNT
}
fn default_exclusions() -> Vec<String> {
    DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect()
}
fn default_raw() -> bool {
    true
}
