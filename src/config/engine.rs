//! Validated, run-wide engine settings.
//!
//! Everything here is checked once, before the first block is processed, and
//! cannot change afterwards. Validation collects every problem so a bad
//! configuration is reported in a single pass.

use crate::aggregation::rank::{Ranker, DEFAULT_EXCLUSIONS, DEFAULT_MIN_COUNT};
use crate::aggregation::{FoldMode, MorphologicalMerger, TokenizerKind};
use crate::errors::{Error, Result};

pub const DEFAULT_MAX_THRESHOLD: f64 = 0.34;

/// Frozen settings for one aggregation run
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    max_threshold: f64,
    fold_mode: FoldMode,
    tokenizer: TokenizerKind,
    possessive_merge: bool,
    min_count: u64,
    exclusions: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_threshold: DEFAULT_MAX_THRESHOLD,
            fold_mode: FoldMode::Count,
            tokenizer: TokenizerKind::Regex,
            possessive_merge: false,
            min_count: DEFAULT_MIN_COUNT,
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    pub fn max_threshold(&self) -> f64 {
        self.max_threshold
    }

    pub fn fold_mode(&self) -> FoldMode {
        self.fold_mode
    }

    pub fn tokenizer(&self) -> TokenizerKind {
        self.tokenizer
    }

    pub fn possessive_merge(&self) -> bool {
        self.possessive_merge
    }

    pub fn min_count(&self) -> u64 {
        self.min_count
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    pub fn merger(&self) -> MorphologicalMerger {
        MorphologicalMerger::new(self.possessive_merge)
    }

    pub fn ranker(&self) -> Ranker {
        Ranker::new(self.min_count, self.exclusions.clone())
    }
}

/// Builder for [`EngineConfig`]; `build` validates.
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn max_threshold(mut self, value: f64) -> Self {
        self.config.max_threshold = value;
        self
    }

    pub fn fold_mode(mut self, value: FoldMode) -> Self {
        self.config.fold_mode = value;
        self
    }

    pub fn tokenizer(mut self, value: TokenizerKind) -> Self {
        self.config.tokenizer = value;
        self
    }

    pub fn possessive_merge(mut self, value: bool) -> Self {
        self.config.possessive_merge = value;
        self
    }

    pub fn min_count(mut self, value: u64) -> Self {
        self.config.min_count = value;
        self
    }

    pub fn exclusions(mut self, value: Vec<String>) -> Self {
        self.config.exclusions = value;
        self
    }

    pub fn build(self) -> Result<EngineConfig> {
        let errors = validation_errors(&self.config);
        if errors.is_empty() {
            Ok(self.config)
        } else {
            Err(Error::InvalidConfig(errors))
        }
    }
}

fn validation_errors(config: &EngineConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if !config.max_threshold.is_finite() || !(0.0..=1.0).contains(&config.max_threshold) {
        errors.push(format!(
            "max_threshold must be within [0, 1], got {}",
            config.max_threshold
        ));
    }

    if config.exclusions.iter().any(|e| e.is_empty()) {
        errors.push("exclusions must not contain empty strings".to_string());
    }

    errors
}
