//! Singular/plural folding over the finished global table.
//!
//! The merge is a single pass over a sorted snapshot of the table's keys. For
//! each word and each rule in order, if the rule's candidate singular is also
//! in the table the two entries are combined under whichever currently has the
//! higher count; on a tie the plural form is kept. Chains longer than one merge
//! per word are not re-resolved.

use serde::Serialize;

use crate::errors::{Error, Result};

use super::table::FrequencyTable;

/// A suffix rule relating a plural (or possessive) form to its singular
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralRule {
    /// `pictures` → `picture`
    SimplePlural,
    /// `furries` → `furry`
    IesPlural,
    /// `dog's` → `dog`
    Possessive,
}

impl PluralRule {
    /// Candidate singular for `word`, if the rule applies.
    pub fn singular(self, word: &str) -> Option<String> {
        let candidate = match self {
            PluralRule::SimplePlural => word.strip_suffix('s')?.to_string(),
            PluralRule::IesPlural => format!("{}y", word.strip_suffix("ies")?),
            PluralRule::Possessive => word.strip_suffix("'s")?.to_string(),
        };
        (!candidate.is_empty()).then_some(candidate)
    }
}

/// Record of one merge: which pair was combined and which form survived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeDecision {
    pub rule: PluralRule,
    pub plural: String,
    pub singular: String,
    pub canonical: String,
    /// Count held by the canonical form after the merge
    pub combined: u64,
}

/// One-shot morphological merge pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphologicalMerger {
    rules: Vec<PluralRule>,
}

impl Default for MorphologicalMerger {
    fn default() -> Self {
        Self::new(false)
    }
}

impl MorphologicalMerger {
    /// Simple and `-ies` plurals, plus the possessive rule when `possessive`.
    pub fn new(possessive: bool) -> Self {
        let mut rules = vec![PluralRule::SimplePlural, PluralRule::IesPlural];
        if possessive {
            rules.push(PluralRule::Possessive);
        }
        Self { rules }
    }

    pub fn rules(&self) -> &[PluralRule] {
        &self.rules
    }

    /// Merge related forms in place. Fails without touching the table when
    /// the table has already been merged.
    pub fn merge(&self, table: &mut FrequencyTable) -> Result<Vec<MergeDecision>> {
        if table.is_merged() {
            return Err(Error::MergeAlreadyApplied);
        }

        let snapshot = table.sorted_words();
        let mut decisions = Vec::new();

        for word in &snapshot {
            for &rule in &self.rules {
                if let Some(decision) = merge_pair(table, word, rule) {
                    decisions.push(decision);
                }
            }
        }

        table.mark_merged();
        log::info!(
            "Merged {} singular/plural pairs, {} words remain",
            decisions.len(),
            table.len()
        );
        Ok(decisions)
    }
}

fn merge_pair(table: &mut FrequencyTable, word: &str, rule: PluralRule) -> Option<MergeDecision> {
    // An earlier merge in this pass may already have absorbed the word.
    let count = table.get(word)?;
    let singular = rule.singular(word)?;
    let singular_count = table.get(&singular)?;

    let (major, minor) = if singular_count > count {
        (singular.as_str(), word)
    } else {
        (word, singular.as_str())
    };

    let absorbed = table.remove(minor)?;
    table.add(major, absorbed);
    let combined = table.get(major)?;

    log::debug!(
        "Merged '{}' into '{}' ({:?}, now {})",
        minor,
        major,
        rule,
        combined
    );

    Some(MergeDecision {
        rule,
        plural: word.to_string(),
        canonical: major.to_string(),
        singular,
        combined,
    })
}
