//! Sums of scaled scores per index.
//!
//! A primary index sums its core subtests in definition order. When a core
//! score is missing, exactly one supplemental subtest may stand in for it;
//! the full scale composite accepts no substitution at all.

use cognita_core::models::index::IndexId;
use cognita_core::models::scale::ScaleType;
use cognita_core::models::subtest::{ScaledScores, SubtestId};

use crate::instruments::wisc_iv;

/// Subtests that feed one primary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDefinition {
    /// Always summed when present, in priority order.
    pub core: &'static [SubtestId],
    /// Candidates for the single substitution, in priority order.
    pub supplemental: &'static [SubtestId],
    /// How many scaled scores make up the sum.
    pub required_count: usize,
}

/// How an index turns scaled scores into a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRule {
    Substitutable(IndexDefinition),
    /// Every listed subtest is required; no substitution.
    AllRequired(&'static [SubtestId]),
}

impl IndexRule {
    pub fn compute_sum(&self, scores: &ScaledScores) -> Option<u32> {
        match self {
            IndexRule::Substitutable(definition) => compute_sum(definition, scores),
            IndexRule::AllRequired(subtests) => compute_fixed_sum(subtests, scores),
        }
    }

    /// Every subtest that can contribute to the sum.
    pub fn subtests(&self) -> Vec<SubtestId> {
        match self {
            IndexRule::Substitutable(definition) => definition
                .core
                .iter()
                .chain(definition.supplemental)
                .copied()
                .collect(),
            IndexRule::AllRequired(subtests) => subtests.to_vec(),
        }
    }
}

/// The aggregation rule for `index` on battery `scale`.
pub fn index_rule(scale: ScaleType, index: IndexId) -> IndexRule {
    match scale {
        ScaleType::Wisc => wisc_iv::index_rule(index),
    }
}

/// Sum of scaled scores for a substitutable index, or `None` when too few
/// subtests have scores.
///
/// Only one substitution is attempted. An index missing two of three core
/// subtests stays incomplete even when two supplemental scores exist.
pub fn compute_sum(definition: &IndexDefinition, scores: &ScaledScores) -> Option<u32> {
    let mut collected: Vec<u32> = definition
        .core
        .iter()
        .filter_map(|subtest| scores.get(subtest))
        .map(|&score| u32::from(score))
        .collect();

    if collected.len() < definition.required_count {
        let substitute = definition
            .supplemental
            .iter()
            .filter(|subtest| !definition.core.contains(*subtest))
            .find_map(|subtest| scores.get(subtest));
        if let Some(&score) = substitute {
            collected.push(u32::from(score));
        }
    }

    if collected.len() < definition.required_count {
        return None;
    }

    Some(collected.into_iter().take(definition.required_count).sum())
}

/// Sum of every listed subtest, or `None` if any one of them is missing.
pub fn compute_fixed_sum(subtests: &[SubtestId], scores: &ScaledScores) -> Option<u32> {
    subtests
        .iter()
        .map(|subtest| scores.get(subtest).map(|&score| u32::from(score)))
        .sum()
}
