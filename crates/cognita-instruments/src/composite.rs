use cognita_core::models::index::{ABSENT, IndexId, IndexSummary};
use cognita_core::models::scale::ScaleType;
use cognita_core::models::subtest::ScaledScores;
use serde::Serialize;

use crate::aggregation::index_rule;
use crate::classification::{Classification, classify};
use crate::error::InstrumentError;
use crate::norms::NormStore;
use crate::percentile::{ConfidenceInterval, Percentile};

/// Everything known about one index for the scores entered so far.
///
/// Each field is present only if the one before it is: there is no composite
/// without a sum, and no percentile, interval or band without a composite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexScore {
    pub index: IndexId,
    pub sum: Option<u32>,
    pub composite: Option<u32>,
    pub percentile: Option<Percentile>,
    pub confidence_interval: Option<ConfidenceInterval>,
    pub classification: Option<Classification>,
}

impl IndexScore {
    pub fn absent(index: IndexId) -> Self {
        Self {
            index,
            sum: None,
            composite: None,
            percentile: None,
            confidence_interval: None,
            classification: None,
        }
    }

    /// Display strings for persistence, with `--` for absent fields.
    pub fn to_summary(&self) -> IndexSummary {
        fn show<T: ToString>(value: Option<T>) -> String {
            value.map_or_else(|| ABSENT.to_string(), |v| v.to_string())
        }

        IndexSummary {
            sum: show(self.sum),
            composite: show(self.composite),
            percentile: show(self.percentile.as_ref()),
            confidence_interval: show(self.confidence_interval),
            classification: show(self.classification),
        }
    }
}

/// Score one index from the scaled scores entered so far.
///
/// Insufficient data yields absent fields, never an error. The only error is
/// a (scale, index) pair the store has no table for.
pub fn score_index(
    store: &NormStore,
    scale: ScaleType,
    index: IndexId,
    scores: &ScaledScores,
) -> Result<IndexScore, InstrumentError> {
    let sum = index_rule(scale, index).compute_sum(scores);
    let composite = store.lookup_composite(scale, index, sum)?;

    Ok(IndexScore {
        index,
        sum,
        composite,
        percentile: store.lookup_percentile(scale, composite).cloned(),
        confidence_interval: store.lookup_confidence_interval(scale, composite),
        classification: classify(composite.map(f64::from)),
    })
}

/// Score every index of the battery, in display order.
pub fn score_all(
    store: &NormStore,
    scale: ScaleType,
    scores: &ScaledScores,
) -> Result<Vec<IndexScore>, InstrumentError> {
    IndexId::ALL
        .into_iter()
        .map(|index| score_index(store, scale, index, scores))
        .collect()
}
