use cognita_core::models::index::IndexId;
use cognita_core::models::record::TestRecord;
use cognita_core::models::subtest::SubtestId;

use crate::age::{AgeBracket, age_bracket};
use crate::composite::{IndexScore, score_index};
use crate::norms::NormStore;
use crate::scaled::ScaledScoreProvider;

/// Recompute everything derived on a test record.
///
/// Resolves the age bracket, converts raw scores through `provider` when one
/// is available, and rewrites every index summary. Scaled scores entered by
/// hand are kept; a converted scaled score is dropped once its raw score
/// changes to a value the table does not cover. A missing norm table
/// collapses that index to all-absent.
pub fn score_record(
    record: &mut TestRecord,
    store: &NormStore,
    provider: Option<&dyn ScaledScoreProvider>,
) {
    match age_bracket(record.birth_date, record.test_date) {
        Ok(bracket) => {
            record.age_bracket = Some(bracket.to_string());
            if let Some(provider) = provider {
                convert_raw_scores(record, provider, bracket);
            }
        }
        Err(e) => {
            tracing::warn!(record_id = %record.id, error = %e, "cannot resolve age bracket");
            record.age_bracket = None;
            if provider.is_some() {
                drop_converted(record, |_| true);
            }
        }
    }

    record.indices = IndexId::ALL
        .into_iter()
        .map(|index| {
            let score = score_index(store, record.scale_type, index, &record.scaled_scores)
                .unwrap_or_else(|e| {
                    tracing::warn!(record_id = %record.id, %index, error = %e, "index not scored");
                    IndexScore::absent(index)
                });
            (index, score.to_summary())
        })
        .collect();

    record.touch();
}

fn convert_raw_scores(
    record: &mut TestRecord,
    provider: &dyn ScaledScoreProvider,
    bracket: AgeBracket,
) {
    let raw_scores = record.raw_scores.clone();
    drop_converted(record, |subtest| !raw_scores.contains_key(&subtest));

    for (subtest, raw) in raw_scores {
        match provider.scaled_score(subtest, bracket, raw) {
            Some(scaled) => {
                record.scaled_scores.insert(subtest, scaled);
                record.converted.insert(subtest);
            }
            None if record.converted.remove(&subtest) => {
                record.scaled_scores.remove(&subtest);
                tracing::warn!(
                    record_id = %record.id, %subtest, raw, %bracket,
                    "raw score not in conversion table, dropping converted scaled score"
                );
            }
            None => {
                tracing::warn!(
                    record_id = %record.id, %subtest, raw, %bracket,
                    "no scaled score for raw score"
                );
            }
        }
    }
}

/// Remove converted scaled scores for the subtests selected by `stale`.
fn drop_converted(record: &mut TestRecord, stale: impl Fn(SubtestId) -> bool) {
    let dropped: Vec<SubtestId> = record
        .converted
        .iter()
        .copied()
        .filter(|&subtest| stale(subtest))
        .collect();
    for subtest in dropped {
        record.converted.remove(&subtest);
        record.scaled_scores.remove(&subtest);
        tracing::debug!(record_id = %record.id, %subtest, "dropped converted scaled score");
    }
}
