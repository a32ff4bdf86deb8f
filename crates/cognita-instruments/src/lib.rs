//! cognita-instruments
//!
//! The psychometric scoring engine. Pure data and pure functions, no I/O.
//! Defines each supported battery's subtests and index rules, the normative
//! tables that turn sums of scaled scores into composites, and the facade
//! that scores an index end to end.

pub mod age;
pub mod aggregation;
pub mod classification;
pub mod composite;
pub mod error;
pub mod instruments;
pub mod norms;
pub mod percentile;
pub mod record;
pub mod scaled;
pub mod scoring;

use cognita_core::models::scale::ScaleType;
use cognita_core::models::subtest::ScaledScores;
use error::InstrumentError;
use scoring::{Domain, ValidationError};

/// Trait implemented by each supported test battery.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "wisc_iv").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "WISC-IV").
    fn name(&self) -> &str;

    /// The scale type whose norm tables score this instrument.
    fn scale_type(&self) -> ScaleType;

    /// The index domains and subtests this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Validate a set of scaled scores against this instrument's ranges.
    fn validate_scores(&self, scores: &ScaledScores) -> Vec<ValidationError> {
        let all_subscales: Vec<_> = self
            .domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .collect();

        let mut errors = Vec::new();
        for (&subtest, &value) in scores {
            let value = f64::from(value);
            if let Some(subscale) = all_subscales.iter().find(|s| s.id == subtest)
                && !subscale.range.contains(value)
            {
                errors.push(ValidationError {
                    subtest,
                    value,
                    expected_range: subscale.range,
                    score_type: subscale.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        subscale.name,
                        value,
                        subscale.range.min,
                        subscale.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Like [`Instrument::validate_scores`], failing on the first batch of
    /// out-of-range scores.
    fn check_scores(&self, scores: &ScaledScores) -> Result<(), InstrumentError> {
        let errors = self.validate_scores(scores);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(InstrumentError::Validation(errors))
        }
    }

    /// Format scaled scores as a plain-text score sheet, grouped by index.
    fn score_sheet(&self, scores: &ScaledScores) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for domain in self.domains() {
            if domain.subscales.is_empty() {
                continue;
            }
            output.push_str(&format!("### {}\n", domain.name));
            for subscale in &domain.subscales {
                if let Some(value) = scores.get(&subscale.id) {
                    output.push_str(&format!("- {}: {}\n", subscale.name, value));
                }
            }
            output.push('\n');
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::wisc_iv::WiscIv)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// The instrument scored by `scale`.
pub fn instrument_for(scale: ScaleType) -> Box<dyn Instrument> {
    match scale {
        ScaleType::Wisc => Box::new(instruments::wisc_iv::WiscIv),
    }
}
