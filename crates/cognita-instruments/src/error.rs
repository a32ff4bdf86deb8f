use cognita_core::models::index::IndexId;
use cognita_core::models::scale::ScaleType;
use thiserror::Error;

use crate::age::ChronologicalAge;
use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("no norm table for scale '{scale}' index '{index}'")]
    UnknownNormTable { scale: ScaleType, index: IndexId },

    #[error(
        "norm table for index '{index}' is not monotonic: sum {sum} maps to {composite}, \
         below {previous} for a smaller sum"
    )]
    NonMonotonic {
        index: IndexId,
        sum: u32,
        composite: u32,
        previous: u32,
    },

    #[error("composite {composite} for index '{index}' has no percentile entry")]
    MissingPercentile { index: IndexId, composite: u32 },

    #[error("invalid percentile text: {0:?}")]
    InvalidPercentile(String),

    #[error("invalid confidence interval: {0:?}")]
    InvalidConfidenceInterval(String),

    #[error("invalid scaled-score table: {0}")]
    InvalidScaledTable(String),

    #[error("{}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Age(#[from] AgeError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Error)]
pub enum AgeError {
    #[error("test date {test} is before birth date {birth}")]
    TestBeforeBirth {
        birth: jiff::civil::Date,
        test: jiff::civil::Date,
    },

    #[error("age {age} is outside the normed range {min}:0-{max}:11")]
    OutOfRange {
        age: ChronologicalAge,
        min: u8,
        max: u8,
    },

    #[error("invalid age bracket: {0:?}")]
    InvalidBracket(String),

    #[error("calendar arithmetic failed: {0}")]
    Calendar(String),
}
