use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Qualitative band for a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Classification {
    /// 69 and below.
    ExtremelyLow,
    /// 70–79.
    Borderline,
    /// 80–89.
    LowAverage,
    /// 90–109.
    Average,
    /// 110–119.
    HighAverage,
    /// 120–129.
    Superior,
    /// 130 and above.
    VerySuperior,
}

/// Inclusive upper bound of each band below the top one, ascending.
const UPPER_BOUNDS: [(f64, Classification); 6] = [
    (69.0, Classification::ExtremelyLow),
    (79.0, Classification::Borderline),
    (89.0, Classification::LowAverage),
    (109.0, Classification::Average),
    (119.0, Classification::HighAverage),
    (129.0, Classification::Superior),
];

impl Classification {
    /// All bands, lowest first.
    pub const ALL: [Classification; 7] = [
        Classification::ExtremelyLow,
        Classification::Borderline,
        Classification::LowAverage,
        Classification::Average,
        Classification::HighAverage,
        Classification::Superior,
        Classification::VerySuperior,
    ];

    /// The band containing `score`, or `None` for NaN and infinities.
    pub fn from_score(score: f64) -> Option<Self> {
        if !score.is_finite() {
            return None;
        }
        let band = UPPER_BOUNDS
            .iter()
            .find(|(upper, _)| score <= *upper)
            .map(|&(_, band)| band)
            .unwrap_or(Classification::VerySuperior);
        Some(band)
    }

    pub fn label(self) -> &'static str {
        match self {
            Classification::ExtremelyLow => "Extremely Low",
            Classification::Borderline => "Borderline",
            Classification::LowAverage => "Low Average",
            Classification::Average => "Average",
            Classification::HighAverage => "High Average",
            Classification::Superior => "Superior",
            Classification::VerySuperior => "Very Superior",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a composite score. Absent or non-numeric input has no band.
pub fn classify(score: Option<f64>) -> Option<Classification> {
    score.and_then(Classification::from_score)
}
