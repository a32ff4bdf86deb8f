use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Display placeholder for a value that cannot be computed yet.
pub const ABSENT: &str = "--";

/// A composite index: four primary indices plus the full scale composite.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum IndexId {
    /// Verbal Comprehension.
    Icv,
    /// Perceptual Organization.
    Iop,
    /// Working Memory.
    Imo,
    /// Processing Speed.
    Ivp,
    /// Full Scale IQ.
    Qit,
}

impl IndexId {
    /// Display order used by reports and the command line.
    pub const ALL: [IndexId; 5] = [
        IndexId::Icv,
        IndexId::Iop,
        IndexId::Imo,
        IndexId::Ivp,
        IndexId::Qit,
    ];

    pub fn code(self) -> &'static str {
        match self {
            IndexId::Icv => "icv",
            IndexId::Iop => "iop",
            IndexId::Imo => "imo",
            IndexId::Ivp => "ivp",
            IndexId::Qit => "qit",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            IndexId::Icv => "ICV",
            IndexId::Iop => "IOP",
            IndexId::Imo => "IMO",
            IndexId::Ivp => "IVP",
            IndexId::Qit => "QIT",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IndexId::Icv => "Verbal Comprehension Index",
            IndexId::Iop => "Perceptual Organization Index",
            IndexId::Imo => "Working Memory Index",
            IndexId::Ivp => "Processing Speed Index",
            IndexId::Qit => "Full Scale IQ",
        }
    }
}

impl fmt::Display for IndexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for IndexId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|index| index.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownIndex(s.to_string()))
    }
}

/// Display-ready scores for one index as persisted on a test record.
///
/// Every field is a string so that the presentation layer can show it
/// verbatim; [`ABSENT`] stands for a value that could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndexSummary {
    pub sum: String,
    pub composite: String,
    pub percentile: String,
    pub confidence_interval: String,
    pub classification: String,
}

impl IndexSummary {
    pub fn absent() -> Self {
        Self {
            sum: ABSENT.to_string(),
            composite: ABSENT.to_string(),
            percentile: ABSENT.to_string(),
            confidence_interval: ABSENT.to_string(),
            classification: ABSENT.to_string(),
        }
    }

    /// True when not even the sum of scaled scores could be computed.
    pub fn is_absent(&self) -> bool {
        self.sum == ABSENT
    }
}

impl Default for IndexSummary {
    fn default() -> Self {
        Self::absent()
    }
}
