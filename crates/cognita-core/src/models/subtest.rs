use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Scaled scores (typically 1–19) keyed by subtest.
pub type ScaledScores = BTreeMap<SubtestId, u8>;

/// Raw scores as entered by the examiner, keyed by subtest.
pub type RawScores = BTreeMap<SubtestId, u32>;

/// WISC-IV subtests, identified by their short codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SubtestId {
    Cb,
    Sm,
    Dg,
    Cn,
    Cd,
    Vc,
    Sn,
    Rm,
    Co,
    Ps,
    Cf,
    Ca,
    In,
    Ar,
    Rp,
}

impl SubtestId {
    /// Administration order.
    pub const ALL: [SubtestId; 15] = [
        SubtestId::Cb,
        SubtestId::Sm,
        SubtestId::Dg,
        SubtestId::Cn,
        SubtestId::Cd,
        SubtestId::Vc,
        SubtestId::Sn,
        SubtestId::Rm,
        SubtestId::Co,
        SubtestId::Ps,
        SubtestId::Cf,
        SubtestId::Ca,
        SubtestId::In,
        SubtestId::Ar,
        SubtestId::Rp,
    ];

    pub fn code(self) -> &'static str {
        match self {
            SubtestId::Cb => "cb",
            SubtestId::Sm => "sm",
            SubtestId::Dg => "dg",
            SubtestId::Cn => "cn",
            SubtestId::Cd => "cd",
            SubtestId::Vc => "vc",
            SubtestId::Sn => "sn",
            SubtestId::Rm => "rm",
            SubtestId::Co => "co",
            SubtestId::Ps => "ps",
            SubtestId::Cf => "cf",
            SubtestId::Ca => "ca",
            SubtestId::In => "in",
            SubtestId::Ar => "ar",
            SubtestId::Rp => "rp",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SubtestId::Cb => "Block Design",
            SubtestId::Sm => "Similarities",
            SubtestId::Dg => "Digit Span",
            SubtestId::Cn => "Picture Concepts",
            SubtestId::Cd => "Coding",
            SubtestId::Vc => "Vocabulary",
            SubtestId::Sn => "Letter-Number Sequencing",
            SubtestId::Rm => "Matrix Reasoning",
            SubtestId::Co => "Comprehension",
            SubtestId::Ps => "Symbol Search",
            SubtestId::Cf => "Picture Completion",
            SubtestId::Ca => "Cancellation",
            SubtestId::In => "Information",
            SubtestId::Ar => "Arithmetic",
            SubtestId::Rp => "Word Reasoning",
        }
    }
}

impl fmt::Display for SubtestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SubtestId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|subtest| subtest.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownSubtest(s.to_string()))
    }
}
