use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A test battery variant. Each battery carries its own independent norm tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleType {
    /// Wechsler Intelligence Scale for Children, Fourth Edition.
    Wisc,
}

impl ScaleType {
    pub const ALL: [ScaleType; 1] = [ScaleType::Wisc];

    pub fn code(self) -> &'static str {
        match self {
            ScaleType::Wisc => "wisc",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Wisc => "WISC-IV",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ScaleType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|scale| scale.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownScaleType(s.to_string()))
    }
}
