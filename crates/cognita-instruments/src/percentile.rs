//! Percentile ranks and confidence intervals as published in norm tables.
//!
//! Extreme percentiles are printed as inequalities ("<0,1", ">99,9") and use
//! decimal commas. The published text is kept verbatim for display; the
//! parsed [`PercentileRank`] is what numeric consumers (charts) read.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum PercentileRank {
    Exact(f64),
    /// Strictly below the bound.
    Below(f64),
    /// Strictly above the bound.
    Above(f64),
}

/// A percentile rank together with its published text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Percentile {
    text: String,
    rank: PercentileRank,
}

impl Percentile {
    pub fn parse(text: &str) -> Result<Self, InstrumentError> {
        let trimmed = text.trim();
        let rank = if let Some(rest) = trimmed.strip_prefix('<') {
            parse_rank_value(rest).map(PercentileRank::Below)
        } else if let Some(rest) = trimmed.strip_prefix('>') {
            parse_rank_value(rest).map(PercentileRank::Above)
        } else {
            parse_rank_value(trimmed).map(PercentileRank::Exact)
        }
        .ok_or_else(|| InstrumentError::InvalidPercentile(text.to_string()))?;

        Ok(Self {
            text: text.to_string(),
            rank,
        })
    }

    /// The published text, e.g. "53" or "<0,1".
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn rank(&self) -> PercentileRank {
        self.rank
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Percentile {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Percentile {
    type Error = InstrumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Percentile> for String {
    fn from(value: Percentile) -> Self {
        value.text
    }
}

/// Accepts decimal commas and periods; rejects values outside 0–100.
fn parse_rank_value(number: &str) -> Option<f64> {
    let value: f64 = number.trim().replace(',', ".").parse().ok()?;
    (0.0..=100.0).contains(&value).then_some(value)
}

/// Published range around a composite score, e.g. 94–108.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceInterval {
    pub lower: u32,
    pub upper: u32,
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lower, self.upper)
    }
}

impl FromStr for ConfidenceInterval {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InstrumentError::InvalidConfidenceInterval(s.to_string());
        let (lower, upper) = s.split_once('-').ok_or_else(invalid)?;
        let lower: u32 = lower.trim().parse().map_err(|_| invalid())?;
        let upper: u32 = upper.trim().parse().map_err(|_| invalid())?;
        if lower > upper {
            return Err(invalid());
        }
        Ok(Self { lower, upper })
    }
}
