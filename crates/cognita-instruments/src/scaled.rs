//! Raw score → scaled score conversion.
//!
//! The publisher's conversion tables are not bundled. Callers either enter
//! scaled scores directly or load a [`ScaledNormTable`] from JSON.

use std::collections::BTreeMap;

use cognita_core::models::scale::ScaleType;
use cognita_core::models::subtest::SubtestId;
use serde::{Deserialize, Serialize};

use crate::age::AgeBracket;
use crate::error::InstrumentError;

/// Source of scaled scores for raw scores at a given age.
pub trait ScaledScoreProvider: Send + Sync {
    /// The scaled score for `raw` on `subtest`, or `None` if the table has
    /// no entry for it.
    fn scaled_score(&self, subtest: SubtestId, bracket: AgeBracket, raw: u32) -> Option<u8>;
}

/// One row of a conversion table: raw scores `raw_min..=raw_max` map to `scaled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScoreBand {
    pub raw_min: u32,
    pub raw_max: u32,
    pub scaled: u8,
}

impl RawScoreBand {
    pub fn contains(&self, raw: u32) -> bool {
        (self.raw_min..=self.raw_max).contains(&raw)
    }
}

/// Raw→scaled conversion tables keyed by age bracket and subtest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledNormTable {
    pub scale_type: ScaleType,
    pub brackets: BTreeMap<AgeBracket, BTreeMap<SubtestId, Vec<RawScoreBand>>>,
}

impl ScaledNormTable {
    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Bands must be well-formed and must not overlap within one subtest.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        for (bracket, subtests) in &self.brackets {
            for (subtest, bands) in subtests {
                let mut sorted: Vec<&RawScoreBand> = bands.iter().collect();
                sorted.sort_by_key(|band| band.raw_min);

                for band in &sorted {
                    if band.raw_min > band.raw_max {
                        return Err(InstrumentError::InvalidScaledTable(format!(
                            "{bracket} {subtest}: band {}-{} is inverted",
                            band.raw_min, band.raw_max
                        )));
                    }
                }
                if let Some(pair) = sorted.windows(2).find(|w| w[1].raw_min <= w[0].raw_max) {
                    return Err(InstrumentError::InvalidScaledTable(format!(
                        "{bracket} {subtest}: bands {}-{} and {}-{} overlap",
                        pair[0].raw_min, pair[0].raw_max, pair[1].raw_min, pair[1].raw_max
                    )));
                }
            }
        }
        Ok(())
    }
}

impl ScaledScoreProvider for ScaledNormTable {
    fn scaled_score(&self, subtest: SubtestId, bracket: AgeBracket, raw: u32) -> Option<u8> {
        self.brackets
            .get(&bracket)?
            .get(&subtest)?
            .iter()
            .find(|band| band.contains(raw))
            .map(|band| band.scaled)
    }
}
