//! Chronological age and WISC-IV age brackets.
//!
//! Raw scores are normed per four-month bracket between 6:0 and 16:11.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use jiff::Unit;
use serde::{Deserialize, Serialize};

use crate::error::AgeError;

/// Youngest age, in completed years, covered by the norms.
pub const MIN_YEARS: u8 = 6;
/// Oldest age, in completed years, covered by the norms.
pub const MAX_YEARS: u8 = 16;
/// Width of each bracket in months.
pub const BRACKET_MONTHS: u8 = 4;

/// Completed years, months and days between birth and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChronologicalAge {
    pub years: u16,
    pub months: u8,
    pub days: u8,
}

impl fmt::Display for ChronologicalAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.years, self.months)
    }
}

pub fn chronological_age(birth: Date, test: Date) -> Result<ChronologicalAge, AgeError> {
    if test < birth {
        return Err(AgeError::TestBeforeBirth { birth, test });
    }

    let span = birth
        .until((Unit::Year, test))
        .map_err(|e| AgeError::Calendar(e.to_string()))?;

    let calendar = |what: &str| AgeError::Calendar(format!("{what} out of range in {span}"));
    Ok(ChronologicalAge {
        years: u16::try_from(span.get_years()).map_err(|_| calendar("years"))?,
        months: u8::try_from(span.get_months()).map_err(|_| calendar("months"))?,
        days: u8::try_from(span.get_days()).map_err(|_| calendar("days"))?,
    })
}

/// A four-month norm bracket, e.g. 9:4–9:7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgeBracket {
    years: u8,
    first_month: u8,
}

impl AgeBracket {
    /// The bracket containing `age`, if the norms cover it.
    pub fn containing(age: ChronologicalAge) -> Result<Self, AgeError> {
        let years = u8::try_from(age.years)
            .ok()
            .filter(|years| (MIN_YEARS..=MAX_YEARS).contains(years))
            .ok_or(AgeError::OutOfRange {
                age,
                min: MIN_YEARS,
                max: MAX_YEARS,
            })?;
        Ok(Self {
            years,
            first_month: age.months / BRACKET_MONTHS * BRACKET_MONTHS,
        })
    }

    pub fn years(self) -> u8 {
        self.years
    }

    pub fn first_month(self) -> u8 {
        self.first_month
    }

    pub fn last_month(self) -> u8 {
        self.first_month + BRACKET_MONTHS - 1
    }

    /// Every bracket the norms cover, youngest first.
    pub fn all() -> impl Iterator<Item = AgeBracket> {
        (MIN_YEARS..=MAX_YEARS).flat_map(|years| {
            (0..12)
                .step_by(usize::from(BRACKET_MONTHS))
                .map(move |first_month| AgeBracket { years, first_month })
        })
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{y}:{}-{y}:{}",
            self.first_month,
            self.last_month(),
            y = self.years
        )
    }
}

impl FromStr for AgeBracket {
    type Err = AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeBracket::all()
            .find(|bracket| bracket.to_string() == s.trim())
            .ok_or_else(|| AgeError::InvalidBracket(s.to_string()))
    }
}

impl TryFrom<String> for AgeBracket {
    type Error = AgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AgeBracket> for String {
    fn from(value: AgeBracket) -> Self {
        value.to_string()
    }
}

/// Resolve the norm bracket for a child born on `birth` and tested on `test`.
pub fn age_bracket(birth: Date, test: Date) -> Result<AgeBracket, AgeError> {
    AgeBracket::containing(chronological_age(birth, test)?)
}
