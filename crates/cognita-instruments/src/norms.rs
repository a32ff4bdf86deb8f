//! Normative tables: sum of scaled scores → composite → percentile and CI.
//!
//! Tables are immutable reference data. The built-in store is built once on
//! first use and shared read-only by every caller.

pub mod wisc_iv;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use cognita_core::models::index::IndexId;
use cognita_core::models::scale::ScaleType;
use serde::{Deserialize, Serialize};

use crate::error::InstrumentError;
use crate::percentile::{ConfidenceInterval, Percentile};

/// Percentile rank and confidence interval published for one composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeNorm {
    pub percentile: Percentile,
    pub confidence_interval: ConfidenceInterval,
}

/// All normative tables of one battery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormTables {
    /// Per index: sum of scaled scores → composite.
    sums: BTreeMap<IndexId, BTreeMap<u32, u32>>,
    /// Composite → percentile and CI, shared across indices.
    composites: BTreeMap<u32, CompositeNorm>,
}

impl NormTables {
    /// The built-in WISC-IV tables.
    ///
    /// # Panics
    ///
    /// Panics if a compiled-in percentile string fails to parse. The data is
    /// constant, so a panic indicates a table definition bug.
    pub fn wisc_iv() -> Self {
        let sums = IndexId::ALL
            .into_iter()
            .map(|index| (index, wisc_iv::sums(index).iter().copied().collect()))
            .collect();

        let composites = wisc_iv::COMPOSITE_NORMS
            .iter()
            .map(|&(composite, percentile, lower, upper)| {
                let percentile = Percentile::parse(percentile)
                    .unwrap_or_else(|e| panic!("built-in norm for {composite} is malformed: {e}"));
                let norm = CompositeNorm {
                    percentile,
                    confidence_interval: ConfidenceInterval { lower, upper },
                };
                (composite, norm)
            })
            .collect();

        Self { sums, composites }
    }

    /// Load tables from JSON, e.g. the publisher's authoritative edition.
    ///
    /// The tables are validated with [`NormTables::validate`] before use.
    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn to_json(&self) -> Result<String, InstrumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn sum_table(&self, index: IndexId) -> Option<&BTreeMap<u32, u32>> {
        self.sums.get(&index)
    }

    pub fn composite_norm(&self, composite: u32) -> Option<&CompositeNorm> {
        self.composites.get(&composite)
    }

    pub fn validate(&self) -> Result<(), InstrumentError> {
        self.check_monotonic()?;
        self.check_coverage()
    }

    /// A larger sum never maps to a strictly lower composite.
    pub fn check_monotonic(&self) -> Result<(), InstrumentError> {
        for (&index, table) in &self.sums {
            let mut previous: Option<u32> = None;
            for (&sum, &composite) in table {
                if let Some(previous) = previous
                    && composite < previous
                {
                    return Err(InstrumentError::NonMonotonic {
                        index,
                        sum,
                        composite,
                        previous,
                    });
                }
                previous = Some(composite);
            }
        }
        Ok(())
    }

    /// Every composite a sum table can produce has a percentile entry.
    pub fn check_coverage(&self) -> Result<(), InstrumentError> {
        for (&index, table) in &self.sums {
            if let Some(&composite) = table
                .values()
                .find(|composite| !self.composites.contains_key(*composite))
            {
                return Err(InstrumentError::MissingPercentile { index, composite });
            }
        }
        Ok(())
    }
}

/// Norm tables for every supported battery.
#[derive(Debug, Clone, Default)]
pub struct NormStore {
    tables: BTreeMap<ScaleType, NormTables>,
}

impl NormStore {
    /// An empty store. Every lookup reports an unknown table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The store holding every built-in table.
    pub fn builtin() -> &'static NormStore {
        static BUILTIN: LazyLock<NormStore> =
            LazyLock::new(|| NormStore::new().with_tables(ScaleType::Wisc, NormTables::wisc_iv()));
        &BUILTIN
    }

    /// Install (or replace) the tables for `scale`.
    pub fn with_tables(mut self, scale: ScaleType, tables: NormTables) -> Self {
        self.tables.insert(scale, tables);
        self
    }

    pub fn tables(&self, scale: ScaleType) -> Option<&NormTables> {
        self.tables.get(&scale)
    }

    /// Composite score for a sum of scaled scores.
    ///
    /// An absent sum is `Ok(None)` without consulting any table, as is a sum
    /// outside the published range. Only a missing (scale, index) table is
    /// an error.
    pub fn lookup_composite(
        &self,
        scale: ScaleType,
        index: IndexId,
        sum: Option<u32>,
    ) -> Result<Option<u32>, InstrumentError> {
        let Some(sum) = sum else {
            return Ok(None);
        };

        let table = self
            .tables
            .get(&scale)
            .and_then(|tables| tables.sum_table(index))
            .ok_or(InstrumentError::UnknownNormTable { scale, index })?;

        let composite = table.get(&sum).copied();
        if composite.is_none() {
            tracing::debug!(%scale, %index, sum, "sum outside norm table");
        }
        Ok(composite)
    }

    pub fn lookup_percentile(&self, scale: ScaleType, composite: Option<u32>) -> Option<&Percentile> {
        self.composite_norm(scale, composite)
            .map(|norm| &norm.percentile)
    }

    pub fn lookup_confidence_interval(
        &self,
        scale: ScaleType,
        composite: Option<u32>,
    ) -> Option<ConfidenceInterval> {
        self.composite_norm(scale, composite)
            .map(|norm| norm.confidence_interval)
    }

    fn composite_norm(&self, scale: ScaleType, composite: Option<u32>) -> Option<&CompositeNorm> {
        let composite = composite?;
        self.tables.get(&scale)?.composite_norm(composite)
    }
}
