use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::index::{IndexId, IndexSummary};
use super::scale::ScaleType;
use super::subtest::{RawScores, ScaledScores, SubtestId};

/// One administration of a test battery to one patient.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestRecord {
    pub id: Uuid,
    pub scale_type: ScaleType,
    pub patient_name: String,
    pub birth_date: jiff::civil::Date,
    pub test_date: jiff::civil::Date,
    #[serde(default)]
    pub examiner: Option<String>,
    /// Age-bracket key used for the raw→scaled lookup, e.g. "9:4-9:7".
    #[serde(default)]
    pub age_bracket: Option<String>,
    #[serde(default)]
    pub raw_scores: RawScores,
    #[serde(default)]
    pub scaled_scores: ScaledScores,
    /// Subtests whose scaled score was converted from the raw score rather
    /// than entered by hand.
    #[serde(default)]
    pub converted: BTreeSet<SubtestId>,
    #[serde(default)]
    pub indices: BTreeMap<IndexId, IndexSummary>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl TestRecord {
    /// A fresh record with no scores entered and every index absent.
    pub fn new(
        scale_type: ScaleType,
        patient_name: impl Into<String>,
        birth_date: jiff::civil::Date,
        test_date: jiff::civil::Date,
    ) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            scale_type,
            patient_name: patient_name.into(),
            birth_date,
            test_date,
            examiner: None,
            age_bracket: None,
            raw_scores: RawScores::new(),
            scaled_scores: ScaledScores::new(),
            converted: BTreeSet::new(),
            indices: IndexId::ALL
                .into_iter()
                .map(|index| (index, IndexSummary::absent()))
                .collect(),
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The stored summary for `index`, or an all-absent row if none is stored.
    pub fn index_summary(&self, index: IndexId) -> IndexSummary {
        self.indices.get(&index).cloned().unwrap_or_default()
    }

    pub fn touch(&mut self) {
        self.updated_at = jiff::Timestamp::now();
    }
}

/// Lightweight listing entry for a stored record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordSummary {
    pub id: Uuid,
    pub patient_name: String,
    pub test_date: jiff::civil::Date,
    pub full_scale: String,
    pub updated_at: jiff::Timestamp,
}

impl From<&TestRecord> for RecordSummary {
    fn from(record: &TestRecord) -> Self {
        Self {
            id: record.id,
            patient_name: record.patient_name.clone(),
            test_date: record.test_date,
            full_scale: record.index_summary(IndexId::Qit).composite,
            updated_at: record.updated_at,
        }
    }
}
