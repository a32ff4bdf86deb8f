use cognita_core::models::index::{ABSENT, IndexId};
use cognita_core::models::record::TestRecord;
use cognita_core::models::subtest::SubtestId;
use cognita_instruments::age::chronological_age;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;

/// Report template used when the caller does not supply one.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

const TEMPLATE_NAME: &str = "report.md";

/// Template variables for one test record.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub scale_name: String,
    pub patient_name: String,
    pub birth_date: String,
    pub test_date: String,
    pub age: String,
    pub examiner: Option<String>,
    pub subtests: Vec<SubtestRow>,
    pub indices: Vec<IndexRow>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubtestRow {
    pub code: String,
    pub name: String,
    pub raw: String,
    pub scaled: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexRow {
    pub abbreviation: String,
    pub name: String,
    pub sum: String,
    pub composite: String,
    pub percentile: String,
    pub confidence_interval: String,
    pub classification: String,
}

impl ReportContext {
    /// Subtests appear in administration order, and only if a score was entered.
    pub fn from_record(record: &TestRecord) -> Self {
        let age = chronological_age(record.birth_date, record.test_date)
            .map_or_else(|_| ABSENT.to_string(), |age| age.to_string());

        let subtests = SubtestId::ALL
            .into_iter()
            .filter_map(|subtest| {
                let raw = record.raw_scores.get(&subtest);
                let scaled = record.scaled_scores.get(&subtest);
                if raw.is_none() && scaled.is_none() {
                    return None;
                }
                Some(SubtestRow {
                    code: subtest.code().to_string(),
                    name: subtest.name().to_string(),
                    raw: raw.map_or_else(|| ABSENT.to_string(), u32::to_string),
                    scaled: scaled.map_or_else(|| ABSENT.to_string(), u8::to_string),
                })
            })
            .collect();

        let indices = IndexId::ALL
            .into_iter()
            .map(|index| {
                let summary = record.index_summary(index);
                IndexRow {
                    abbreviation: index.abbreviation().to_string(),
                    name: index.name().to_string(),
                    sum: summary.sum,
                    composite: summary.composite,
                    percentile: summary.percentile,
                    confidence_interval: summary.confidence_interval,
                    classification: summary.classification,
                }
            })
            .collect();

        Self {
            scale_name: record.scale_type.name().to_string(),
            patient_name: record.patient_name.clone(),
            birth_date: record.birth_date.to_string(),
            test_date: record.test_date.to_string(),
            age,
            examiner: record.examiner.clone(),
            subtests,
            indices,
            notes: record.notes.clone(),
        }
    }
}

/// Render a report for `record` with `template` (Tera syntax), or with
/// [`DEFAULT_TEMPLATE`] when none is given.
pub fn render_report(record: &TestRecord, template: Option<&str>) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, template.unwrap_or(DEFAULT_TEMPLATE))
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(ReportContext::from_record(record))?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    tracing::debug!(record_id = %record.id, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}
