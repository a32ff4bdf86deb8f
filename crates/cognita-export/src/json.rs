use cognita_core::models::record::TestRecord;

use crate::error::ExportError;

/// Pretty-printed JSON of the whole record, as stored.
pub fn export_json(record: &TestRecord) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(record)?)
}
