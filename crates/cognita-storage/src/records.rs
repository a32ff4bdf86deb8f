use cognita_core::keys;
use cognita_core::models::record::{RecordSummary, TestRecord};
use uuid::Uuid;

use crate::error::StorageError;
use crate::objects::{self, LocalStore};
use crate::state;

/// Persist a record, replacing any stored version with the same id.
pub fn save_record(store: &LocalStore, record: &TestRecord) -> Result<(), StorageError> {
    state::save_json(store, &keys::record(record.id), record)?;
    tracing::info!(record_id = %record.id, "record saved");
    Ok(())
}

pub fn load_record(store: &LocalStore, id: Uuid) -> Result<TestRecord, StorageError> {
    state::load_json(store, &keys::record(id))
}

pub fn delete_record(store: &LocalStore, id: Uuid) -> Result<(), StorageError> {
    objects::delete_object(store, &keys::record(id))?;
    tracing::info!(record_id = %id, "record deleted");
    Ok(())
}

/// Every readable stored record. Files that fail to parse are logged and skipped.
pub fn load_all_records(store: &LocalStore) -> Result<Vec<TestRecord>, StorageError> {
    let mut records = Vec::new();
    for key in objects::list_objects(store, keys::RECORDS_PREFIX)? {
        if keys::record_id(&key).is_none() {
            continue;
        }
        match state::load_json::<TestRecord>(store, &key) {
            Ok(record) => records.push(record),
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(%key, error = %e, "skipping unreadable record");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(records)
}

/// Listing of stored records, most recently updated first.
pub fn list_records(store: &LocalStore) -> Result<Vec<RecordSummary>, StorageError> {
    let mut summaries: Vec<RecordSummary> = load_all_records(store)?
        .iter()
        .map(RecordSummary::from)
        .collect();
    summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(summaries)
}
