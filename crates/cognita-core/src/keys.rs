//! Data-directory key conventions.
//!
//! Pure string functions with no filesystem access. These define the canonical
//! layout of files under the Cognita data directory. Keys always use `/`
//! separators; the storage layer maps them onto the host filesystem.

use uuid::Uuid;

pub const RECORDS_PREFIX: &str = "records/";

pub const BACKUPS_PREFIX: &str = "backups/";

pub fn record(id: Uuid) -> String {
    format!("records/{id}.json")
}

pub fn report_docx(id: Uuid) -> String {
    format!("reports/{id}.docx")
}

pub fn report_json(id: Uuid) -> String {
    format!("reports/{id}.json")
}

pub fn backup(stamp: &str) -> String {
    format!("backups/cognita-backup-{stamp}.json")
}

/// Extract the record id from a key produced by [`record`].
pub fn record_id(key: &str) -> Option<Uuid> {
    key.strip_prefix(RECORDS_PREFIX)?
        .strip_suffix(".json")
        .and_then(|id| Uuid::parse_str(id).ok())
}
