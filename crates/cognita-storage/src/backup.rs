//! Whole-store backup and restore.

use std::path::Path;

use cognita_core::models::record::TestRecord;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::objects::{self, LocalStore};
use crate::records;

/// Current backup format. Bump when the shape of [`Backup`] changes.
pub const BACKUP_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backup {
    pub format_version: u32,
    pub exported_at: jiff::Timestamp,
    pub records: Vec<TestRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

impl Backup {
    pub fn from_json(body: &[u8]) -> Result<Self, StorageError> {
        let backup: Self = serde_json::from_slice(body)?;
        if backup.format_version > BACKUP_FORMAT_VERSION {
            return Err(StorageError::UnsupportedBackup {
                found: backup.format_version,
                supported: BACKUP_FORMAT_VERSION,
            });
        }
        Ok(backup)
    }

    pub fn to_json(&self) -> Result<Vec<u8>, StorageError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// Snapshot every stored record.
pub fn export_backup(store: &LocalStore) -> Result<Backup, StorageError> {
    let mut records = records::load_all_records(store)?;
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    Ok(Backup {
        format_version: BACKUP_FORMAT_VERSION,
        exported_at: jiff::Timestamp::now(),
        records,
    })
}

/// Write a backup file outside the data directory, owner-only.
pub fn write_backup(path: &Path, backup: &Backup) -> Result<(), StorageError> {
    let body = backup.to_json()?;
    objects::write_private(path, &body).map_err(|source| StorageError::PutObject {
        key: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), records = backup.records.len(), "backup written");
    Ok(())
}

pub fn read_backup(path: &Path) -> Result<Backup, StorageError> {
    let body = std::fs::read(path).map_err(|source| StorageError::GetObject {
        key: path.display().to_string(),
        source,
    })?;
    Backup::from_json(&body)
}

/// Restore records from a backup.
///
/// An incoming record replaces the stored one only if it was updated more
/// recently; otherwise it is skipped.
pub fn import_backup(store: &LocalStore, backup: &Backup) -> Result<ImportSummary, StorageError> {
    if backup.format_version > BACKUP_FORMAT_VERSION {
        return Err(StorageError::UnsupportedBackup {
            found: backup.format_version,
            supported: BACKUP_FORMAT_VERSION,
        });
    }

    let mut summary = ImportSummary::default();
    for incoming in &backup.records {
        let newer = match records::load_record(store, incoming.id) {
            Ok(existing) => incoming.updated_at > existing.updated_at,
            Err(StorageError::NotFound { .. }) => true,
            Err(e) => return Err(e),
        };

        if newer {
            records::save_record(store, incoming)?;
            summary.imported += 1;
        } else {
            tracing::warn!(record_id = %incoming.id, "stored record is as new as backup, skipping");
            summary.skipped += 1;
        }
    }

    tracing::info!(
        imported = summary.imported,
        skipped = summary.skipped,
        "backup imported"
    );
    Ok(summary)
}
