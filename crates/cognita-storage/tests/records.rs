use cognita_core::models::record::TestRecord;
use cognita_core::models::scale::ScaleType;
use cognita_core::models::subtest::SubtestId;
use cognita_storage::backup::{
    BACKUP_FORMAT_VERSION, Backup, ImportSummary, export_backup, import_backup, read_backup,
    write_backup,
};
use cognita_storage::error::StorageError;
use cognita_storage::objects::{LocalStore, put_object};
use cognita_storage::records::{delete_record, list_records, load_record, save_record};
use jiff::{SignedDuration, civil::date};

fn store() -> (tempfile::TempDir, LocalStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    (dir, store)
}

fn record(name: &str) -> TestRecord {
    let mut record = TestRecord::new(ScaleType::Wisc, name, date(2014, 6, 1), date(2024, 6, 3));
    record.scaled_scores.insert(SubtestId::Cd, 9);
    record
}

#[test]
fn saved_record_loads_back() {
    let (_dir, store) = store();
    let original = record("Eva");
    save_record(&store, &original).unwrap();

    let loaded = load_record(&store, original.id).unwrap();
    assert_eq!(loaded.patient_name, "Eva");
    assert_eq!(loaded.scaled_scores.get(&SubtestId::Cd), Some(&9));
}

#[test]
fn deleted_record_is_gone() {
    let (_dir, store) = store();
    let original = record("Eva");
    save_record(&store, &original).unwrap();
    delete_record(&store, original.id).unwrap();

    assert!(matches!(
        load_record(&store, original.id),
        Err(StorageError::NotFound { .. })
    ));
}

#[test]
fn listing_is_newest_first_and_skips_corrupt_files() {
    let (_dir, store) = store();
    let mut older = record("Older");
    older.updated_at = older.updated_at - SignedDuration::from_hours(1);
    let newer = record("Newer");
    save_record(&store, &older).unwrap();
    save_record(&store, &newer).unwrap();
    put_object(
        &store,
        "records/00000000-0000-0000-0000-000000000000.json",
        b"not json",
    )
    .unwrap();

    let names: Vec<String> = list_records(&store)
        .unwrap()
        .into_iter()
        .map(|s| s.patient_name)
        .collect();
    assert_eq!(names, ["Newer", "Older"]);
}

#[test]
fn backup_round_trips_through_a_file() {
    let (dir, store) = store();
    save_record(&store, &record("Eva")).unwrap();
    save_record(&store, &record("Leo")).unwrap();

    let backup = export_backup(&store).unwrap();
    assert_eq!(backup.format_version, BACKUP_FORMAT_VERSION);
    assert_eq!(backup.records.len(), 2);

    let path = dir.path().join("backup.json");
    write_backup(&path, &backup).unwrap();
    let restored = read_backup(&path).unwrap();
    assert_eq!(restored.records.len(), 2);

    let (_other_dir, fresh) = self::store();
    let summary = import_backup(&fresh, &restored).unwrap();
    assert_eq!(summary, ImportSummary { imported: 2, skipped: 0 });
    assert_eq!(list_records(&fresh).unwrap().len(), 2);
}

#[test]
fn import_keeps_the_newer_copy() {
    let (_dir, store) = store();
    let mut stored = record("Stored");
    save_record(&store, &stored).unwrap();

    let mut stale = stored.clone();
    stale.patient_name = "Stale".to_string();
    stale.updated_at = stored.updated_at - SignedDuration::from_secs(60);

    let fresh_id = record("Fresh");
    let backup = Backup {
        format_version: BACKUP_FORMAT_VERSION,
        exported_at: jiff::Timestamp::now(),
        records: vec![stale, fresh_id],
    };
    let summary = import_backup(&store, &backup).unwrap();
    assert_eq!(summary, ImportSummary { imported: 1, skipped: 1 });
    assert_eq!(load_record(&store, stored.id).unwrap().patient_name, "Stored");

    stored.patient_name = "Renamed".to_string();
    stored.updated_at = stored.updated_at + SignedDuration::from_secs(60);
    let backup = Backup {
        records: vec![stored.clone()],
        ..backup
    };
    import_backup(&store, &backup).unwrap();
    assert_eq!(load_record(&store, stored.id).unwrap().patient_name, "Renamed");
}

#[test]
fn newer_backup_format_is_rejected() {
    let body = format!(
        r#"{{ "format_version": {}, "exported_at": "2024-01-01T00:00:00Z", "records": [] }}"#,
        BACKUP_FORMAT_VERSION + 1
    );
    assert!(matches!(
        Backup::from_json(body.as_bytes()),
        Err(StorageError::UnsupportedBackup { .. })
    ));
}

#[cfg(unix)]
#[test]
fn backup_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, store) = store();
    save_record(&store, &record("Eva")).unwrap();
    let path = dir.path().join("out").join("backup.json");
    write_backup(&path, &export_backup(&store).unwrap()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
