use cognita_cli::config::{
    CURRENT_VERSION, CognitaConfig, load_config, load_or_default, migrate, save_config,
};
use cognita_export::styles::DocumentStyles;
use serde_json::json;

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cognita").join("config.json");
    let config = CognitaConfig {
        data_dir: dir.path().join("data"),
        examiner: Some("Dr. Lima".to_string()),
        ..CognitaConfig::default()
    };

    save_config(&path, &config).unwrap();
    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded, config);
    assert!(!path.with_extension("json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &CognitaConfig::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_or_default(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert!(config.examiner.is_none());
}

#[test]
fn unversioned_config_is_migrated() {
    let migrated = migrate(
        json!({ "data_dir": "/srv/cognita", "examiner_name": "Dr. Lima" }),
        0,
    )
    .unwrap();

    assert_eq!(migrated["config_version"], 1);
    assert_eq!(migrated["examiner"], "Dr. Lima");
    assert!(migrated.get("examiner_name").is_none());

    let config: CognitaConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.styles, DocumentStyles::default());
}

#[test]
fn migration_keeps_an_explicit_examiner() {
    let migrated = migrate(
        json!({ "data_dir": "/d", "examiner": "New", "examiner_name": "Old" }),
        0,
    )
    .unwrap();
    assert_eq!(migrated["examiner"], "New");
}

#[test]
fn unversioned_file_loads_through_migration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "data_dir": "/srv/cognita" }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.data_dir, std::path::PathBuf::from("/srv/cognita"));
}

#[test]
fn newer_config_is_rejected() {
    let err = migrate(json!({ "data_dir": "/d" }), CURRENT_VERSION + 1).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn partial_styles_fill_in_defaults() {
    let config: CognitaConfig = serde_json::from_value(json!({
        "config_version": 1,
        "data_dir": "/d",
        "styles": { "body_font": "Georgia" }
    }))
    .unwrap();
    assert_eq!(config.styles.body_font, "Georgia");
    assert_eq!(config.styles.margin_inches, DocumentStyles::default().margin_inches);
}
