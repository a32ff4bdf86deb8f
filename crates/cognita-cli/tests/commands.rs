use cognita_cli::cli::{NewRecordArgs, ScoreArgs, SetRecordArgs, parse_raw, parse_scaled};
use cognita_cli::commands::{
    backup, classify_composite, describe_age, export_docx, import, new_record, score,
    update_record,
};
use cognita_cli::config::CognitaConfig;
use cognita_cli::state::AppState;
use cognita_core::models::index::IndexId;
use cognita_core::models::subtest::SubtestId;
use cognita_instruments::instruments::wisc_iv::QIT;
use cognita_instruments::norms::NormStore;
use cognita_storage::objects::LocalStore;
use cognita_storage::records::{list_records, load_record};
use jiff::civil::date;

fn state(dir: &std::path::Path) -> AppState {
    let config = CognitaConfig {
        data_dir: dir.to_path_buf(),
        examiner: Some("Dr. Lima".to_string()),
        ..CognitaConfig::default()
    };
    AppState {
        store: LocalStore::open(dir).unwrap(),
        norms: NormStore::builtin().clone(),
        scaled: None,
        config,
    }
}

fn new_args(scores: Vec<(SubtestId, u8)>) -> NewRecordArgs {
    NewRecordArgs {
        patient: "Ana Souza".to_string(),
        birth: date(2015, 3, 10),
        test: date(2024, 9, 2),
        examiner: None,
        notes: None,
        raw: vec![(SubtestId::Sm, 21)],
        scores,
    }
}

#[test]
fn assignments_parse() {
    assert_eq!(parse_scaled("sm=10"), Ok((SubtestId::Sm, 10)));
    assert_eq!(parse_scaled(" VC = 12 "), Ok((SubtestId::Vc, 12)));
    assert_eq!(parse_raw("cd=54"), Ok((SubtestId::Cd, 54)));
    assert!(parse_scaled("sm").is_err());
    assert!(parse_scaled("xx=3").is_err());
    assert!(parse_scaled("sm=300").is_err());
}

#[test]
fn score_prints_one_row_per_index() {
    let args = ScoreArgs {
        scores: vec![(SubtestId::Sm, 10), (SubtestId::Vc, 10), (SubtestId::Co, 10)],
        ..ScoreArgs::default()
    };
    let table = score(NormStore::builtin(), &args).unwrap();

    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[1].starts_with("ICV"));
    assert!(lines[1].contains("101"));
    assert!(lines[1].contains("94-108"));
    assert!(lines[1].ends_with("Average"));
    assert!(lines[5].starts_with("QIT"));
    assert!(lines[5].ends_with("--"));
}

#[test]
fn score_can_emit_json_for_one_index() {
    let args = ScoreArgs {
        scores: vec![(SubtestId::Cd, 10), (SubtestId::Ps, 10)],
        index: Some(IndexId::Ivp),
        json: true,
    };
    let json: serde_json::Value =
        serde_json::from_str(&score(NormStore::builtin(), &args).unwrap()).unwrap();

    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["index"], "ivp");
    assert_eq!(json[0]["sum"], 20);
    assert_eq!(json[0]["composite"], 100);
}

#[test]
fn out_of_range_scaled_score_is_rejected() {
    let args = ScoreArgs {
        scores: vec![(SubtestId::Sm, 25)],
        ..ScoreArgs::default()
    };
    assert!(score(NormStore::builtin(), &args).is_err());
}

#[test]
fn classify_and_age_helpers() {
    assert_eq!(classify_composite(101.0), "Average");
    assert_eq!(classify_composite(f64::NAN), "--");
    assert_eq!(
        describe_age(date(2015, 3, 10), date(2024, 9, 2)).unwrap(),
        "9:5 (norm bracket 9:4-9:7)"
    );
    assert!(describe_age(date(2024, 1, 1), date(2023, 1, 1)).is_err());
}

#[test]
fn new_record_is_scored_and_saved_with_default_examiner() {
    let dir = tempfile::tempdir().unwrap();
    let state = state(dir.path());

    let scores = QIT.iter().map(|&subtest| (subtest, 10)).collect();
    let record = new_record(&state, new_args(scores)).unwrap();

    let stored = load_record(&state.store, record.id).unwrap();
    assert_eq!(stored.examiner.as_deref(), Some("Dr. Lima"));
    assert_eq!(stored.index_summary(IndexId::Qit).composite, "100");
    assert_eq!(stored.raw_scores.get(&SubtestId::Sm), Some(&21));
}

#[test]
fn update_rescores_and_clears() {
    let dir = tempfile::tempdir().unwrap();
    let state = state(dir.path());
    let record = new_record(
        &state,
        new_args(vec![(SubtestId::Sm, 10), (SubtestId::Vc, 10), (SubtestId::Co, 10)]),
    )
    .unwrap();
    assert_eq!(record.index_summary(IndexId::Icv).composite, "101");

    let updated = update_record(
        &state,
        SetRecordArgs {
            id: record.id,
            raw: vec![],
            scores: vec![(SubtestId::Co, 11)],
            clear: vec![SubtestId::Sm],
            patient: None,
            examiner: None,
            notes: Some("retest".to_string()),
        },
    )
    .unwrap();

    assert!(updated.index_summary(IndexId::Icv).is_absent());
    assert!(!updated.scaled_scores.contains_key(&SubtestId::Sm));
    assert!(!updated.raw_scores.contains_key(&SubtestId::Sm));
    assert_eq!(updated.notes.as_deref(), Some("retest"));
    assert!(updated.updated_at >= record.updated_at);
}

#[test]
fn docx_export_defaults_to_the_reports_folder() {
    let dir = tempfile::tempdir().unwrap();
    let state = state(dir.path());
    let record = new_record(&state, new_args(vec![(SubtestId::Cd, 9)])).unwrap();

    let path = export_docx(&state, record.id, None, None).unwrap();
    assert_eq!(path, dir.path().join("reports").join(format!("{}.docx", record.id)));
    assert_eq!(&std::fs::read(&path).unwrap()[..2], b"PK");

    let template = dir.path().join("short.tera");
    std::fs::write(&template, "# {{ patient_name }}").unwrap();
    let out = dir.path().join("short.docx");
    export_docx(&state, record.id, Some(&out), Some(&template)).unwrap();
    assert!(out.exists());
}

#[test]
fn backup_then_import_into_a_fresh_store() {
    let dir = tempfile::tempdir().unwrap();
    let state = state(&dir.path().join("a"));
    new_record(&state, new_args(vec![])).unwrap();
    new_record(&state, new_args(vec![])).unwrap();

    let file = dir.path().join("backup.json");
    let message = backup(&state, Some(&file)).unwrap();
    assert!(message.starts_with("backed up 2 record(s)"));

    let fresh = self::state(&dir.path().join("b"));
    let summary = import(&fresh, &file).unwrap();
    assert_eq!(summary.imported, 2);
    assert_eq!(list_records(&fresh.store).unwrap().len(), 2);

    let again = import(&fresh, &file).unwrap();
    assert_eq!((again.imported, again.skipped), (0, 2));
}

#[cfg(unix)]
#[test]
fn docx_export_to_an_explicit_path_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let state = state(&dir.path().join("data"));
    let record = new_record(&state, new_args(vec![])).unwrap();

    let out = dir.path().join("report.docx");
    export_docx(&state, record.id, Some(&out), None).unwrap();

    let mode = std::fs::metadata(&out).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
