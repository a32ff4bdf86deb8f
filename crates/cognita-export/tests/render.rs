use cognita_core::models::record::TestRecord;
use cognita_core::models::scale::ScaleType;
use cognita_core::models::subtest::SubtestId;
use cognita_export::error::ExportError;
use cognita_export::render::{ReportContext, render_report};
use cognita_instruments::norms::NormStore;
use cognita_instruments::record::score_record;
use jiff::civil::date;

fn scored_record() -> TestRecord {
    let mut record = TestRecord::new(
        ScaleType::Wisc,
        "Ana Souza",
        date(2015, 3, 10),
        date(2024, 9, 2),
    );
    record.examiner = Some("Dr. Lima".to_string());
    for (subtest, score) in [(SubtestId::Sm, 10), (SubtestId::Vc, 10), (SubtestId::Co, 10)] {
        record.scaled_scores.insert(subtest, score);
    }
    record.raw_scores.insert(SubtestId::Sm, 21);
    score_record(&mut record, NormStore::builtin(), None);
    record
}

#[test]
fn context_lists_only_entered_subtests() {
    let context = ReportContext::from_record(&scored_record());

    let codes: Vec<&str> = context.subtests.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes, ["sm", "vc", "co"]);
    assert_eq!(context.subtests[0].raw, "21");
    assert_eq!(context.subtests[1].raw, "--");
    assert_eq!(context.age, "9:5");
    assert_eq!(context.indices.len(), 5);
}

#[test]
fn default_template_shows_patient_and_index_rows() {
    let rendered = render_report(&scored_record(), None).unwrap();

    assert!(rendered.starts_with("# WISC-IV Score Report"));
    assert!(rendered.contains("**Patient:** Ana Souza"));
    assert!(rendered.contains("**Examiner:** Dr. Lima"));
    assert!(rendered.contains("| ICV | 30 | 101 | 53 | 94-108 | Average |"));
    assert!(rendered.contains("| QIT | -- | -- | -- | -- | -- |"));
    assert!(!rendered.contains("## Notes"));
}

#[test]
fn examiner_line_is_omitted_when_unknown() {
    let mut record = scored_record();
    record.examiner = None;
    record.notes = Some("Cooperative throughout.".to_string());

    let rendered = render_report(&record, None).unwrap();
    assert!(!rendered.contains("Examiner"));
    assert!(rendered.contains("## Notes\n\nCooperative throughout."));
}

#[test]
fn custom_template_is_used() {
    let rendered = render_report(
        &scored_record(),
        Some("{{ patient_name }}: {% for i in indices %}{{ i.abbreviation }}={{ i.composite }} {% endfor %}"),
    )
    .unwrap();
    assert_eq!(
        rendered,
        "Ana Souza: ICV=101 IOP=-- IMO=-- IVP=-- QIT=-- "
    );
}

#[test]
fn broken_template_is_a_parse_error() {
    let result = render_report(&scored_record(), Some("{% for x in %}"));
    assert!(matches!(result, Err(ExportError::TemplateParse(_))));
}
