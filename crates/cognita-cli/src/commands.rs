use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use cognita_core::keys;
use cognita_core::models::index::{ABSENT, IndexId, IndexSummary};
use cognita_core::models::record::{RecordSummary, TestRecord};
use cognita_core::models::scale::ScaleType;
use cognita_core::models::subtest::{ScaledScores, SubtestId};
use cognita_export::docx::generate_docx;
use cognita_export::json::export_json;
use cognita_export::render::render_report;
use cognita_instruments::age::{AgeBracket, chronological_age};
use cognita_instruments::classification::classify;
use cognita_instruments::composite::{score_all, score_index};
use cognita_instruments::instrument_for;
use cognita_instruments::norms::NormStore;
use cognita_instruments::record::score_record;
use cognita_storage::backup::{
    ImportSummary, export_backup, import_backup, read_backup, write_backup,
};
use cognita_storage::objects::{put_object, write_private};
use cognita_storage::records::{delete_record, list_records, load_record, save_record};
use eyre::{WrapErr, bail};
use jiff::civil::Date;
use uuid::Uuid;

use crate::cli::{
    Cli, Command, ConfigCommand, ExportCommand, NewRecordArgs, RecordCommand, ScoreArgs,
    SetRecordArgs,
};
use crate::config::{self, CognitaConfig};
use crate::state::{self, AppState};

pub fn run(cli: Cli) -> eyre::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };

    let output = match cli.command {
        Command::Score(args) => {
            let config = config::load_or_default(&config_path)?;
            score(&state::load_norms(&config)?, &args)?
        }
        Command::Classify { composite } => classify_composite(composite),
        Command::Age { birth, test } => describe_age(birth, test)?,
        Command::Record { command } => {
            let state = AppState::load(config::load_or_default(&config_path)?)?;
            record_command(&state, command)?
        }
        Command::Export { command } => {
            let state = AppState::load(config::load_or_default(&config_path)?)?;
            export_command(&state, command)?
        }
        Command::Backup { out } => {
            let state = AppState::load(config::load_or_default(&config_path)?)?;
            backup(&state, out.as_deref())?
        }
        Command::Import { path } => {
            let state = AppState::load(config::load_or_default(&config_path)?)?;
            let summary = import(&state, &path)?;
            format!(
                "imported {} record(s), skipped {}",
                summary.imported, summary.skipped
            )
        }
        Command::Config { command } => config_command(&config_path, command)?,
    };

    println!("{output}");
    Ok(())
}

// ── Scoring ─────────────────────────────────────────────────────────

/// Score scaled scores without touching storage.
pub fn score(norms: &NormStore, args: &ScoreArgs) -> eyre::Result<String> {
    let scores: ScaledScores = args.scores.iter().copied().collect();
    validate(&scores)?;

    let results = match args.index {
        Some(index) => vec![score_index(norms, ScaleType::Wisc, index, &scores)?],
        None => score_all(norms, ScaleType::Wisc, &scores)?,
    };

    if args.json {
        return Ok(serde_json::to_string_pretty(&results)?);
    }
    let rows: Vec<_> = results
        .iter()
        .map(|score| (score.index, score.to_summary()))
        .collect();
    Ok(index_table(&rows))
}

pub fn classify_composite(composite: f64) -> String {
    classify(Some(composite)).map_or_else(|| ABSENT.to_string(), |band| band.to_string())
}

pub fn describe_age(birth: Date, test: Date) -> eyre::Result<String> {
    let age = chronological_age(birth, test)?;
    Ok(match AgeBracket::containing(age) {
        Ok(bracket) => format!("{age} (norm bracket {bracket})"),
        Err(e) => format!("{age} ({e})"),
    })
}

fn validate(scores: &ScaledScores) -> eyre::Result<()> {
    Ok(instrument_for(ScaleType::Wisc).check_scores(scores)?)
}

/// Fixed-width table of index rows.
pub fn index_table(rows: &[(IndexId, IndexSummary)]) -> String {
    let mut out = format!(
        "{:<6}{:>5}{:>11}{:>12}{:>10}  {}",
        "Index", "Sum", "Composite", "Percentile", "95% CI", "Classification"
    );
    for (index, summary) in rows {
        let _ = write!(
            out,
            "\n{:<6}{:>5}{:>11}{:>12}{:>10}  {}",
            index.abbreviation(),
            summary.sum,
            summary.composite,
            summary.percentile,
            summary.confidence_interval,
            summary.classification,
        );
    }
    out
}

// ── Records ─────────────────────────────────────────────────────────

fn record_command(state: &AppState, command: RecordCommand) -> eyre::Result<String> {
    match command {
        RecordCommand::New(args) => {
            let record = new_record(state, args)?;
            Ok(format!("created record {}\n\n{}", record.id, show_record(&record)))
        }
        RecordCommand::List { json } => {
            let summaries = list_records(&state.store)?;
            if json {
                Ok(serde_json::to_string_pretty(&summaries)?)
            } else {
                Ok(record_list(&summaries))
            }
        }
        RecordCommand::Show { id, json } => {
            let record = load_record(&state.store, id)?;
            if json {
                Ok(serde_json::to_string_pretty(&record)?)
            } else {
                Ok(show_record(&record))
            }
        }
        RecordCommand::Set(args) => {
            let record = update_record(state, args)?;
            Ok(show_record(&record))
        }
        RecordCommand::Delete { id } => {
            delete_record(&state.store, id)?;
            Ok(format!("deleted record {id}"))
        }
    }
}

/// Create, score and persist a new record.
pub fn new_record(state: &AppState, args: NewRecordArgs) -> eyre::Result<TestRecord> {
    let mut record = TestRecord::new(ScaleType::Wisc, args.patient, args.birth, args.test);
    record.examiner = args.examiner.or_else(|| state.config.examiner.clone());
    record.notes = args.notes;
    apply_scores(&mut record, &args.raw, &args.scores, &[])?;

    score_record(&mut record, &state.norms, state.scaled_provider());
    save_record(&state.store, &record)?;
    Ok(record)
}

/// Apply edits to a stored record, rescore it and save it.
pub fn update_record(state: &AppState, args: SetRecordArgs) -> eyre::Result<TestRecord> {
    let mut record = load_record(&state.store, args.id)?;
    if let Some(patient) = args.patient {
        record.patient_name = patient;
    }
    if let Some(examiner) = args.examiner {
        record.examiner = Some(examiner);
    }
    if let Some(notes) = args.notes {
        record.notes = Some(notes);
    }
    apply_scores(&mut record, &args.raw, &args.scores, &args.clear)?;

    score_record(&mut record, &state.norms, state.scaled_provider());
    save_record(&state.store, &record)?;
    Ok(record)
}

fn apply_scores(
    record: &mut TestRecord,
    raw: &[(SubtestId, u32)],
    scaled: &[(SubtestId, u8)],
    clear: &[SubtestId],
) -> eyre::Result<()> {
    let entered: ScaledScores = scaled.iter().copied().collect();
    validate(&entered)?;

    for subtest in clear {
        record.raw_scores.remove(subtest);
        record.scaled_scores.remove(subtest);
        record.converted.remove(subtest);
    }
    record.raw_scores.extend(raw.iter().copied());
    for (subtest, score) in entered {
        record.scaled_scores.insert(subtest, score);
        record.converted.remove(&subtest);
    }
    Ok(())
}

pub fn show_record(record: &TestRecord) -> String {
    let mut out = format!(
        "{}  ({})\nborn {}  tested {}  age {}\n",
        record.patient_name,
        record.id,
        record.birth_date,
        record.test_date,
        record.age_bracket.as_deref().unwrap_or(ABSENT),
    );
    if let Some(examiner) = &record.examiner {
        let _ = writeln!(out, "examiner {examiner}");
    }
    out.push('\n');
    out.push_str(&instrument_for(record.scale_type).score_sheet(&record.scaled_scores));

    let rows: Vec<_> = IndexId::ALL
        .into_iter()
        .map(|index| (index, record.index_summary(index)))
        .collect();
    out.push_str(&index_table(&rows));
    out
}

fn record_list(summaries: &[RecordSummary]) -> String {
    if summaries.is_empty() {
        return "no records".to_string();
    }
    let mut out = format!(
        "{:<38}{:<24}{:<12}{:>5}",
        "Id", "Patient", "Tested", "QIT"
    );
    for summary in summaries {
        let _ = write!(
            out,
            "\n{:<38}{:<24}{:<12}{:>5}",
            summary.id.to_string(),
            summary.patient_name,
            summary.test_date.to_string(),
            summary.full_scale,
        );
    }
    out
}

// ── Export ──────────────────────────────────────────────────────────

fn export_command(state: &AppState, command: ExportCommand) -> eyre::Result<String> {
    let path = match command {
        ExportCommand::Docx { id, out, template } => {
            export_docx(state, id, out.as_deref(), template.as_deref())?
        }
        ExportCommand::Json { id, out } => {
            let record = load_record(&state.store, id)?;
            let body = export_json(&record)?;
            write_output(state, &keys::report_json(id), out.as_deref(), &body)?
        }
    };
    Ok(format!("wrote {}", path.display()))
}

/// Render and write a DOCX report. Returns where it was written.
pub fn export_docx(
    state: &AppState,
    id: Uuid,
    out: Option<&Path>,
    template: Option<&Path>,
) -> eyre::Result<PathBuf> {
    let record = load_record(&state.store, id)?;
    let template = template
        .map(|path| {
            std::fs::read_to_string(path)
                .wrap_err_with(|| format!("reading template {}", path.display()))
        })
        .transpose()?;

    let rendered = render_report(&record, template.as_deref())?;
    let body = generate_docx(&rendered, &state.config.styles)?;
    write_output(state, &keys::report_docx(id), out, &body)
}

/// Write to `out` if given, else to `key` in the data directory.
fn write_output(
    state: &AppState,
    key: &str,
    out: Option<&Path>,
    body: &[u8],
) -> eyre::Result<PathBuf> {
    match out {
        Some(path) => {
            write_private(path, body).wrap_err_with(|| format!("writing {}", path.display()))?;
            Ok(path.to_path_buf())
        }
        None => {
            put_object(&state.store, key, body)?;
            Ok(state.store.path_for(key)?)
        }
    }
}

// ── Backup ──────────────────────────────────────────────────────────

/// Back up every record to `out`, or to the data directory's backups folder.
pub fn backup(state: &AppState, out: Option<&Path>) -> eyre::Result<String> {
    let backup = export_backup(&state.store)?;
    let count = backup.records.len();
    let path = match out {
        Some(path) => {
            write_backup(path, &backup)?;
            path.to_path_buf()
        }
        None => {
            let stamp = backup.exported_at.strftime("%Y%m%dT%H%M%SZ").to_string();
            write_output(state, &keys::backup(&stamp), None, &backup.to_json()?)?
        }
    };
    Ok(format!("backed up {count} record(s) to {}", path.display()))
}

pub fn import(state: &AppState, path: &Path) -> eyre::Result<ImportSummary> {
    let backup = read_backup(path)?;
    Ok(import_backup(&state.store, &backup)?)
}

// ── Config ──────────────────────────────────────────────────────────

fn config_command(path: &Path, command: ConfigCommand) -> eyre::Result<String> {
    match command {
        ConfigCommand::Show => {
            let config = config::load_or_default(path)?;
            Ok(format!(
                "config file: {}{}\ndata directory in effect: {}\n{}",
                path.display(),
                if path.exists() { "" } else { " (not created)" },
                config.effective_data_dir().display(),
                serde_json::to_string_pretty(&config)?,
            ))
        }
        ConfigCommand::Init {
            data_dir,
            examiner,
            scaled_norms,
            composite_norms,
            force,
        } => {
            if path.exists() && !force {
                bail!(
                    "{} already exists; pass --force to replace it",
                    path.display()
                );
            }
            let defaults = CognitaConfig::default();
            let config = CognitaConfig {
                data_dir: data_dir.unwrap_or(defaults.data_dir),
                examiner,
                scaled_norms_path: scaled_norms,
                composite_norms_path: composite_norms,
                ..CognitaConfig::default()
            };
            config::save_config(path, &config)?;
            Ok(format!("wrote {}", path.display()))
        }
    }
}
