use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cognita_core::models::index::IndexId;
use cognita_core::models::subtest::SubtestId;
use jiff::civil::Date;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "cognita",
    about = "Score WISC-IV batteries and keep patient test records",
    version
)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a set of scaled scores without saving anything
    Score(ScoreArgs),
    /// Print the descriptive band for a composite score
    Classify {
        composite: f64,
    },
    /// Chronological age and norm bracket at testing
    Age {
        #[arg(long)]
        birth: Date,
        #[arg(long)]
        test: Date,
    },
    /// Manage stored test records
    Record {
        #[command(subcommand)]
        command: RecordCommand,
    },
    /// Export a stored record
    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },
    /// Write every stored record to a backup file
    Backup {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Restore records from a backup file
    Import {
        path: PathBuf,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// Scaled score as `code=value`, e.g. `--score sm=10`. Repeatable.
    #[arg(long = "score", short = 's', value_parser = parse_scaled)]
    pub scores: Vec<(SubtestId, u8)>,
    /// Only report this index
    #[arg(long)]
    pub index: Option<IndexId>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// Create a record, score it and save it
    New(NewRecordArgs),
    /// List stored records, most recently updated first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one record with its index scores
    Show {
        id: Uuid,
        #[arg(long)]
        json: bool,
    },
    /// Change scores or details on a record and rescore it
    Set(SetRecordArgs),
    /// Delete a record
    Delete {
        id: Uuid,
    },
}

#[derive(Args, Debug)]
pub struct NewRecordArgs {
    #[arg(long)]
    pub patient: String,
    #[arg(long)]
    pub birth: Date,
    #[arg(long)]
    pub test: Date,
    #[arg(long)]
    pub examiner: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Raw score as `code=value`. Repeatable.
    #[arg(long = "raw", value_parser = parse_raw)]
    pub raw: Vec<(SubtestId, u32)>,
    /// Scaled score as `code=value`. Repeatable.
    #[arg(long = "score", short = 's', value_parser = parse_scaled)]
    pub scores: Vec<(SubtestId, u8)>,
}

#[derive(Args, Debug)]
pub struct SetRecordArgs {
    pub id: Uuid,
    #[arg(long = "raw", value_parser = parse_raw)]
    pub raw: Vec<(SubtestId, u32)>,
    #[arg(long = "score", short = 's', value_parser = parse_scaled)]
    pub scores: Vec<(SubtestId, u8)>,
    /// Remove both raw and scaled scores for a subtest. Repeatable.
    #[arg(long)]
    pub clear: Vec<SubtestId>,
    #[arg(long)]
    pub patient: Option<String>,
    #[arg(long)]
    pub examiner: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    /// Render the report template to a Word document
    Docx {
        id: Uuid,
        /// Output file; defaults to the reports folder of the data directory
        #[arg(long)]
        out: Option<PathBuf>,
        /// Tera template to use instead of the built-in report
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Write the record as JSON
    Json {
        id: Uuid,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the configuration in effect
    Show,
    /// Write a configuration file
    Init {
        #[arg(long)]
        data_dir: Option<PathBuf>,
        #[arg(long)]
        examiner: Option<String>,
        #[arg(long)]
        scaled_norms: Option<PathBuf>,
        #[arg(long)]
        composite_norms: Option<PathBuf>,
        /// Replace an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Parse `code=value` into a subtest and a scaled score.
pub fn parse_scaled(s: &str) -> Result<(SubtestId, u8), String> {
    parse_assignment(s)
}

/// Parse `code=value` into a subtest and a raw score.
pub fn parse_raw(s: &str) -> Result<(SubtestId, u32), String> {
    parse_assignment(s)
}

fn parse_assignment<T: std::str::FromStr>(s: &str) -> Result<(SubtestId, T), String> {
    let (code, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected code=value, got {s:?}"))?;
    let subtest: SubtestId = code.trim().parse().map_err(|e| format!("{e}"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|_| format!("{subtest}: {:?} is not a valid score", value.trim()))?;
    Ok((subtest, value))
}
