use crate::types::criteria::{SortKey, SortOrder};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hiring-board",
    version,
    about = "Candidate scoring, filtering and team selection CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Explicit config file (defaults to hiring-board.toml next to the input)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter and sort the candidate pool
    List(ListCommand),
    /// Show how each candidate's score is composed
    Score(ScoreCommand),
    /// Compare diversity of the selected team against the pool
    Diversity(DiversityCommand),
    /// Show the ranked selected team
    Team(TeamCommand),
    /// Generate the hiring report for the selected team
    Report(ReportCommand),
    /// List the skills and locations available as filters
    Options(OptionsCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ViewFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

/// Selection and manual review edits applied after ingestion, in this order:
/// overrides, notes, then selections.
#[derive(Args, Debug, Default)]
pub struct ReviewArgs {
    /// Toggle selection of a candidate id (repeatable, applied in order)
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Replace a candidate's score, clamped to 0-100 (ID=SCORE)
    #[arg(long = "override", value_name = "ID=SCORE")]
    pub overrides: Vec<String>,

    /// Attach a note to a candidate (ID=TEXT)
    #[arg(long = "note", value_name = "ID=TEXT")]
    pub notes: Vec<String>,
}

#[derive(Args)]
pub struct ListCommand {
    pub input: PathBuf,
    /// Case-insensitive search over name, role, location and skills
    #[arg(long, default_value = "")]
    pub search: String,
    #[arg(long)]
    pub min_experience: Option<f64>,
    #[arg(long)]
    pub max_experience: Option<f64>,
    /// Require at least one of these skills (repeatable)
    #[arg(long = "skill", value_name = "SKILL")]
    pub skills: Vec<String>,
    /// Require one of these exact locations (repeatable)
    #[arg(long = "location", value_name = "LOCATION")]
    pub locations: Vec<String>,
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,
    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,
    #[command(flatten)]
    pub review: ReviewArgs,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ViewFormat,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub input: PathBuf,
    /// Only show this candidate
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Args)]
pub struct DiversityCommand {
    pub input: PathBuf,
    #[command(flatten)]
    pub review: ReviewArgs,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ViewFormat,
}

#[derive(Args)]
pub struct TeamCommand {
    pub input: PathBuf,
    #[command(flatten)]
    pub review: ReviewArgs,
}

#[derive(Args)]
pub struct ReportCommand {
    pub input: PathBuf,
    #[command(flatten)]
    pub review: ReviewArgs,
    /// Output format (defaults to report.format from config, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct OptionsCommand {
    pub input: PathBuf,
}
