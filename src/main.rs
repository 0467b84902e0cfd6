mod board;
mod cli;
mod config;
mod error;
mod load;
mod report;
mod review;
mod scoring;
mod telemetry;
mod types;

use crate::board::CandidatePool;
use crate::error::{BoardError, Result};
use crate::types::config::{BoardConfig, ReportFormatSetting};
use crate::types::criteria::{ExperienceRange, FilterCriteria};
use clap::Parser;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

impl cli::Commands {
    fn input(&self) -> &Path {
        match self {
            Self::List(cmd) => &cmd.input,
            Self::Score(cmd) => &cmd.input,
            Self::Diversity(cmd) => &cmd.input,
            Self::Team(cmd) => &cmd.input,
            Self::Report(cmd) => &cmd.input,
            Self::Options(cmd) => &cmd.input,
        }
    }
}

/// Loaded pool plus the warnings produced while applying review edits.
struct Session {
    pool: CandidatePool,
    warnings: Vec<String>,
}

fn open_session(input: &Path, review: &cli::ReviewArgs) -> Result<Session> {
    let raw = load::load_candidates(input)?;
    let mut pool = CandidatePool::ingest(raw);
    let warnings = review::apply(&mut pool, review)?;
    Ok(Session { pool, warnings })
}

fn finish(warnings: &[String], quiet: bool) -> i32 {
    if warnings.is_empty() {
        return exit_code::SUCCESS;
    }
    if !quiet {
        for warning in warnings {
            eprintln!("warning: {warning}");
        }
    }
    exit_code::WARNINGS
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    let input = cli.command.input().to_path_buf();
    if !input.exists() {
        return Err(BoardError::InputNotFound(input.display().to_string()));
    }

    let loaded = config::load_config(&config::config_root(&input), cli.config.as_deref())?;
    let settings = loaded.unwrap_or_default();
    let level = telemetry::resolve_level(cli.verbose, cli.quiet, settings.log_level());
    telemetry::init(&level)?;

    match cli.command {
        cli::Commands::List(cmd) => {
            let session = open_session(&cmd.input, &cmd.review)?;
            let criteria = list_criteria(&cmd, &settings);
            let shown = session.pool.filter(&criteria);
            info!(shown = shown.len(), total = session.pool.len(), "filtered candidates");

            match cmd.format {
                cli::ViewFormat::Json => print_json(&shown)?,
                cli::ViewFormat::Text => {
                    println!(
                        "Showing {} of {} candidates ({}/{} selected)",
                        shown.len(),
                        session.pool.len(),
                        session.pool.selected_count(),
                        board::selection::TEAM_SIZE_LIMIT
                    );
                    print!("{}", report::text::candidate_lines(&shown));
                }
            }
            Ok(finish(&session.warnings, cli.quiet))
        }
        cli::Commands::Score(cmd) => {
            let session = open_session(&cmd.input, &cli::ReviewArgs::default())?;
            let rows: Vec<_> = match &cmd.id {
                Some(id) => session.pool.get(id).into_iter().collect::<Vec<_>>(),
                None => session.pool.candidates().iter().collect(),
            }
            .into_iter()
            .map(|candidate| (candidate, scoring::breakdown(candidate)))
            .collect();

            if let (Some(id), true) = (&cmd.id, rows.is_empty()) {
                return Ok(finish(&[format!("no candidate with id {id}")], cli.quiet));
            }
            print!("{}", report::text::breakdown_lines(&rows));
            Ok(finish(&session.warnings, cli.quiet))
        }
        cli::Commands::Diversity(cmd) => {
            let session = open_session(&cmd.input, &cmd.review)?;
            let comparison = session.pool.diversity();
            match cmd.format {
                cli::ViewFormat::Json => print_json(&comparison)?,
                cli::ViewFormat::Text => print!("{}", report::text::diversity_table(&comparison)),
            }
            Ok(finish(&session.warnings, cli.quiet))
        }
        cli::Commands::Team(cmd) => {
            let session = open_session(&cmd.input, &cmd.review)?;
            print_team(&session.pool);
            Ok(finish(&session.warnings, cli.quiet))
        }
        cli::Commands::Report(cmd) => {
            let session = open_session(&cmd.input, &cmd.review)?;
            let generated = chrono::Local::now().date_naive();
            let hiring_report =
                match report::build(&session.pool, &settings.report_title(), generated) {
                    Ok(hiring_report) => hiring_report,
                    Err(BoardError::EmptyTeam) => {
                        finish(&session.warnings, cli.quiet);
                        eprintln!("error: {}", BoardError::EmptyTeam);
                        return Ok(exit_code::BLOCKING);
                    }
                    Err(err) => return Err(err),
                };

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Text) => report::OutputFormat::Text,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                None => match settings.report_format() {
                    Some(ReportFormatSetting::Md) => report::OutputFormat::Md,
                    Some(ReportFormatSetting::Json) => report::OutputFormat::Json,
                    Some(ReportFormatSetting::Text) | None => report::OutputFormat::Text,
                },
            };
            let rendered = report::render(&hiring_report, output_format)?;

            match &cmd.output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(path, &rendered)?;
                    let digest = format!("{:x}", Sha256::digest(rendered.as_bytes()));
                    info!(path = %path.display(), sha256 = %digest, "report written");
                    println!("report file: {} (sha256 {digest})", path.display());
                }
                None => println!("{rendered}"),
            }
            Ok(finish(&session.warnings, cli.quiet))
        }
        cli::Commands::Options(cmd) => {
            let session = open_session(&cmd.input, &cli::ReviewArgs::default())?;
            println!("skills:");
            for skill in session.pool.available_skills() {
                println!("- {skill}");
            }
            println!("locations:");
            for location in session.pool.available_locations() {
                println!("- {location}");
            }
            Ok(finish(&session.warnings, cli.quiet))
        }
    }
}

/// Command-line values win over config defaults.
fn list_criteria(cmd: &cli::ListCommand, settings: &BoardConfig) -> FilterCriteria {
    let defaults = settings.experience_range();
    FilterCriteria {
        search: cmd.search.clone(),
        experience: ExperienceRange::new(
            cmd.min_experience.unwrap_or(defaults.min),
            cmd.max_experience.unwrap_or(defaults.max),
        ),
        skills: cmd.skills.clone(),
        locations: cmd.locations.clone(),
        sort_by: cmd.sort.unwrap_or_else(|| settings.sort_key()),
        sort_order: cmd.order.unwrap_or_else(|| settings.sort_order()),
    }
}

fn print_team(pool: &CandidatePool) {
    let team = pool.team();
    let metrics = pool.team_metrics();
    println!(
        "Selected team: {}/{} (average score {:.1}, {} gender groups, {} regions)",
        team.len(),
        board::selection::TEAM_SIZE_LIMIT,
        pool.average_team_score(),
        metrics.gender.len(),
        metrics.region.len()
    );
    if team.is_empty() {
        println!("No candidates selected yet");
        return;
    }
    for (index, candidate) in team.iter().enumerate() {
        println!(
            "#{} {} | {} | {} years | score {}",
            index + 1,
            candidate.name,
            candidate.current_role.as_deref().unwrap_or("Not specified"),
            report::format_years(candidate.experience_years),
            candidate.score_or_zero()
        );
    }
    if pool.remaining_slots() > 0 {
        println!(
            "You need to select {} more candidate(s) to complete your team",
            pool.remaining_slots()
        );
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
