pub mod json;
pub mod md;
pub mod text;

use crate::board::CandidatePool;
use crate::error::{BoardError, Result};
use crate::scoring::classify::{score_band, RoleCategory};
use crate::types::candidate::Candidate;
use crate::types::report::{HiringReport, TeamMember};
use chrono::NaiveDate;

pub const KEY_SKILL_COUNT: usize = 3;
pub const STRENGTH_COUNT: usize = 2;
pub const NO_NOTES: &str = "No additional notes.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Md,
    Json,
}

/// Builds the hiring report for the current selection; an empty team is an error.
pub fn build(pool: &CandidatePool, title: &str, generated: NaiveDate) -> Result<HiringReport> {
    let team = pool.team();
    if team.is_empty() {
        return Err(BoardError::EmptyTeam);
    }

    let members = team
        .iter()
        .enumerate()
        .map(|(index, candidate)| member(index + 1, candidate))
        .collect();

    Ok(HiringReport {
        title: title.to_string(),
        generated,
        total_candidates: pool.len(),
        selected_count: team.len(),
        open_slots: pool.remaining_slots(),
        average_score: pool.average_team_score(),
        members,
        diversity: pool.diversity(),
    })
}

fn member(rank: usize, candidate: &Candidate) -> TeamMember {
    let score = candidate.score_or_zero();
    TeamMember {
        rank,
        id: candidate.id.clone(),
        name: candidate.name.clone(),
        role: candidate.current_role.clone(),
        category: RoleCategory::from_role(candidate.role()).label().to_string(),
        score,
        band: score_band(score).label().to_string(),
        experience_years: candidate.experience_years,
        key_skills: candidate
            .skills()
            .iter()
            .take(KEY_SKILL_COUNT)
            .cloned()
            .collect(),
        justification: justification(candidate),
    }
}

fn justification(candidate: &Candidate) -> String {
    let strengths = candidate
        .skills()
        .iter()
        .take(STRENGTH_COUNT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Strong candidate with {} years of experience. Key strengths: {}. {}",
        format_years(candidate.experience_years),
        strengths,
        candidate
            .notes
            .as_deref()
            .filter(|note| !note.trim().is_empty())
            .unwrap_or(NO_NOTES)
    )
}

/// Whole years print without a decimal point; missing values print as 0.
pub fn format_years(years: Option<f64>) -> String {
    let years = years.unwrap_or(0.0);
    if years.fract() == 0.0 {
        format!("{years:.0}")
    } else {
        format!("{years}")
    }
}

pub fn render(report: &HiringReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Json => json::to_json(report).map_err(BoardError::Json),
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::pool_with_team;
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date")
    }

    #[test]
    fn build_ranks_team_by_score() {
        let report = build(&pool_with_team(), "Hiring", date()).expect("report should build");
        assert_eq!(report.total_candidates, 3);
        assert_eq!(report.selected_count, 2);
        assert_eq!(report.open_slots, 3);
        let names: Vec<&str> = report.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Sarah Johnson", "Marcus Lee"]);
        assert_eq!(report.members[0].rank, 1);
        assert_eq!(report.members[0].category, "Engineering");
        assert_eq!(report.members[0].key_skills, vec!["React", "Node.js", "AWS"]);
    }

    #[test]
    fn justification_uses_notes_or_placeholder() {
        let report = build(&pool_with_team(), "Hiring", date()).expect("report should build");
        assert_eq!(
            report.members[0].justification,
            "Strong candidate with 8 years of experience. Key strengths: React, Node.js. No additional notes."
        );
        assert_eq!(
            report.members[1].justification,
            "Strong candidate with 4.5 years of experience. Key strengths: Product Strategy. Strong communicator."
        );
    }

    #[test]
    fn blank_note_falls_back_to_placeholder() {
        let mut quiet = Candidate::new("1", "Quiet Person", "quiet@example.com");
        quiet.skills = Some(vec!["React".to_string()]);
        quiet.notes = Some("  ".to_string());
        let mut pool = CandidatePool::ingest(vec![quiet]);
        pool.toggle("1");

        let report = build(&pool, "Hiring", date()).expect("report should build");
        assert_eq!(
            report.members[0].justification,
            "Strong candidate with 0 years of experience. Key strengths: React. No additional notes."
        );
    }

    #[test]
    fn build_refuses_empty_team() {
        let pool = CandidatePool::ingest(vec![Candidate::new("1", "Solo", "solo@example.com")]);
        assert!(matches!(
            build(&pool, "Hiring", date()),
            Err(BoardError::EmptyTeam)
        ));
    }

    #[test]
    fn format_years_trims_whole_numbers() {
        assert_eq!(format_years(Some(12.0)), "12");
        assert_eq!(format_years(Some(2.5)), "2.5");
        assert_eq!(format_years(None), "0");
    }
}
