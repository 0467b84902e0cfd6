use super::format_years;
use crate::scoring::classify::{score_band, ExperienceTier, RoleCategory};
use crate::types::candidate::Candidate;
use crate::types::metrics::DiversityComparison;
use crate::types::report::HiringReport;
use crate::types::scoring::ScoreBreakdown;

const HEADER_RULE: usize = 40;
const SECTION_RULE: usize = 25;

/// The plain-text hiring report handed to stakeholders.
pub fn to_text(report: &HiringReport) -> String {
    let mut lines = vec![
        report.title.clone(),
        "=".repeat(HEADER_RULE),
        format!("Generated: {}", report.generated.format("%Y-%m-%d")),
        format!("Total Candidates Reviewed: {}", report.total_candidates),
        format!("Selected for Team: {}", report.selected_count),
        String::new(),
        "SELECTED TEAM MEMBERS:".to_string(),
        "-".repeat(SECTION_RULE),
    ];

    for member in &report.members {
        lines.push(format!(
            "{}. {}\n   Role: {}\n   Score: {}\n   Experience: {} years\n   Key Skills: {}\n   Justification: {}\n",
            member.rank,
            member.name,
            member.role.as_deref().unwrap_or("Not specified"),
            member.score,
            format_years(member.experience_years),
            member.key_skills.join(", "),
            member.justification
        ));
    }

    lines.join("\n")
}

/// One line per candidate: selection marker, score, name, role category and tier.
pub fn candidate_lines(candidates: &[Candidate]) -> String {
    if candidates.is_empty() {
        return "No candidates found. Try adjusting your filters to see more results.\n"
            .to_string();
    }
    let mut output = String::new();
    for candidate in candidates {
        output.push_str(&format!(
            "{} {:>3} {:<8} {} ({}) | {} | {} | {}\n",
            if candidate.selected { "[x]" } else { "[ ]" },
            candidate.score_or_zero(),
            score_band(candidate.score_or_zero()).label(),
            candidate.name,
            candidate.id,
            RoleCategory::from_role(candidate.role()).label(),
            ExperienceTier::from_years(candidate.years()).label(),
            candidate.location.as_deref().unwrap_or("Unknown location")
        ));
    }
    output
}

pub fn breakdown_lines(rows: &[(&Candidate, ScoreBreakdown)]) -> String {
    let mut output = String::new();
    for (candidate, parts) in rows {
        output.push_str(&format!(
            "{} ({}): total {} = experience {} + skills {} + education {} + employer {}\n",
            candidate.name,
            candidate.id,
            parts.total,
            parts.experience,
            parts.skills,
            parts.education,
            parts.employer
        ));
    }
    output
}

pub fn diversity_table(comparison: &DiversityComparison) -> String {
    let mut output = format!(
        "Selected {} of {} candidates\n",
        comparison.selected_total, comparison.pool_total
    );
    for dimension in &comparison.dimensions {
        output.push_str(&format!("\n{}\n", dimension.dimension.title()));
        if dimension.entries.is_empty() {
            output.push_str("  (no selected candidates)\n");
        }
        for entry in &dimension.entries {
            output.push_str(&format!(
                "  {:<32} {} ({:.0}%)  pool: {:.0}%\n",
                entry.label, entry.selected_count, entry.selected_pct, entry.pool_pct
            ));
        }
    }
    output
}
