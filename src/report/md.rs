use super::format_years;
use crate::types::metrics::DiversityComparison;
use crate::types::report::HiringReport;

pub fn to_markdown(report: &HiringReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", report.title));
    output.push_str(&format!(
        "- generated: {}\n- candidates reviewed: {}\n- selected: {}/{}\n- average score: {:.1}\n\n",
        report.generated.format("%Y-%m-%d"),
        report.total_candidates,
        report.selected_count,
        report.selected_count + report.open_slots,
        report.average_score
    ));

    output.push_str("## Selected Team\n\n");
    output.push_str("| Rank | Name | Role | Category | Score | Experience | Key Skills |\n");
    output.push_str("|---|---|---|---|---|---|---|\n");
    for member in &report.members {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} ({}) | {} years | {} |\n",
            member.rank,
            member.name,
            member.role.as_deref().unwrap_or("-"),
            member.category,
            member.score,
            member.band,
            format_years(member.experience_years),
            member.key_skills.join(", ")
        ));
    }
    output.push('\n');

    if report.open_slots > 0 {
        output.push_str(&format!(
            "> You need to select {} more candidate(s) to complete your team.\n\n",
            report.open_slots
        ));
    }

    output.push_str("## Justifications\n\n");
    for member in &report.members {
        output.push_str(&format!("- **{}**: {}\n", member.name, member.justification));
    }
    output.push('\n');

    output.push_str(&diversity_section(&report.diversity));
    output
}

pub fn diversity_section(comparison: &DiversityComparison) -> String {
    let mut output = String::from("## Diversity\n\n");
    for dimension in &comparison.dimensions {
        output.push_str(&format!("### {}\n\n", dimension.dimension.title()));
        if dimension.entries.is_empty() {
            output.push_str("- none\n\n");
            continue;
        }
        output.push_str("| Group | Selected | Pool |\n|---|---|---|\n");
        for entry in &dimension.entries {
            output.push_str(&format!(
                "| {} | {} ({:.0}%) | {:.0}% |\n",
                entry.label, entry.selected_count, entry.selected_pct, entry.pool_pct
            ));
        }
        output.push('\n');
    }
    output
}
