use crate::board::selection::SelectionOutcome;
use crate::board::CandidatePool;
use crate::cli::ReviewArgs;
use crate::error::{BoardError, Result};

/// Splits `ID=VALUE` on the first `=`. The id must be non-empty after trimming;
/// the value may be empty.
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => {
            Ok((id.trim().to_string(), value.to_string()))
        }
        _ => Err(BoardError::InvalidAssignment(raw.to_string())),
    }
}

/// Applies overrides, notes, then selection toggles. Returns user-facing warnings
/// for rejected selections and unknown ids; malformed arguments are errors.
/// An empty note (`ID=`) clears the candidate's note.
pub fn apply(pool: &mut CandidatePool, args: &ReviewArgs) -> Result<Vec<String>> {
    let mut warnings: Vec<String> = pool
        .rejections()
        .iter()
        .map(|rejection| {
            format!(
                "candidate {} is marked selected but the team is limited to {} members",
                rejection.id, rejection.limit
            )
        })
        .collect();

    for raw in &args.overrides {
        let (id, value) = parse_assignment(raw)?;
        if value.trim().is_empty() {
            return Err(BoardError::InvalidAssignment(raw.clone()));
        }
        let score: i64 = value
            .trim()
            .parse()
            .map_err(|_| BoardError::InvalidScore(raw.clone()))?;
        if !pool.override_score(&id, score) {
            warnings.push(format!("cannot override score: no candidate with id {id}"));
        }
    }

    for raw in &args.notes {
        let (id, note) = parse_assignment(raw)?;
        if !pool.set_note(&id, note) {
            warnings.push(format!("cannot add note: no candidate with id {id}"));
        }
    }

    for id in &args.select {
        match pool.toggle(id) {
            SelectionOutcome::Rejected { limit } => warnings.push(format!(
                "you can only select up to {limit} candidates for your team; {id} was not selected"
            )),
            SelectionOutcome::NotFound => {
                warnings.push(format!("cannot select: no candidate with id {id}"))
            }
            SelectionOutcome::Selected | SelectionOutcome::Deselected => {}
        }
    }

    Ok(warnings)
}
