use crate::types::candidate::Candidate;
use serde::Serialize;

pub const TEAM_SIZE_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SelectionOutcome {
    Selected,
    Deselected,
    /// Selecting would exceed the team limit; nothing changed.
    Rejected { limit: usize },
    NotFound,
}

pub fn selected_count(candidates: &[Candidate]) -> usize {
    candidates
        .iter()
        .filter(|candidate| candidate.selected)
        .count()
}

pub fn toggle(candidates: &mut [Candidate], id: &str) -> SelectionOutcome {
    let already_selected = selected_count(candidates);
    let Some(candidate) = candidates.iter_mut().find(|candidate| candidate.id == id) else {
        return SelectionOutcome::NotFound;
    };

    if candidate.selected {
        candidate.selected = false;
        return SelectionOutcome::Deselected;
    }

    if already_selected >= TEAM_SIZE_LIMIT {
        return SelectionOutcome::Rejected {
            limit: TEAM_SIZE_LIMIT,
        };
    }

    candidate.selected = true;
    SelectionOutcome::Selected
}
