pub mod diversity;
pub mod filter;
pub mod selection;

use crate::scoring;
use crate::types::candidate::{clamp_score, Candidate};
use crate::types::criteria::FilterCriteria;
use crate::types::metrics::{DiversityComparison, DiversityMetrics};
use selection::{SelectionOutcome, TEAM_SIZE_LIMIT};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// A rejected pre-selection recorded while ingesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestRejection {
    pub id: String,
    pub limit: usize,
}

/// The scored candidate collection. All mutation goes through `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
    rejections: Vec<IngestRejection>,
}

impl CandidatePool {
    /// Scores every candidate, then replays `selected: true` flags through the team limit.
    pub fn ingest(raw: Vec<Candidate>) -> Self {
        let mut wanted = Vec::new();
        let candidates = raw
            .into_iter()
            .map(|mut candidate| {
                candidate.score = Some(scoring::score(&candidate));
                if candidate.selected {
                    wanted.push(candidate.id.clone());
                    candidate.selected = false;
                }
                candidate
            })
            .collect();

        let mut pool = Self {
            candidates,
            rejections: Vec::new(),
        };
        for id in wanted {
            if let SelectionOutcome::Rejected { limit } = pool.toggle(&id) {
                pool.rejections.push(IngestRejection { id, limit });
            }
        }
        debug!(
            candidates = pool.candidates.len(),
            selected = pool.selected_count(),
            "ingested candidate pool"
        );
        pool
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn rejections(&self) -> &[IngestRejection] {
        &self.rejections
    }

    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| candidate.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Candidate> {
        self.candidates
            .iter_mut()
            .find(|candidate| candidate.id == id)
    }

    pub fn toggle(&mut self, id: &str) -> SelectionOutcome {
        let outcome = selection::toggle(&mut self.candidates, id);
        match outcome {
            SelectionOutcome::Rejected { limit } => {
                warn!(candidate = id, limit, "team is full; selection rejected")
            }
            SelectionOutcome::NotFound => warn!(candidate = id, "no candidate with this id"),
            SelectionOutcome::Selected | SelectionOutcome::Deselected => {
                debug!(candidate = id, ?outcome, "selection toggled")
            }
        }
        outcome
    }

    /// Manual overrides bypass the formula and are clamped to [0, 100].
    pub fn override_score(&mut self, id: &str, value: i64) -> bool {
        match self.get_mut(id) {
            Some(candidate) => {
                let clamped = clamp_score(value);
                debug!(candidate = id, requested = value, clamped, "score override");
                candidate.score = Some(clamped);
                true
            }
            None => false,
        }
    }

    /// A blank note clears any existing note.
    pub fn set_note(&mut self, id: &str, note: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(candidate) => {
                let note = note.into();
                candidate.notes = if note.trim().is_empty() {
                    None
                } else {
                    Some(note)
                };
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Vec<&Candidate> {
        self.candidates
            .iter()
            .filter(|candidate| candidate.selected)
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        selection::selected_count(&self.candidates)
    }

    pub fn remaining_slots(&self) -> usize {
        TEAM_SIZE_LIMIT.saturating_sub(self.selected_count())
    }

    /// Selected candidates ranked by score, highest first; ties keep pool order.
    pub fn team(&self) -> Vec<&Candidate> {
        let mut team = self.selected();
        team.sort_by(|a, b| b.score_or_zero().cmp(&a.score_or_zero()));
        team
    }

    pub fn average_team_score(&self) -> f64 {
        let team = self.selected();
        if team.is_empty() {
            return 0.0;
        }
        let total: u32 = team.iter().map(|candidate| candidate.score_or_zero()).sum();
        f64::from(total) / team.len() as f64
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Candidate> {
        filter::filter_and_sort(&self.candidates, criteria)
    }

    pub fn team_metrics(&self) -> DiversityMetrics {
        diversity::aggregate(self.selected())
    }

    pub fn diversity(&self) -> DiversityComparison {
        diversity::compare(&self.selected(), &self.candidates)
    }

    pub fn available_skills(&self) -> Vec<String> {
        self.candidates
            .iter()
            .flat_map(|candidate| candidate.skills().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn available_locations(&self) -> Vec<String> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.location.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
