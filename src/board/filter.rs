use crate::types::candidate::Candidate;
use crate::types::criteria::{FilterCriteria, SortKey, SortOrder};
use std::cmp::Ordering;

pub fn filter_and_sort(candidates: &[Candidate], criteria: &FilterCriteria) -> Vec<Candidate> {
    let search = criteria.search.to_lowercase();
    let mut filtered: Vec<Candidate> = candidates
        .iter()
        .filter(|candidate| matches(candidate, criteria, &search))
        .cloned()
        .collect();
    sort_candidates(&mut filtered, criteria.sort_by, criteria.sort_order);
    filtered
}

/// `search` must already be lowercased.
fn matches(candidate: &Candidate, criteria: &FilterCriteria, search: &str) -> bool {
    if !search.is_empty() && !candidate.searchable_text().contains(search) {
        return false;
    }

    if !criteria.experience.contains(candidate.years()) {
        return false;
    }

    if !criteria.skills.is_empty()
        && !criteria
            .skills
            .iter()
            .any(|skill| candidate.has_skill(skill))
    {
        return false;
    }

    if !criteria.locations.is_empty() {
        match candidate.location.as_deref() {
            Some(location) if criteria.locations.iter().any(|wanted| wanted == location) => {}
            _ => return false,
        }
    }

    true
}

/// Stable: equal keys keep their input order in either direction.
pub fn sort_candidates(candidates: &mut [Candidate], key: SortKey, order: SortOrder) {
    candidates.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Candidate, b: &Candidate, key: SortKey) -> Ordering {
    match key {
        SortKey::Score => a.score_or_zero().cmp(&b.score_or_zero()),
        SortKey::Experience => a.years().total_cmp(&b.years()),
        SortKey::Name => a.name.cmp(&b.name),
    }
}
