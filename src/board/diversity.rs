use crate::scoring::classify::ExperienceTier;
use crate::types::candidate::Candidate;
use crate::types::metrics::{
    DimensionComparison, DiversityComparison, DiversityMetrics, Distribution, ShareEntry,
};

pub const UNKNOWN: &str = "Unknown";

pub fn aggregate<'a, I>(candidates: I) -> DiversityMetrics
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut metrics = DiversityMetrics::default();
    for candidate in candidates {
        bump(&mut metrics.gender, gender_label(candidate));
        bump(
            &mut metrics.experience_level,
            ExperienceTier::from_years(candidate.years()).band_label(),
        );
        bump(&mut metrics.region, region_label(candidate.location.as_deref()));
    }
    metrics
}

fn bump(distribution: &mut Distribution, label: &str) {
    *distribution.entry(label.to_string()).or_insert(0) += 1;
}

fn gender_label(candidate: &Candidate) -> &str {
    match candidate.gender.as_deref() {
        Some(gender) if !gender.is_empty() => gender,
        _ => UNKNOWN,
    }
}

/// Text between the first and second comma, trimmed.
pub fn region_label(location: Option<&str>) -> &str {
    location
        .and_then(|location| location.split(',').nth(1))
        .map(str::trim)
        .filter(|region| !region.is_empty())
        .unwrap_or(UNKNOWN)
}

/// Share of `count` within a subset of `total`; an empty subset yields 0.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Labels come from the selected subset; pool figures are looked up for each.
pub fn compare(selected: &[&Candidate], pool: &[Candidate]) -> DiversityComparison {
    let selected_metrics = aggregate(selected.iter().copied());
    let pool_metrics = aggregate(pool);

    let dimensions = selected_metrics
        .dimensions()
        .into_iter()
        .zip(pool_metrics.dimensions())
        .map(|((dimension, chosen), (_, everyone))| DimensionComparison {
            dimension,
            entries: chosen
                .iter()
                .map(|(label, &count)| {
                    let pool_count = everyone.get(label).copied().unwrap_or(0);
                    ShareEntry {
                        label: label.clone(),
                        selected_count: count,
                        selected_pct: percentage(count, selected.len()),
                        pool_count,
                        pool_pct: percentage(pool_count, pool.len()),
                    }
                })
                .collect(),
        })
        .collect();

    DiversityComparison {
        selected_total: selected.len(),
        pool_total: pool.len(),
        dimensions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(
        id: &str,
        gender: Option<&str>,
        years: Option<f64>,
        location: Option<&str>,
    ) -> Candidate {
        let mut candidate =
            Candidate::new(id, format!("Person {id}"), format!("{id}@example.com"));
        candidate.gender = gender.map(str::to_string);
        candidate.experience_years = years;
        candidate.location = location.map(str::to_string);
        candidate
    }

    #[test]
    fn empty_input_yields_empty_distributions() {
        let nobody: Vec<Candidate> = Vec::new();
        let metrics = aggregate(&nobody);
        assert!(metrics.gender.is_empty());
        assert!(metrics.experience_level.is_empty());
        assert!(metrics.region.is_empty());
    }

    #[test]
    fn region_is_second_comma_segment() {
        assert_eq!(region_label(Some("San Francisco, CA")), "CA");
        assert_eq!(region_label(Some("Remote")), UNKNOWN);
        assert_eq!(region_label(Some("Portland, OR, USA")), "OR");
        assert_eq!(region_label(Some("Nowhere, ")), UNKNOWN);
        assert_eq!(region_label(None), UNKNOWN);
    }

    #[test]
    fn each_dimension_sums_to_input_size() {
        let people = vec![
            person("1", Some("Female"), Some(1.0), Some("Austin, TX")),
            person("2", Some("Male"), Some(4.0), Some("Remote")),
            person("3", None, Some(12.0), None),
            person("4", Some(""), None, Some("Seattle, WA")),
            person("5", Some("Female"), Some(10.0), Some("Dallas, TX")),
        ];
        let metrics = aggregate(&people);
        for (_, distribution) in metrics.dimensions() {
            assert_eq!(distribution.values().sum::<usize>(), people.len());
        }
        assert_eq!(metrics.gender.get("Female"), Some(&2));
        assert_eq!(metrics.gender.get(UNKNOWN), Some(&2));
        assert_eq!(metrics.experience_level.get("Junior (0-2 years)"), Some(&2));
        assert_eq!(metrics.experience_level.get("Senior (6-10 years)"), Some(&1));
        assert_eq!(
            metrics.experience_level.get("Principal/Executive (10+ years)"),
            Some(&1)
        );
        assert_eq!(metrics.region.get("TX"), Some(&2));
        assert_eq!(metrics.region.get(UNKNOWN), Some(&2));
    }

    #[test]
    fn percentage_of_empty_subset_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn compare_reports_selected_and_pool_shares() {
        let pool = vec![
            person("1", Some("Female"), Some(1.0), Some("Austin, TX")),
            person("2", Some("Male"), Some(4.0), Some("Austin, TX")),
            person("3", Some("Female"), Some(7.0), Some("Boston, MA")),
            person("4", Some("Male"), Some(9.0), Some("Remote")),
        ];
        let selected = vec![&pool[0], &pool[2]];
        let comparison = compare(&selected, &pool);

        assert_eq!(comparison.selected_total, 2);
        assert_eq!(comparison.pool_total, 4);
        let gender = &comparison.dimensions[0];
        assert_eq!(gender.entries.len(), 1);
        assert_eq!(gender.entries[0].label, "Female");
        assert_eq!(gender.entries[0].selected_pct, 100.0);
        assert_eq!(gender.entries[0].pool_pct, 50.0);

        let region = &comparison.dimensions[2];
        let tx = region
            .entries
            .iter()
            .find(|entry| entry.label == "TX")
            .expect("TX bucket present");
        assert_eq!(tx.selected_count, 1);
        assert_eq!(tx.pool_count, 2);
    }

    #[test]
    fn compare_with_empty_selection_has_no_entries() {
        let pool = vec![person("1", Some("Female"), Some(1.0), None)];
        let comparison = compare(&[], &pool);
        assert!(comparison
            .dimensions
            .iter()
            .all(|dimension| dimension.entries.is_empty()));
    }
}
