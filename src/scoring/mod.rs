pub mod classify;
pub mod weights;

use crate::types::candidate::Candidate;
use crate::types::scoring::{Score, ScoreBreakdown};
use tracing::{debug, trace};

pub const EXPERIENCE_CAP: f64 = 30.0;
pub const SKILLS_CAP: u32 = 50;

const EDUCATION_BONUSES: [(&[&str], u32); 3] = [
    (&["phd"], 10),
    (&["mba", "ms", "master"], 7),
    (&["bs", "bachelor"], 5),
];

const EMPLOYER_BONUSES: [(&[&str], u32); 3] = [
    (&["google", "apple", "microsoft"], 10),
    (&["meta", "uber", "stripe"], 8),
    (&["startup", "scale"], 6),
];

pub fn score(candidate: &Candidate) -> Score {
    breakdown(candidate).total
}

pub fn breakdown(candidate: &Candidate) -> ScoreBreakdown {
    let result = ScoreBreakdown::new(
        experience_points(candidate.years()),
        skill_points(candidate.skills()),
        first_bonus(candidate.education.as_deref(), &EDUCATION_BONUSES),
        first_bonus(candidate.previous_experience.as_deref(), &EMPLOYER_BONUSES),
    );
    trace!(candidate = %candidate.id, total = result.total, "scored candidate");
    result
}

pub fn experience_points(years: f64) -> f64 {
    (years * 2.0).clamp(0.0, EXPERIENCE_CAP)
}

pub fn skill_points(skills: &[String]) -> u32 {
    skills
        .iter()
        .map(|skill| {
            if !weights::is_known_skill(skill) {
                debug!(skill = %skill, "unweighted skill, using default weight");
            }
            weights::skill_weight(skill)
        })
        .sum::<u32>()
        .min(SKILLS_CAP)
}

fn first_bonus(text: Option<&str>, rules: &[(&[&str], u32)]) -> u32 {
    let lowered = text.unwrap_or_default().to_lowercase();
    rules
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(
        years: Option<f64>,
        skills: &[&str],
        education: Option<&str>,
        previous: Option<&str>,
    ) -> Candidate {
        let mut candidate = Candidate::new("c1", "Test Person", "test@example.com");
        candidate.experience_years = years;
        candidate.skills = Some(skills.iter().map(|skill| skill.to_string()).collect());
        candidate.education = education.map(str::to_string);
        candidate.previous_experience = previous.map(str::to_string);
        candidate
    }

    #[test]
    fn principal_with_phd_and_google_scores_sixty_three() {
        let subject = candidate(
            Some(12.0),
            &["Leadership", "System Design"],
            Some("PhD"),
            Some("Senior Staff at Google"),
        );
        let parts = breakdown(&subject);
        assert_eq!(parts.experience, 24.0);
        assert_eq!(parts.skills, 19);
        assert_eq!(parts.education, 10);
        assert_eq!(parts.employer, 10);
        assert_eq!(score(&subject), 63);
    }

    #[test]
    fn empty_candidate_scores_zero() {
        let subject = Candidate::new("c0", "Nobody", "nobody@example.com");
        assert_eq!(score(&subject), 0);
    }

    #[test]
    fn every_component_at_cap_sums_to_one_hundred() {
        let subject = candidate(
            Some(20.0),
            &[
                "Leadership",
                "Machine Learning",
                "Team Scaling",
                "Leadership",
                "Machine Learning",
                "Team Scaling",
            ],
            Some("PhD in Physics"),
            Some("Google"),
        );
        assert_eq!(skill_points(subject.skills.as_deref().unwrap_or(&[])), 50);
        assert_eq!(score(&subject), 100);
    }

    #[test]
    fn experience_component_caps_at_thirty() {
        assert_eq!(experience_points(15.0), 30.0);
        assert_eq!(experience_points(40.0), 30.0);
        assert_eq!(experience_points(3.5), 7.0);
    }

    #[test]
    fn unknown_skills_weigh_three() {
        let subject = candidate(None, &["Juggling", "Origami"], None, None);
        assert_eq!(score(&subject), 6);
    }

    #[test]
    fn education_bonus_takes_first_match() {
        let phd = candidate(None, &[], Some("PhD, MS and BS"), None);
        let masters = candidate(None, &[], Some("Master of Science"), None);
        let bachelor = candidate(None, &[], Some("Bachelor of Arts"), None);
        let none = candidate(None, &[], Some("High school"), None);
        assert_eq!(score(&phd), 10);
        assert_eq!(score(&masters), 7);
        assert_eq!(score(&bachelor), 5);
        assert_eq!(score(&none), 0);
    }

    #[test]
    fn employer_bonus_takes_first_match() {
        let big = candidate(None, &[], None, Some("Apple, then a startup"));
        let mid = candidate(None, &[], None, Some("Payments at Stripe"));
        let small = candidate(None, &[], None, Some("Early startup"));
        assert_eq!(score(&big), 10);
        assert_eq!(score(&mid), 8);
        assert_eq!(score(&small), 6);
    }

    #[test]
    fn fractional_experience_rounds_half_up() {
        let subject = candidate(Some(2.25), &[], None, None);
        assert_eq!(score(&subject), 5);
    }

    #[test]
    fn score_is_deterministic() {
        let subject = candidate(
            Some(7.0),
            &["React", "TypeScript", "Figma"],
            Some("BS Computer Science"),
            Some("Uber"),
        );
        let first = score(&subject);
        assert!((0..10).all(|_| score(&subject) == first));
        assert_eq!(first, 14 + 21 + 5 + 8);
    }
}
