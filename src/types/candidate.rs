use serde::{Deserialize, Serialize};

pub const MIN_SCORE: u32 = 0;
pub const MAX_SCORE: u32 = 100;

/// One applicant under review.
///
/// Everything except `id`, `name` and `email` may be absent in the source data;
/// the engine treats missing values as zero, empty or "Unknown" rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_expectation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_interested: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Candidate {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            location: None,
            experience_years: None,
            current_role: None,
            skills: None,
            education: None,
            linkedin: None,
            portfolio: None,
            availability: None,
            salary_expectation: None,
            why_interested: None,
            previous_experience: None,
            gender: None,
            age: None,
            score: None,
            selected: false,
            notes: None,
        }
    }

    pub fn years(&self) -> f64 {
        self.experience_years.unwrap_or(0.0)
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or(&[])
    }

    pub fn role(&self) -> &str {
        self.current_role.as_deref().unwrap_or_default()
    }

    pub fn score_or_zero(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills().iter().any(|owned| owned == skill)
    }

    /// Name, role, location and skills joined by single spaces, lowercased.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![
            self.name.as_str(),
            self.role(),
            self.location.as_deref().unwrap_or_default(),
        ];
        parts.extend(self.skills().iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

/// Clamps a manual score override into the valid band.
pub fn clamp_score(value: i64) -> u32 {
    value.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_defaults_optional_fields() {
        let candidate: Candidate = serde_json::from_str(
            r#"{ "id": "c1", "name": "Ada Lovelace", "email": "ada@example.com" }"#,
        )
        .expect("minimal candidate should parse");

        assert_eq!(candidate.years(), 0.0);
        assert!(candidate.skills().is_empty());
        assert!(!candidate.selected);
        assert_eq!(candidate.score_or_zero(), 0);
    }

    #[test]
    fn fractional_age_does_not_reject_the_record() {
        let candidate: Candidate = serde_json::from_str(
            r#"{ "id": "c1", "name": "Ada Lovelace", "email": "ada@example.com", "age": 29.5 }"#,
        )
        .expect("fractional age should parse");

        assert_eq!(candidate.age, Some(29.5));
    }

    #[test]
    fn searchable_text_skips_missing_fields() {
        let mut candidate = Candidate::new("c1", "Grace Hopper", "grace@example.com");
        candidate.skills = Some(vec!["COBOL".to_string(), "Leadership".to_string()]);

        assert_eq!(candidate.searchable_text(), "grace hopper   cobol leadership");
    }

    #[test]
    fn clamp_score_bounds_overrides() {
        assert_eq!(clamp_score(-12), 0);
        assert_eq!(clamp_score(57), 57);
        assert_eq!(clamp_score(250), 100);
    }
}
