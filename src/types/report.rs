use crate::types::metrics::DiversityComparison;
use crate::types::scoring::Score;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub role: Option<String>,
    pub category: String,
    pub score: Score,
    pub band: String,
    pub experience_years: Option<f64>,
    pub key_skills: Vec<String>,
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiringReport {
    pub title: String,
    pub generated: NaiveDate,
    pub total_candidates: usize,
    pub selected_count: usize,
    pub open_slots: usize,
    pub average_score: f64,
    pub members: Vec<TeamMember>,
    pub diversity: DiversityComparison,
}
