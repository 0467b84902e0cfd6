use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const EXPERIENCE_FLOOR: f64 = 0.0;
pub const EXPERIENCE_CEILING: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Score,
    Experience,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Inclusive experience bounds. Not normalised: `min > max` matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRange {
    pub min: f64,
    pub max: f64,
}

impl ExperienceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, years: f64) -> bool {
        years >= self.min && years <= self.max
    }
}

impl Default for ExperienceRange {
    fn default() -> Self {
        Self::new(EXPERIENCE_FLOOR, EXPERIENCE_CEILING)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub experience: ExperienceRange,
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}
