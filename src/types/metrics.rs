use serde::Serialize;
use std::collections::BTreeMap;

pub type Distribution = BTreeMap<String, usize>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiversityMetrics {
    pub gender: Distribution,
    pub experience_level: Distribution,
    pub region: Distribution,
}

impl DiversityMetrics {
    pub fn dimensions(&self) -> [(Dimension, &Distribution); 3] {
        [
            (Dimension::Gender, &self.gender),
            (Dimension::ExperienceLevel, &self.experience_level),
            (Dimension::Region, &self.region),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Gender,
    ExperienceLevel,
    Region,
}

impl Dimension {
    pub fn title(self) -> &'static str {
        match self {
            Self::Gender => "Gender Distribution",
            Self::ExperienceLevel => "Experience Levels",
            Self::Region => "Geographic Distribution",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareEntry {
    pub label: String,
    pub selected_count: usize,
    pub selected_pct: f64,
    pub pool_count: usize,
    pub pool_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionComparison {
    pub dimension: Dimension,
    pub entries: Vec<ShareEntry>,
}

/// Selected-team shares next to whole-pool shares, per dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiversityComparison {
    pub selected_total: usize,
    pub pool_total: usize,
    pub dimensions: Vec<DimensionComparison>,
}
