use serde::Serialize;

pub type Score = u32;

/// Per-component contributions; `total` is the rounded sum and is not re-clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub experience: f64,
    pub skills: u32,
    pub education: u32,
    pub employer: u32,
    pub total: Score,
}

impl ScoreBreakdown {
    pub fn new(experience: f64, skills: u32, education: u32, employer: u32) -> Self {
        let sum = experience + f64::from(skills) + f64::from(education) + f64::from(employer);
        Self {
            experience,
            skills,
            education,
            employer,
            total: sum.round().max(0.0) as Score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Excellent,
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Strong => "Strong",
            Self::Fair => "Fair",
            Self::Weak => "Weak",
        }
    }
}
