use crate::types::scoring::{Score, ScoreBand};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ExperienceTier {
    Junior,
    MidLevel,
    Senior,
    PrincipalExecutive,
}

impl ExperienceTier {
    /// Bounds are inclusive on the upper edge: exactly 2 years is Junior, exactly 10 is Senior.
    pub fn from_years(years: f64) -> Self {
        if years <= 2.0 {
            Self::Junior
        } else if years <= 5.0 {
            Self::MidLevel
        } else if years <= 10.0 {
            Self::Senior
        } else {
            Self::PrincipalExecutive
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::MidLevel => "Mid-level",
            Self::Senior => "Senior",
            Self::PrincipalExecutive => "Principal/Executive",
        }
    }

    /// Label used in diversity tables.
    pub fn band_label(self) -> &'static str {
        match self {
            Self::Junior => "Junior (0-2 years)",
            Self::MidLevel => "Mid-level (3-5 years)",
            Self::Senior => "Senior (6-10 years)",
            Self::PrincipalExecutive => "Principal/Executive (10+ years)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoleCategory {
    Engineering,
    Management,
    Product,
    Design,
    Data,
    Sales,
    Marketing,
    DevOps,
    Other,
}

const ROLE_RULES: [(&[&str], RoleCategory); 8] = [
    (&["engineer", "developer"], RoleCategory::Engineering),
    (&["manager", "director", "vp"], RoleCategory::Management),
    (&["product"], RoleCategory::Product),
    (&["design"], RoleCategory::Design),
    (&["data", "scientist"], RoleCategory::Data),
    (&["sales"], RoleCategory::Sales),
    (&["marketing"], RoleCategory::Marketing),
    (&["devops"], RoleCategory::DevOps),
];

impl RoleCategory {
    /// First matching rule wins, so "Data Engineer" is Engineering.
    pub fn from_role(role: &str) -> Self {
        let lowered = role.to_lowercase();
        ROLE_RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
            .map(|(_, category)| *category)
            .unwrap_or(Self::Other)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Management => "Management",
            Self::Product => "Product",
            Self::Design => "Design",
            Self::Data => "Data",
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::DevOps => "DevOps",
            Self::Other => "Other",
        }
    }
}

pub fn score_band(score: Score) -> ScoreBand {
    match score {
        80.. => ScoreBand::Excellent,
        60..=79 => ScoreBand::Strong,
        40..=59 => ScoreBand::Fair,
        _ => ScoreBand::Weak,
    }
}
