use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_SKILL_WEIGHT: u32 = 3;

const SKILL_WEIGHTS: [(&str, u32); 41] = [
    // technical
    ("React", 8),
    ("Node.js", 7),
    ("Python", 8),
    ("TypeScript", 7),
    ("AWS", 9),
    ("Machine Learning", 10),
    ("System Design", 9),
    ("DevOps", 8),
    ("Go", 7),
    ("Kubernetes", 8),
    ("Docker", 6),
    ("PostgreSQL", 6),
    ("Django", 6),
    // leadership
    ("Leadership", 10),
    ("Team Leadership", 9),
    ("Team Scaling", 10),
    ("Architecture", 9),
    // product and business
    ("Product Strategy", 9),
    ("User Research", 7),
    ("Analytics", 7),
    ("Sales Strategy", 8),
    ("Growth Marketing", 8),
    ("B2B Sales", 7),
    // design
    ("UI/UX Design", 8),
    ("Figma", 6),
    ("Design Systems", 7),
    ("Prototyping", 6),
    // data
    ("Statistics", 8),
    ("Deep Learning", 9),
    ("R", 6),
    // other
    ("Negotiation", 6),
    ("SEO", 5),
    ("Content Strategy", 5),
    ("Security", 8),
    ("Monitoring", 6),
    ("CI/CD", 7),
    ("Terraform", 7),
    ("CRM", 5),
    ("A/B Testing", 6),
    ("SQL", 6),
    ("Paid Ads", 5),
];

fn table() -> &'static HashMap<&'static str, u32> {
    static TABLE: OnceLock<HashMap<&'static str, u32>> = OnceLock::new();
    TABLE.get_or_init(|| SKILL_WEIGHTS.into_iter().collect())
}

/// Exact-name lookup; skills missing from the table weigh [`DEFAULT_SKILL_WEIGHT`].
pub fn skill_weight(skill: &str) -> u32 {
    table().get(skill).copied().unwrap_or(DEFAULT_SKILL_WEIGHT)
}

pub fn is_known_skill(skill: &str) -> bool {
    table().contains_key(skill)
}
