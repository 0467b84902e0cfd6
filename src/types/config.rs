use crate::error::BoardError;
use crate::types::criteria::{
    ExperienceRange, SortKey, SortOrder, EXPERIENCE_CEILING, EXPERIENCE_FLOOR,
};
use serde::Deserialize;

pub const DEFAULT_REPORT_TITLE: &str = "100B JOBS - HIRING REPORT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardConfig {
    pub filters: Option<FiltersConfig>,
    pub report: Option<ReportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FiltersConfig {
    pub sort: Option<SortKey>,
    pub order: Option<SortOrder>,
    pub min_experience: Option<f64>,
    pub max_experience: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    Text,
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl BoardConfig {
    pub fn sort_key(&self) -> SortKey {
        self.filters
            .as_ref()
            .and_then(|filters| filters.sort)
            .unwrap_or_default()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.filters
            .as_ref()
            .and_then(|filters| filters.order)
            .unwrap_or_default()
    }

    pub fn experience_range(&self) -> ExperienceRange {
        let defaults = ExperienceRange::default();
        match &self.filters {
            Some(filters) => ExperienceRange::new(
                filters.min_experience.unwrap_or(defaults.min),
                filters.max_experience.unwrap_or(defaults.max),
            ),
            None => defaults,
        }
    }

    pub fn report_format(&self) -> Option<ReportFormatSetting> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn report_title(&self) -> String {
        self.report
            .as_ref()
            .and_then(|report| report.title.clone())
            .unwrap_or_else(|| DEFAULT_REPORT_TITLE.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if let Some(filters) = &self.filters {
            for (key, value) in [
                ("filters.min_experience", filters.min_experience),
                ("filters.max_experience", filters.max_experience),
            ] {
                if let Some(value) = value {
                    if !(EXPERIENCE_FLOOR..=EXPERIENCE_CEILING).contains(&value) {
                        return Err(BoardError::ConfigParse(format!(
                            "{key} must be between {EXPERIENCE_FLOOR} and {EXPERIENCE_CEILING} (found {value})"
                        )));
                    }
                }
            }
        }

        if let Some(title) = self.report.as_ref().and_then(|report| report.title.as_ref()) {
            if title.trim().is_empty() {
                return Err(BoardError::ConfigParse(
                    "report.title must not be blank".to_string(),
                ));
            }
        }

        if let Some(level) = self.log_level() {
            if !matches!(
                level.trim().to_ascii_lowercase().as_str(),
                "error" | "warn" | "info" | "debug" | "trace" | "off"
            ) {
                return Err(BoardError::ConfigParse(format!(
                    "unsupported logging.level: {level}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: BoardConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.sort_key(), SortKey::Score);
        assert_eq!(cfg.sort_order(), SortOrder::Desc);
        assert_eq!(cfg.experience_range(), ExperienceRange::new(0.0, 20.0));
        assert_eq!(cfg.report_title(), DEFAULT_REPORT_TITLE);
        assert!(cfg.report_format().is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[filters]
sort = "name"
order = "asc"
min_experience = 3
max_experience = 12

[report]
format = "md"
title = "Q3 Hiring"

[logging]
level = "debug"
"#;
        let cfg: BoardConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.sort_key(), SortKey::Name);
        assert_eq!(cfg.sort_order(), SortOrder::Asc);
        assert_eq!(cfg.experience_range(), ExperienceRange::new(3.0, 12.0));
        assert_eq!(cfg.report_format(), Some(ReportFormatSetting::Md));
        assert_eq!(cfg.report_title(), "Q3 Hiring");
        assert_eq!(cfg.log_level(), Some("debug"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_experience_outside_slider_bounds() {
        let toml_str = r#"
[filters]
max_experience = 25
"#;
        let cfg: BoardConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("filters.max_experience"));
    }

    #[test]
    fn validate_keeps_inverted_experience_bounds() {
        let toml_str = r#"
[filters]
min_experience = 5
max_experience = 3
"#;
        let cfg: BoardConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.experience_range(), ExperienceRange::new(5.0, 3.0));
    }

    #[test]
    fn validate_rejects_blank_title() {
        let toml_str = r#"
[report]
title = "   "
"#;
        let cfg: BoardConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let toml_str = r#"
[logging]
level = "loud"
"#;
        let cfg: BoardConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported logging.level"));
    }

    #[test]
    fn parse_rejects_unknown_sort_key() {
        let toml_str = r#"
[filters]
sort = "salary"
"#;
        assert!(toml::from_str::<BoardConfig>(toml_str).is_err());
    }
}
