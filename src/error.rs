use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("input path does not exist: {0}")]
    InputNotFound(String),

    #[error("no candidates found in {0}")]
    EmptyInput(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid assignment '{0}': expected ID=VALUE")]
    InvalidAssignment(String),

    #[error("invalid score override '{0}': value must be an integer")]
    InvalidScore(String),

    #[error("no candidates selected; select at least one candidate before generating a report")]
    EmptyTeam,

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
