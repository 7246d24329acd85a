use thiserror::Error;

#[derive(Debug, Error)]
pub enum GjiraError {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error("git {op} failed: {detail}")]
    Git { op: String, detail: String },

    #[error("tracker request failed with status {0}")]
    TrackerStatus(u16),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GjiraError>;
