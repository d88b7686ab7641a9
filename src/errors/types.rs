use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Dataset contains no launch records")]
    EmptyDataset,

    #[error("Invalid payload range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Unknown launch site: {0}")]
    UnknownSite(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Session limit reached: {0} sessions already open")]
    SessionLimit(usize),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    /// True for errors caused by a user selection rather than by the service.
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::InvalidRange { .. } | Self::UnknownSite(_))
    }

    /// Process exit code for a command that failed with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::EmptyDataset => 3,
            e if e.is_selection_error() => 4,
            _ => 1,
        }
    }
}
