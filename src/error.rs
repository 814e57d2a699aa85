pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend returned {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Message shown on a degraded card: the backend `detail` when the request
    /// was rejected, otherwise the full error text.
    pub fn detail(&self) -> String {
        match self {
            Error::Http { detail, .. } => detail.clone(),
            Error::NotFound(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}
