#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {status}")]
    HttpStatus { status: u16, body: String },

    #[error("API error: {code}")]
    Api {
        code: String,
        details: serde_json::Value,
    },

    #[error("API response carried no data payload")]
    MissingData,

    #[error("Invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Session storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not signed in (run `jobfeed login` first)")]
    Unauthorized,
}

impl AppError {
    /// True when the transport itself failed before any response arrived.
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}
