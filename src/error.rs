use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the client, query and mutation layers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, timeout or body-decoding failure from the HTTP layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status with the backend's `detail` message (or the
    /// reason phrase when the body carried none).
    #[error("API error {status}: {detail}")]
    Status { status: StatusCode, detail: String },

    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

impl ApiError {
    /// Human-readable failure reason, preferring the backend's own message.
    /// This is the text mutations put into their error notifications.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Status { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            ApiError::InvalidBaseUrl { .. } => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
