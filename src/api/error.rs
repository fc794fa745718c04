//! API Errors

use thiserror::Error;

/// Reasons a followers fetch can fail
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
