use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;

/// Every way a backend call can fail. The component flattens these into one
/// message string, so `Display` is what the user ends up reading.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{code}::{reason}")]
    Status { code: u16, reason: String },
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Url(#[from] ConfigError),
}

impl ApiError {
    pub fn from_status(status: StatusCode) -> Self {
        ApiError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}
