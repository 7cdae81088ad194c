//! Errors produced by [`crate::api::AdminApi`].

use thiserror::Error;

use super::ErrorCategory;
use crate::traits::HttpError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: HttpError,
    },

    /// The backend answered with a non-2xx status.
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// The body was not the JSON shape the endpoint promises.
    #[error("unexpected payload from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Transport {
                source: HttpError::InvalidUrl(_),
                ..
            } => ErrorCategory::Client,
            ApiError::Transport { .. } => ErrorCategory::Network,
            ApiError::Status { status, .. } => ErrorCategory::from_status(*status),
            ApiError::Decode { .. } => ErrorCategory::Decode,
        }
    }

    /// Path of the endpoint that failed, without the base URL.
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}
