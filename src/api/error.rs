//! Error types for catalog fetches.

use thiserror::Error;

use crate::config::ConfigError;

/// Shown when a transport failure carries no usable message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Errors that can occur while fetching a page of products.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Request failed to complete or the upstream rejected it.
    #[error("{message}")]
    Network { message: String },

    /// Upstream answered, but the body is not a product page.
    #[error("Invalid response: {reason}")]
    InvalidResponse { reason: String },
}

impl FetchError {
    /// Build a network error, substituting the fallback for an empty message.
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        };
        FetchError::Network { message }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        FetchError::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// Non-2xx upstream status.
    pub fn status(code: u16) -> Self {
        Self::network(format!("Request failed with status code {code}"))
    }

    /// Short kind tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network_error",
            FetchError::InvalidResponse { .. } => "invalid_response",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::status(status.as_u16());
        }
        FetchError::network(err.to_string())
    }
}

/// Errors that can occur while constructing a [`ProductApi`](super::ProductApi).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
