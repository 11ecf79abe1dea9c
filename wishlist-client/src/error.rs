//! Client error types

use http::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the service
    #[error("service error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// 2xx response with a body that does not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The single-line text shown to the user for this failure.
    ///
    /// An application error surfaces the service's `message` body verbatim;
    /// transport and decode failures fall back to their display text.
    pub fn flash_text(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
