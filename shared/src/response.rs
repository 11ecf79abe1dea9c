//! API response bodies
//!
//! The wishlist wire contract has no envelope: a 2xx response carries the
//! record (or list) itself, and any non-2xx response carries this error
//! body.

use serde::{Deserialize, Serialize};

/// Error body returned by the service on a non-2xx response
///
/// ```json
/// { "message": "Wishlist with id '7' was not found." }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    /// Create an error body with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
