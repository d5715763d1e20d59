//! Roboflow client error types.

use thiserror::Error;

pub type RoboflowResult<T> = Result<T, RoboflowError>;

/// Errors from the Roboflow detection client.
#[derive(Debug, Error)]
pub enum RoboflowError {
    /// Missing or invalid client configuration.
    #[error("Roboflow configuration error: {0}")]
    Config(String),

    /// Transport-level failure: connection refused, DNS, timeout.
    #[error("Roboflow request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The inference endpoint answered with a non-success status.
    #[error("Roboflow returned HTTP {status}: {body}")]
    Status {
        /// Upstream HTTP status code
        status: u16,
        /// Response body excerpt for diagnostics
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode Roboflow response: {0}")]
    Decode(#[from] serde_json::Error),
}
