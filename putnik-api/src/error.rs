//! Errors crossing the remote boundary.

use thiserror::Error;

/// Errors from the guide API and assistant clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the bearer token (401 or 403).
    ///
    /// Callers treat this as a signal to drop the local session; every
    /// other failure is retryable.
    #[error("unauthorized")]
    Unauthorized,
    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: u16,
    },
    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Network {
        /// Requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The response body did not match the documented shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// Login completed but the server did not hand back a token.
    #[error("login rejected: {0}")]
    LoginRejected(String),
}

impl ApiError {
    /// Whether this error should tear down the local session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
