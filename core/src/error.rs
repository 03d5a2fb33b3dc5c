//! Error types for the Pinboard API client.
//!
//! # Design
//! Every failure travels through the same `Result` the success value uses;
//! nothing panics on a bad response. Statuses the API documents (401, 429)
//! get dedicated variants carrying a human-readable message. Any other
//! non-200 status lands in `Unhandled` with the raw status and body so
//! nothing is dropped on the floor.

use thiserror::Error;

pub(crate) const INVALID_CREDENTIALS: &str = "invalid username or password";
pub(crate) const RATE_LIMITED: &str = "rate limited, retry later";

/// Errors returned by `PinboardClient` builders/parsers and `Session` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A non-login request was attempted before a token was available. Raised
    /// locally; no request is issued.
    #[error("not authenticated: log in or supply an API token first")]
    NotAuthenticated,

    /// The server returned 401.
    #[error("HTTP {status}: {message}")]
    AuthenticationFailed { status: u16, message: String },

    /// The server returned 429. Backing off is the caller's job.
    #[error("HTTP {status}: {message}")]
    RateLimited { status: u16, message: String },

    /// The response body was not the JSON the operation expects.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The server returned a status the client has no specific handling for.
    #[error("unhandled HTTP {status}: {body}")]
    Unhandled { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ApiError {
    pub(crate) fn authentication_failed() -> Self {
        ApiError::AuthenticationFailed {
            status: 401,
            message: INVALID_CREDENTIALS.to_string(),
        }
    }

    pub(crate) fn rate_limited() -> Self {
        ApiError::RateLimited {
            status: 429,
            message: RATE_LIMITED.to_string(),
        }
    }

    /// HTTP status behind this error, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::AuthenticationFailed { status, .. }
            | ApiError::RateLimited { status, .. }
            | ApiError::Unhandled { status, .. } => Some(*status),
            ApiError::NotAuthenticated | ApiError::MalformedResponse(_) | ApiError::Transport(_) => None,
        }
    }

    /// True for errors a caller may retry after waiting.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::RateLimited { .. } | ApiError::Transport(_))
    }
}
