//! Client error types.

use crate::task::domain::TaskDomainError;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type for client calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by [`crate::client::TaskApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status {
        /// Response status code.
        status: StatusCode,
        /// `message` field of the error body, or the raw body.
        message: String,
    },

    /// A task in the response could not be turned into a domain value.
    #[error("invalid task in response: {0}")]
    InvalidTask(#[from] TaskDomainError),
}

impl ClientError {
    /// Returns the HTTP status for [`Self::Status`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(_) | Self::InvalidTask(_) => None,
        }
    }

    /// Returns `true` when the server reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
