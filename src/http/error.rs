//! Error type returned by every handler.
//!
//! Validation and lookup failures expose their message to the caller.
//! Storage failures are logged in full and answered with a generic message.

use super::schemas::MessageResponse;
use crate::task::{
    domain::TaskDomainError, ports::TaskRepositoryError, services::TaskLifecycleError,
};
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// Message returned for any unexpected server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Server error";

/// Message returned when a task id does not resolve.
pub const TASK_NOT_FOUND_MESSAGE: &str = "Task not found";

/// Handler failures mapped onto HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid input (`400`).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The addressed resource does not exist (`404`).
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing or unrecognised credentials (`401`).
    #[error("unauthorised")]
    Unauthorized,

    /// Unexpected failure; detail is logged, never returned (`500`).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the response status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(message) => {
                warn!(message = %message, "request rejected");
                message
            }
            Self::NotFound(message) => message,
            Self::Unauthorized => "Not authorized".to_owned(),
            Self::Internal(detail) => {
                error!(error = %detail, "request failed");
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
        };
        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Domain(domain) => domain.into(),
            TaskLifecycleError::Repository(TaskRepositoryError::NotFound(_)) => {
                Self::NotFound(TASK_NOT_FOUND_MESSAGE.to_owned())
            }
            TaskLifecycleError::Repository(other) => Self::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
