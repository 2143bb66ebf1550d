//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or validating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title is longer than the stored column allows.
    #[error("task title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum accepted length.
        max: usize,
        /// Length of the rejected title.
        actual: usize,
    },

    /// A required field was not supplied.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The status value is not one of `todo`, `in-progress`, `done`.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The priority value is not one of `low`, `medium`, `high`.
    #[error(transparent)]
    InvalidPriority(#[from] ParseTaskPriorityError),

    /// The deadline could not be parsed as a date or timestamp.
    #[error("invalid deadline '{0}', expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDeadline(String),

    /// The deadline range ends before it starts.
    #[error("deadline range is inverted: start is after end")]
    InvertedDeadlineRange,

    /// The task identifier is not a valid UUID.
    #[error("invalid task id: {0}")]
    InvalidTaskId(String),

    /// The project identifier is not a valid UUID.
    #[error("invalid project id: {0}")]
    InvalidProjectId(String),

    /// Page numbers start at 1.
    #[error("page must be at least 1")]
    InvalidPage,

    /// Page size must be positive.
    #[error("limit must be at least 1")]
    InvalidLimit,
}

/// Error returned while parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task status '{0}', expected one of todo, in-progress, done")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task priority '{0}', expected one of low, medium, high")]
pub struct ParseTaskPriorityError(pub String);
