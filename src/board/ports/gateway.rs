//! Gateway port through which the board projector reaches the task store.

use crate::task::{
    domain::{ProjectId, Task, TaskId, TaskStatus},
    services::CreateTaskRequest,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board gateway operations.
pub type BoardGatewayResult<T> = Result<T, BoardGatewayError>;

/// Persistence calls issued by the board projector.
///
/// Every call must complete (successfully or not) before the projector
/// touches its local board state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardGateway: Send + Sync {
    /// Returns every task of the project in storage order.
    async fn fetch_project_tasks(&self, project_id: ProjectId) -> BoardGatewayResult<Vec<Task>>;

    /// Creates a task and returns the stored record.
    async fn create_task(&self, request: CreateTaskRequest) -> BoardGatewayResult<Task>;

    /// Persists a new status for a task and returns the updated record.
    async fn update_status(&self, task_id: TaskId, status: TaskStatus) -> BoardGatewayResult<Task>;

    /// Permanently deletes a task.
    async fn delete_task(&self, task_id: TaskId) -> BoardGatewayResult<()>;
}

/// Errors surfaced by board gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardGatewayError {
    /// The task no longer exists in the store.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The store refused the request (validation failure, bad credentials).
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The store could not be reached or failed internally.
    #[error("task store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardGatewayError {
    /// Wraps a transport or storage error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
