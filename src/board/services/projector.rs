//! Board projection over one project's tasks.

use crate::{
    board::{
        domain::{Board, BoardColumn},
        ports::{BoardGateway, BoardGatewayError},
    },
    task::{
        domain::{ProjectId, Task, TaskId, TaskPriority},
        services::CreateTaskRequest,
    },
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by [`BoardProjector`].
#[derive(Debug, Clone, Error)]
pub enum BoardProjectorError {
    /// The task is not on the board.
    #[error("task {0} is not on the board")]
    UnknownTask(TaskId),

    /// The gateway call failed; the board is unchanged.
    #[error(transparent)]
    Gateway(#[from] BoardGatewayError),
}

/// Result type for board projector operations.
pub type BoardProjectorResult<T> = Result<T, BoardProjectorError>;

/// Keeps a three-column board in step with the task store.
///
/// Every mutation is persisted through the gateway first and applied to the
/// local board only once the gateway reports success, so a failed call never
/// leaves the board diverged from storage.
pub struct BoardProjector<G>
where
    G: BoardGateway + ?Sized,
{
    gateway: Arc<G>,
    project_id: ProjectId,
    board: Board,
}

impl<G> BoardProjector<G>
where
    G: BoardGateway + ?Sized,
{
    /// Creates an empty projector for `project_id`. Call [`Self::load`] to
    /// populate it.
    #[must_use]
    pub fn new(gateway: Arc<G>, project_id: ProjectId) -> Self {
        Self {
            gateway,
            project_id,
            board: Board::new(),
        }
    }

    /// Returns the projected project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Fetches every task of the project and regroups the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardProjectorError::Gateway`] when the fetch fails; the
    /// previous board is kept.
    pub async fn load(&mut self) -> BoardProjectorResult<&Board> {
        let tasks = self.gateway.fetch_project_tasks(self.project_id).await?;
        self.board = Board::group(tasks);
        debug!(
            project_id = %self.project_id,
            tasks = self.board.len(),
            "board loaded"
        );
        Ok(&self.board)
    }

    /// Moves a task to the column named by `target`.
    ///
    /// `target` may use any status spelling accepted by
    /// [`BoardColumn::normalize`]. Dropping a task onto its current column
    /// still persists the status and moves it to the end of that column.
    /// Returns the column the task now occupies.
    ///
    /// # Errors
    ///
    /// Returns [`BoardProjectorError::UnknownTask`] when the task is not on
    /// the board, and [`BoardProjectorError::Gateway`] when persisting the
    /// status fails; the board is unchanged in both cases.
    pub async fn move_task(
        &mut self,
        task_id: TaskId,
        target: &str,
    ) -> BoardProjectorResult<BoardColumn> {
        let column = BoardColumn::normalize(target);
        if self.board.locate(task_id).is_none() {
            return Err(BoardProjectorError::UnknownTask(task_id));
        }
        if let Err(err) = self
            .gateway
            .update_status(task_id, column.to_status())
            .await
        {
            warn!(task_id = %task_id, column = %column, error = %err, "task move failed");
            return Err(err.into());
        }
        self.board.relocate(task_id, column);
        info!(task_id = %task_id, column = %column, "task moved");
        Ok(column)
    }

    /// Deletes a task from storage and then from the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardProjectorError::UnknownTask`] when the task is not on
    /// the board, and [`BoardProjectorError::Gateway`] when the delete
    /// fails; the board is unchanged in both cases.
    pub async fn remove_task(&mut self, task_id: TaskId) -> BoardProjectorResult<Task> {
        if self.board.locate(task_id).is_none() {
            return Err(BoardProjectorError::UnknownTask(task_id));
        }
        if let Err(err) = self.gateway.delete_task(task_id).await {
            warn!(task_id = %task_id, error = %err, "task removal failed");
            return Err(err.into());
        }
        let removed = self
            .board
            .remove(task_id)
            .ok_or(BoardProjectorError::UnknownTask(task_id))?;
        info!(task_id = %task_id, "task removed from board");
        Ok(removed)
    }

    /// Creates a task in the project and appends it to the column of its
    /// stored status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardProjectorError::Gateway`] when the store rejects or
    /// fails the creation; the board is unchanged.
    pub async fn add_task(
        &mut self,
        title: impl Into<String>,
        deadline: DateTime<Utc>,
        priority: TaskPriority,
    ) -> BoardProjectorResult<Task> {
        let request = CreateTaskRequest::new(title, self.project_id, deadline)
            .with_priority(priority.as_str());
        let task = self.gateway.create_task(request).await?;
        self.board.insert(task.clone());
        info!(task_id = %task.id(), project_id = %self.project_id, "task added to board");
        Ok(task)
    }
}
