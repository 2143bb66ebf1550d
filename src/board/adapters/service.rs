//! In-process gateway backed by [`TaskLifecycleService`].

use crate::{
    board::ports::{BoardGateway, BoardGatewayError, BoardGatewayResult},
    task::{
        domain::{ProjectId, Task, TaskId, TaskStatus},
        ports::{TaskRepository, TaskRepositoryError},
        services::{CreateTaskRequest, ListTasksRequest, TaskLifecycleError, TaskLifecycleService},
    },
};
use async_trait::async_trait;
use mockable::Clock;

/// Board gateway that drives a task lifecycle service directly.
pub struct ServiceBoardGateway<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    service: TaskLifecycleService<R, C>,
}

impl<R, C> ServiceBoardGateway<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Wraps a lifecycle service.
    #[must_use]
    pub const fn new(service: TaskLifecycleService<R, C>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<R, C> BoardGateway for ServiceBoardGateway<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    async fn fetch_project_tasks(&self, project_id: ProjectId) -> BoardGatewayResult<Vec<Task>> {
        let limit = self.service.max_page_limit().max(1);
        let mut tasks = Vec::new();
        let mut page_number = 1;
        loop {
            let page = self
                .service
                .list_by_project(
                    ListTasksRequest::new(project_id)
                        .with_page(page_number)
                        .with_limit(limit),
                )
                .await
                .map_err(map_lifecycle_error)?;
            let last = u64::from(page_number) >= page.pages();
            tasks.extend(page.into_tasks());
            if last {
                return Ok(tasks);
            }
            page_number += 1;
        }
    }

    async fn create_task(&self, request: CreateTaskRequest) -> BoardGatewayResult<Task> {
        self.service
            .create(request)
            .await
            .map_err(map_lifecycle_error)
    }

    async fn update_status(&self, task_id: TaskId, status: TaskStatus) -> BoardGatewayResult<Task> {
        self.service
            .update_status(task_id, status)
            .await
            .map_err(map_lifecycle_error)
    }

    async fn delete_task(&self, task_id: TaskId) -> BoardGatewayResult<()> {
        self.service
            .delete(task_id)
            .await
            .map_err(map_lifecycle_error)
    }
}

fn map_lifecycle_error(err: TaskLifecycleError) -> BoardGatewayError {
    match err {
        TaskLifecycleError::Domain(domain) => BoardGatewayError::Rejected(domain.to_string()),
        TaskLifecycleError::Repository(TaskRepositoryError::NotFound(task_id)) => {
            BoardGatewayError::NotFound(task_id)
        }
        TaskLifecycleError::Repository(other) => BoardGatewayError::unavailable(other),
    }
}
