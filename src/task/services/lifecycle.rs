//! Service layer for task creation, listing, update, and deletion.

use crate::task::{
    domain::{
        DeadlineRange, NewTask, PageRequest, ProjectId, Task, TaskChanges, TaskDomainError,
        TaskFilter, TaskId, TaskListQuery, TaskPage, TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
///
/// Status and priority arrive as raw strings and are validated by
/// [`TaskLifecycleService::create`]; when omitted they default to `todo` and
/// `medium`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    project_id: ProjectId,
    deadline: DateTime<Utc>,
    status: Option<String>,
    priority: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, project_id: ProjectId, deadline: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            project_id,
            deadline,
            status: None,
            priority: None,
        }
    }

    /// Sets the initial status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the initial priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Returns the unvalidated title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project the task will belong to.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the raw status, if one was supplied.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the raw priority, if one was supplied.
    #[must_use]
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    fn validate(self) -> Result<NewTask, TaskDomainError> {
        Ok(NewTask {
            title: TaskTitle::new(self.title)?,
            project_id: self.project_id,
            deadline: self.deadline,
            status: parse_status(self.status.as_deref())?.unwrap_or_default(),
            priority: parse_priority(self.priority.as_deref())?.unwrap_or_default(),
        })
    }
}

/// Request payload for a partial task update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    title: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    deadline: Option<DateTime<Utc>>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing yet.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            title: None,
            status: None,
            priority: None,
            deadline: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Replaces the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Returns the task being updated.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    fn validate(self) -> Result<TaskChanges, TaskDomainError> {
        Ok(TaskChanges {
            title: self.title.map(TaskTitle::new).transpose()?,
            status: parse_status(self.status.as_deref())?,
            priority: parse_priority(self.priority.as_deref())?,
            deadline: self.deadline,
        })
    }
}

/// Request payload for listing a project's tasks.
///
/// The deadline window is applied only when both bounds are supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTasksRequest {
    project_id: ProjectId,
    status: Option<String>,
    priority: Option<String>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    page: Option<u32>,
    limit: Option<u32>,
}

impl ListTasksRequest {
    /// Creates an unfiltered request for the first page.
    #[must_use]
    pub const fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            status: None,
            priority: None,
            start_date: None,
            end_date: None,
            page: None,
            limit: None,
        }
    }

    /// Keeps only tasks with this status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Keeps only tasks with this priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the inclusive lower deadline bound.
    #[must_use]
    pub const fn with_start_date(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Sets the inclusive upper deadline bound.
    #[must_use]
    pub const fn with_end_date(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Selects the 1-based page.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Selects the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn validate(self, max_limit: u32) -> Result<TaskListQuery, TaskDomainError> {
        let mut filter = TaskFilter::default();
        if let Some(status) = parse_status(self.status.as_deref())? {
            filter = filter.with_status(status);
        }
        if let Some(priority) = parse_priority(self.priority.as_deref())? {
            filter = filter.with_priority(priority);
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            filter = filter.with_deadline_range(DeadlineRange::new(start, end)?);
        }

        let page = PageRequest::new(
            self.page.unwrap_or(PageRequest::DEFAULT_PAGE),
            self.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
        )?
        .capped(max_limit);

        Ok(TaskListQuery::new(self.project_id)
            .with_filter(filter)
            .with_page(page))
    }
}

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task store orchestration service.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    max_page_limit: u32,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            max_page_limit: self.max_page_limit,
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            max_page_limit: PageRequest::DEFAULT_MAX_LIMIT,
        }
    }

    /// Sets the largest page size a listing may return.
    #[must_use]
    pub const fn with_max_page_limit(mut self, max_page_limit: u32) -> Self {
        self.max_page_limit = max_page_limit;
        self
    }

    /// Returns the configured page size cap.
    #[must_use]
    pub const fn max_page_limit(&self) -> u32 {
        self.max_page_limit
    }

    /// Validates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is empty or the
    /// status or priority is outside its allowed set; nothing is persisted in
    /// that case. Returns [`TaskLifecycleError::Repository`] when storage
    /// fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let new_task = request.validate()?;
        let task = Task::new(new_task, &*self.clock);
        self.repository.store(&task).await?;
        info!(
            task_id = %task.id(),
            project_id = %task.project_id(),
            status = %task.status(),
            priority = %task.priority(),
            "task created"
        );
        Ok(task)
    }

    /// Returns one page of a project's tasks matching the request filters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for invalid filter values, a
    /// zero page or limit, or an inverted deadline window, and
    /// [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_by_project(&self, request: ListTasksRequest) -> TaskLifecycleResult<TaskPage> {
        let query = request.validate(self.max_page_limit)?;
        let page = self.repository.list(&query).await?;
        debug!(
            project_id = %query.project_id(),
            page = page.page(),
            returned = page.tasks().len(),
            total = page.total(),
            "listed project tasks"
        );
        Ok(page)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Merges the supplied fields into an existing task.
    ///
    /// The same validation rules as [`Self::create`] apply to every supplied
    /// field. Last write wins; there is no concurrency check.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist and [`TaskLifecycleError::Domain`] for invalid values.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let task_id = request.task_id();
        let changes = request.validate()?;
        let mut task = self.find_existing(task_id).await?;
        if changes.is_empty() {
            return Ok(task);
        }
        task.apply(changes);
        self.repository.update(&task).await?;
        info!(task_id = %task_id, status = %task.status(), "task updated");
        Ok(task)
    }

    /// Changes only the status of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist.
    pub async fn update_status(
        &self,
        task_id: TaskId,
        status: TaskStatus,
    ) -> TaskLifecycleResult<Task> {
        self.update(UpdateTaskRequest::new(task_id).with_status(status.as_str()))
            .await
    }

    /// Changes only the priority of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist.
    pub async fn update_priority(
        &self,
        task_id: TaskId,
        priority: TaskPriority,
    ) -> TaskLifecycleResult<Task> {
        self.update(UpdateTaskRequest::new(task_id).with_priority(priority.as_str()))
            .await
    }

    /// Permanently deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist; the store is left unchanged.
    pub async fn delete(&self, task_id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(task_id).await?;
        info!(task_id = %task_id, "task deleted");
        Ok(())
    }

    /// Deletes every task of a project, for use when the project itself is
    /// removed. Returns the number of deleted tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when storage fails.
    pub async fn purge_project(&self, project_id: ProjectId) -> TaskLifecycleResult<u64> {
        let removed = self.repository.delete_by_project(project_id).await?;
        info!(project_id = %project_id, removed, "project tasks purged");
        Ok(removed)
    }

    async fn find_existing(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(task_id).into())
    }
}

fn parse_status(raw: Option<&str>) -> Result<Option<TaskStatus>, TaskDomainError> {
    raw.map(TaskStatus::try_from)
        .transpose()
        .map_err(TaskDomainError::from)
}

fn parse_priority(raw: Option<&str>) -> Result<Option<TaskPriority>, TaskDomainError> {
    raw.map(TaskPriority::try_from)
        .transpose()
        .map_err(TaskDomainError::from)
}
