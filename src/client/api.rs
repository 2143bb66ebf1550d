//! Typed wrapper over the task API endpoints.

use super::{ClientError, ClientResult, Session};
use crate::{
    board::domain::BoardColumn,
    http::schemas::{
        CreateTaskBody, ListTasksQuery, MessageResponse, TaskListResponse, TaskResponse,
        UpdateTaskBody,
    },
    task::domain::{
        PersistedTaskData, ProjectId, Task, TaskDomainError, TaskId, TaskPriority, TaskTitle,
    },
};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// One decoded page of a project listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListing {
    /// Tasks on this page, in storage order.
    pub tasks: Vec<Task>,
    /// Matching tasks across all pages.
    pub total: u64,
    /// 1-based page number.
    pub page: u32,
    /// Number of pages.
    pub pages: u64,
}

/// Client for the `/tasks` endpoints.
#[derive(Debug, Clone, Default)]
pub struct TaskApiClient {
    http: reqwest::Client,
}

impl TaskApiClient {
    /// Creates a client with a default connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client reusing an existing `reqwest` client.
    #[must_use]
    pub const fn with_http_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] when the server rejects the body and
    /// [`ClientError::Http`] on transport failure.
    pub async fn create_task(&self, session: &Session, body: &CreateTaskBody) -> ClientResult<Task> {
        let request = self.http.post(session.endpoint("tasks")).json(body);
        let response: TaskResponse = send(request, session).await?;
        decode_task(response)
    }

    /// Fetches one page of a project's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for invalid filters and
    /// [`ClientError::Http`] on transport failure.
    pub async fn list_tasks(
        &self,
        session: &Session,
        project_id: ProjectId,
        query: &ListTasksQuery,
    ) -> ClientResult<TaskListing> {
        let request = self
            .http
            .get(session.endpoint(&format!("tasks/{project_id}")))
            .query(query);
        let response: TaskListResponse = send(request, session).await?;
        let tasks = response
            .tasks
            .into_iter()
            .map(decode_task)
            .collect::<ClientResult<Vec<_>>>()?;
        Ok(TaskListing {
            tasks,
            total: response.total,
            page: response.page,
            pages: response.pages,
        })
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] with `404` when the task does not
    /// exist.
    pub async fn update_task(
        &self,
        session: &Session,
        task_id: TaskId,
        body: &UpdateTaskBody,
    ) -> ClientResult<Task> {
        let request = self
            .http
            .put(session.endpoint(&format!("tasks/{task_id}")))
            .json(body);
        let response: TaskResponse = send(request, session).await?;
        decode_task(response)
    }

    /// Deletes a task and returns the confirmation message.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] with `404` when the task does not
    /// exist.
    pub async fn delete_task(&self, session: &Session, task_id: TaskId) -> ClientResult<String> {
        let request = self
            .http
            .delete(session.endpoint(&format!("tasks/{task_id}")));
        let response: MessageResponse = send(request, session).await?;
        Ok(response.message)
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder, session: &Session) -> ClientResult<T> {
    let raw = request.bearer_auth(session.token()).send().await?;
    let response = check_status(raw).await?;
    Ok(response.json().await?)
}

async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    let message = serde_json::from_str::<MessageResponse>(&body)
        .map_or(body, |parsed| parsed.message);
    debug!(status = status.as_u16(), message = %message, "task API request failed");
    Err(ClientError::Status { status, message })
}

/// Converts a wire task into a domain task.
///
/// Status values are normalised through [`BoardColumn::normalize`], so
/// legacy spellings such as `inprogress` or `In Progress` are accepted.
pub(super) fn decode_task(response: TaskResponse) -> ClientResult<Task> {
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(response.id),
        title: TaskTitle::new(response.title)?,
        status: BoardColumn::normalize(&response.status).to_status(),
        priority: TaskPriority::try_from(response.priority.as_str())
            .map_err(TaskDomainError::from)?,
        deadline: response.deadline,
        project_id: ProjectId::from_uuid(response.project_id),
        created_at: response.created_at,
    }))
}
