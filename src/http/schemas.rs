//! JSON and query-string shapes of the task API.
//!
//! These types are shared by the server handlers and by
//! [`crate::client::TaskApiClient`], so both sides agree on field names
//! (camelCase on the wire).

use crate::task::{
    domain::{ProjectId, Task, TaskDomainError, TaskId, TaskPage, parse_deadline},
    services::{CreateTaskRequest, ListTasksRequest, UpdateTaskRequest},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /tasks`.
///
/// Every field is optional at the parsing stage so that missing fields are
/// reported as validation errors with a readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Task title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Status in storage vocabulary; defaults to `todo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Priority; defaults to `medium`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339 deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// Owning project identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl CreateTaskBody {
    /// Converts the body into a service request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingField`] for an absent title,
    /// deadline or project, and parse errors for malformed values.
    pub fn into_request(self) -> Result<CreateTaskRequest, TaskDomainError> {
        let title = self.title.ok_or(TaskDomainError::MissingField("title"))?;
        let deadline = self
            .deadline
            .as_deref()
            .ok_or(TaskDomainError::MissingField("deadline"))
            .and_then(parse_deadline)?;
        let project_id = self
            .project_id
            .as_deref()
            .ok_or(TaskDomainError::MissingField("projectId"))?
            .parse::<ProjectId>()?;

        let mut request = CreateTaskRequest::new(title, project_id, deadline);
        if let Some(status) = self.status {
            request = request.with_status(status);
        }
        if let Some(priority) = self.priority {
            request = request.with_priority(priority);
        }
        Ok(request)
    }
}

/// Body of `PUT /tasks/{id}`. Absent fields are left unchanged; fields
/// outside this set (such as `projectId`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody {
    /// Replacement title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement status in storage vocabulary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Replacement priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Replacement deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl UpdateTaskBody {
    /// Converts the body into a service request for `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDeadline`] for a malformed deadline.
    pub fn into_request(self, task_id: TaskId) -> Result<UpdateTaskRequest, TaskDomainError> {
        let mut request = UpdateTaskRequest::new(task_id);
        if let Some(title) = self.title {
            request = request.with_title(title);
        }
        if let Some(status) = self.status {
            request = request.with_status(status);
        }
        if let Some(priority) = self.priority {
            request = request.with_priority(priority);
        }
        if let Some(deadline) = self.deadline.as_deref() {
            request = request.with_deadline(parse_deadline(deadline)?);
        }
        Ok(request)
    }
}

/// Query string of `GET /tasks/{projectId}`.
///
/// Empty values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksQuery {
    /// Exact status filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Exact priority filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Inclusive lower deadline bound; applied only with `endDate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Inclusive upper deadline bound; applied only with `startDate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListTasksQuery {
    /// Converts the query into a service request for `project_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDeadline`] for a malformed date.
    pub fn into_request(self, project_id: ProjectId) -> Result<ListTasksRequest, TaskDomainError> {
        let mut request = ListTasksRequest::new(project_id);
        if let Some(status) = non_empty(self.status) {
            request = request.with_status(status);
        }
        if let Some(priority) = non_empty(self.priority) {
            request = request.with_priority(priority);
        }
        if let Some(start) = non_empty(self.start_date) {
            request = request.with_start_date(parse_deadline(&start)?);
        }
        if let Some(end) = non_empty(self.end_date) {
            request = request.with_end_date(parse_deadline(&end)?);
        }
        if let Some(page) = self.page {
            request = request.with_page(page);
        }
        if let Some(limit) = self.limit {
            request = request.with_limit(limit);
        }
        Ok(request)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|inner| !inner.trim().is_empty())
}

/// Task representation returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Status in storage vocabulary.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Deadline.
    pub deadline: DateTime<Utc>,
    /// Owning project.
    pub project_id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            status: task.status().as_str().to_owned(),
            priority: task.priority().as_str().to_owned(),
            deadline: task.deadline(),
            project_id: task.project_id().into_inner(),
            created_at: task.created_at(),
        }
    }
}

/// Body of `GET /tasks/{projectId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListResponse {
    /// Tasks on the requested page.
    pub tasks: Vec<TaskResponse>,
    /// Matching tasks across all pages.
    pub total: u64,
    /// 1-based page number.
    pub page: u32,
    /// Number of pages.
    pub pages: u64,
}

impl From<&TaskPage> for TaskListResponse {
    fn from(page: &TaskPage) -> Self {
        Self {
            tasks: page.tasks().iter().map(TaskResponse::from).collect(),
            total: page.total(),
            page: page.page(),
            pages: page.pages(),
        }
    }
}

/// Confirmation or error message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
