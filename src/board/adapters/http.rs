//! Remote gateway backed by [`TaskApiClient`].

use crate::{
    board::ports::{BoardGateway, BoardGatewayError, BoardGatewayResult},
    client::{ClientError, Session, TaskApiClient},
    http::schemas::{CreateTaskBody, ListTasksQuery, UpdateTaskBody},
    task::{
        domain::{PageRequest, ProjectId, Task, TaskId, TaskStatus},
        services::CreateTaskRequest,
    },
};
use async_trait::async_trait;
use reqwest::StatusCode;

/// Board gateway that talks to a remote task API as one user.
#[derive(Debug, Clone)]
pub struct HttpBoardGateway {
    client: TaskApiClient,
    session: Session,
    page_limit: u32,
}

impl HttpBoardGateway {
    /// Creates a gateway for `session`.
    #[must_use]
    pub const fn new(client: TaskApiClient, session: Session) -> Self {
        Self {
            client,
            session,
            page_limit: PageRequest::DEFAULT_MAX_LIMIT,
        }
    }

    /// Sets the page size used when fetching a whole project.
    #[must_use]
    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit.max(1);
        self
    }
}

#[async_trait]
impl BoardGateway for HttpBoardGateway {
    async fn fetch_project_tasks(&self, project_id: ProjectId) -> BoardGatewayResult<Vec<Task>> {
        let mut tasks = Vec::new();
        let mut page_number = 1;
        loop {
            let query = ListTasksQuery {
                page: Some(page_number),
                limit: Some(self.page_limit),
                ..ListTasksQuery::default()
            };
            let listing = self
                .client
                .list_tasks(&self.session, project_id, &query)
                .await
                .map_err(|err| map_client_error(err, None))?;
            let last = u64::from(page_number) >= listing.pages || listing.tasks.is_empty();
            tasks.extend(listing.tasks);
            if last {
                return Ok(tasks);
            }
            page_number += 1;
        }
    }

    async fn create_task(&self, request: CreateTaskRequest) -> BoardGatewayResult<Task> {
        let body = CreateTaskBody {
            title: Some(request.title().to_owned()),
            status: request.status().map(str::to_owned),
            priority: request.priority().map(str::to_owned),
            deadline: Some(request.deadline().to_rfc3339()),
            project_id: Some(request.project_id().to_string()),
        };
        self.client
            .create_task(&self.session, &body)
            .await
            .map_err(|err| map_client_error(err, None))
    }

    async fn update_status(&self, task_id: TaskId, status: TaskStatus) -> BoardGatewayResult<Task> {
        let body = UpdateTaskBody {
            status: Some(status.as_str().to_owned()),
            ..UpdateTaskBody::default()
        };
        self.client
            .update_task(&self.session, task_id, &body)
            .await
            .map_err(|err| map_client_error(err, Some(task_id)))
    }

    async fn delete_task(&self, task_id: TaskId) -> BoardGatewayResult<()> {
        self.client
            .delete_task(&self.session, task_id)
            .await
            .map(drop)
            .map_err(|err| map_client_error(err, Some(task_id)))
    }
}

fn map_client_error(err: ClientError, task_id: Option<TaskId>) -> BoardGatewayError {
    if let ClientError::Status { status, message } = &err {
        if let (StatusCode::NOT_FOUND, Some(id)) = (*status, task_id) {
            return BoardGatewayError::NotFound(id);
        }
        if status.is_client_error() {
            return BoardGatewayError::Rejected(message.clone());
        }
    }
    BoardGatewayError::unavailable(err)
}
