//! `/tasks` handlers.

use crate::{
    http::{
        ApiError, AppState,
        schemas::{
            CreateTaskBody, ListTasksQuery, MessageResponse, TaskListResponse, TaskResponse,
            UpdateTaskBody,
        },
    },
    task::domain::{ProjectId, TaskId},
};
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;

/// Confirmation returned by a successful delete.
pub const TASK_REMOVED_MESSAGE: &str = "Task removed";

/// Registers the task routes.
///
/// `GET /tasks/{id}` reads `{id}` as a project id; `PUT` and `DELETE` read
/// it as a task id.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/tasks", post(create_task)).route(
        "/tasks/{id}",
        get(list_project_tasks).put(update_task).delete(delete_task),
    )
}

async fn create_task(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let Json(body) = body?;
    let task = state.tasks.create(body.into_request()?).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

async fn list_project_tasks(
    State(state): State<Arc<AppState>>,
    Path(raw_project_id): Path<String>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> Result<Json<TaskListResponse>, ApiError> {
    let project_id: ProjectId = raw_project_id.parse()?;
    let Query(query) = query?;
    let page = state
        .tasks
        .list_by_project(query.into_request(project_id)?)
        .await?;
    Ok(Json(TaskListResponse::from(&page)))
}

async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(raw_task_id): Path<String>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task_id: TaskId = raw_task_id.parse()?;
    let Json(body) = body?;
    let task = state.tasks.update(body.into_request(task_id)?).await?;
    Ok(Json(TaskResponse::from(&task)))
}

async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(raw_task_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let task_id: TaskId = raw_task_id.parse()?;
    state.tasks.delete(task_id).await?;
    Ok(Json(MessageResponse::new(TASK_REMOVED_MESSAGE)))
}
