//! Unit tests for the task API client.

use super::{ClientError, Session, TaskApiClient, api::decode_task};
use crate::{
    http::schemas::TaskResponse,
    task::domain::{TaskDomainError, TaskId, TaskPriority, TaskStatus},
};
use chrono::{TimeZone, Utc};
use reqwest::StatusCode;
use rstest::{fixture, rstest};
use std::{
    io::{Read, Write},
    net::TcpListener,
    thread,
};
use uuid::Uuid;

/// Serves one connection with `response` and closes it.
fn serve_once(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut request: Vec<u8> = Vec::new();
        let mut chunk = [0_u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = stream.read(&mut chunk).expect("read request");
            if read == 0 {
                break;
            }
            request.extend(chunk.iter().take(read));
        }
        stream
            .write_all(response.as_bytes())
            .expect("write response");
    });
    format!("http://{addr}")
}

#[fixture]
fn wire_task() -> TaskResponse {
    let deadline = Utc
        .with_ymd_and_hms(2026, 11, 2, 0, 0, 0)
        .single()
        .expect("valid timestamp");
    TaskResponse {
        id: Uuid::new_v4(),
        title: "Draft release notes".to_owned(),
        status: "todo".to_owned(),
        priority: "high".to_owned(),
        deadline,
        project_id: Uuid::new_v4(),
        created_at: deadline,
    }
}

#[rstest]
#[case("http://localhost:5000", "tasks", "http://localhost:5000/tasks")]
#[case("http://localhost:5000/", "/tasks", "http://localhost:5000/tasks")]
#[case("http://host/api/", "tasks/abc", "http://host/api/tasks/abc")]
fn session_joins_endpoints(#[case] base: &str, #[case] path: &str, #[case] expected: &str) {
    let session = Session::new(base, "secret");
    assert_eq!(session.endpoint(path), expected);
    assert_eq!(session.token(), "secret");
}

#[rstest]
#[case("in-progress", TaskStatus::InProgress)]
#[case("inprogress", TaskStatus::InProgress)]
#[case("In Progress", TaskStatus::InProgress)]
#[case("DONE", TaskStatus::Done)]
#[case("archived", TaskStatus::Todo)]
fn decode_normalises_status_spellings(
    mut wire_task: TaskResponse,
    #[case] raw: &str,
    #[case] expected: TaskStatus,
) {
    wire_task.status = raw.to_owned();
    let task = decode_task(wire_task).expect("task should decode");
    assert_eq!(task.status(), expected);
}

#[rstest]
fn decode_keeps_wire_fields(wire_task: TaskResponse) {
    let task = decode_task(wire_task.clone()).expect("task should decode");
    assert_eq!(task.id().into_inner(), wire_task.id);
    assert_eq!(task.title().as_str(), wire_task.title);
    assert_eq!(task.priority(), TaskPriority::High);
    assert_eq!(task.project_id().into_inner(), wire_task.project_id);
    assert_eq!(task.deadline(), wire_task.deadline);
}

#[rstest]
fn decode_rejects_unknown_priority(mut wire_task: TaskResponse) {
    wire_task.priority = "urgent".to_owned();
    let result = decode_task(wire_task);
    assert!(matches!(
        result,
        Err(ClientError::InvalidTask(TaskDomainError::InvalidPriority(_)))
    ));
}

#[rstest]
fn status_errors_report_not_found() {
    let err = ClientError::Status {
        status: StatusCode::NOT_FOUND,
        message: "Task not found".to_owned(),
    };
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "server returned 404 Not Found: Task not found");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn error_body_message_is_surfaced() {
    let base = serve_once(concat!(
        "HTTP/1.1 404 Not Found\r\n",
        "Content-Type: application/json\r\n",
        "Content-Length: 28\r\n",
        "Connection: close\r\n\r\n",
        "{\"message\":\"Task not found\"}",
    ));
    let session = Session::new(base, "secret");

    let err = TaskApiClient::new()
        .delete_task(&session, TaskId::new())
        .await
        .expect_err("404 should fail");

    assert!(err.is_not_found());
    assert!(matches!(err, ClientError::Status { ref message, .. } if message == "Task not found"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn truncated_error_body_is_a_transport_error() {
    let base = serve_once(concat!(
        "HTTP/1.1 500 Internal Server Error\r\n",
        "Content-Type: application/json\r\n",
        "Content-Length: 200\r\n",
        "Connection: close\r\n\r\n",
        "{\"mess",
    ));
    let session = Session::new(base, "secret");

    let err = TaskApiClient::new()
        .delete_task(&session, TaskId::new())
        .await
        .expect_err("truncated body should fail");

    assert!(matches!(err, ClientError::Http(_)), "unexpected error: {err:?}");
}
