//! In-memory integration tests for task store operations.

use super::helpers::{TestService, november, seed, service};
use eyre::WrapErr;
use rstest::rstest;
use taskboard::task::{
    domain::{ProjectId, TaskPriority, TaskStatus},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, ListTasksRequest, TaskLifecycleError, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_combines_filters_and_pagination(service: TestService) -> eyre::Result<()> {
    let project_id = ProjectId::new();
    for day in 1..=12 {
        let priority = if day % 2 == 0 { "high" } else { "low" };
        service
            .create(
                CreateTaskRequest::new(format!("Task {day}"), project_id, november(day)?)
                    .with_priority(priority),
            )
            .await
            .wrap_err("seed task")?;
    }

    let page = service
        .list_by_project(
            ListTasksRequest::new(project_id)
                .with_priority("high")
                .with_start_date(november(3)?)
                .with_end_date(november(12)?)
                .with_page(2)
                .with_limit(3),
        )
        .await?;

    let titles: Vec<&str> = page
        .tasks()
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    eyre::ensure!(titles == ["Task 10", "Task 12"], "unexpected page {titles:?}");
    eyre::ensure!(page.total() == 5, "expected 5 matches, got {}", page.total());
    eyre::ensure!(page.pages() == 2, "expected 2 pages, got {}", page.pages());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn page_past_the_end_is_empty(service: TestService) -> eyre::Result<()> {
    let project_id = ProjectId::new();
    seed(&service, project_id, &[("Only", "todo")]).await?;

    let page = service
        .list_by_project(ListTasksRequest::new(project_id).with_page(5))
        .await?;

    eyre::ensure!(page.tasks().is_empty(), "expected no tasks past the end");
    eyre::ensure!(page.total() == 1, "total should count all matches");
    eyre::ensure!(page.pages() == 1, "one page expected");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_update_round_trip(service: TestService) -> eyre::Result<()> {
    let project_id = ProjectId::new();
    let created = service
        .create(CreateTaskRequest::new("Initial", project_id, november(2)?))
        .await?;

    let updated = service
        .update(
            UpdateTaskRequest::new(created.id())
                .with_title("Renamed")
                .with_status("done")
                .with_priority("low")
                .with_deadline(november(9)?),
        )
        .await?;

    eyre::ensure!(updated.title().as_str() == "Renamed", "title not updated");
    eyre::ensure!(updated.status() == TaskStatus::Done, "status not updated");
    eyre::ensure!(updated.priority() == TaskPriority::Low, "priority not updated");
    eyre::ensure!(updated.deadline() == november(9)?, "deadline not updated");
    eyre::ensure!(updated.project_id() == project_id, "project must not change");
    eyre::ensure!(
        updated.created_at() == created.created_at(),
        "creation time must not change"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_cannot_be_updated(service: TestService) -> eyre::Result<()> {
    let created = service
        .create(CreateTaskRequest::new("Ephemeral", ProjectId::new(), november(3)?))
        .await?;
    service.delete(created.id()).await?;

    let result = service
        .update(UpdateTaskRequest::new(created.id()).with_status("done"))
        .await;

    eyre::ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Repository(TaskRepositoryError::NotFound(id))) if id == created.id()
        ),
        "expected not found, got {result:?}"
    );
    Ok(())
}
