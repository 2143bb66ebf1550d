//! Task store behaviour against `PostgresTaskRepository`.

use crate::postgres::helpers::{
    BoxError, PostgresCluster, november, postgres_cluster, prepared_store, seed_numbered,
};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::task::{
    domain::{NewTask, ProjectId, Task, TaskId, TaskPriority, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, ListTasksRequest, TaskLifecycleError, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_page_holds_the_remainder_in_insertion_order(
    postgres_cluster: PostgresCluster,
) -> Result<(), BoxError> {
    let Some(store) = prepared_store(postgres_cluster).await? else {
        return Ok(());
    };
    let project_id = ProjectId::new();
    seed_numbered(&store.service, project_id, 15).await?;

    let page = store
        .service
        .list_by_project(ListTasksRequest::new(project_id).with_page(2).with_limit(10))
        .await?;

    let titles: Vec<&str> = page
        .tasks()
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    assert_eq!(titles, ["Task 11", "Task 12", "Task 13", "Task 14", "Task 15"]);
    assert_eq!(page.total(), 15);
    assert_eq!(page.pages(), 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_is_scoped_to_the_project(
    postgres_cluster: PostgresCluster,
) -> Result<(), BoxError> {
    let Some(store) = prepared_store(postgres_cluster).await? else {
        return Ok(());
    };
    let project_id = ProjectId::new();
    seed_numbered(&store.service, project_id, 2).await?;
    seed_numbered(&store.service, ProjectId::new(), 3).await?;

    let page = store
        .service
        .list_by_project(ListTasksRequest::new(project_id))
        .await?;

    assert_eq!(page.total(), 2);
    assert!(page.tasks().iter().all(|task| task.project_id() == project_id));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deadline_range_includes_both_bounds(
    postgres_cluster: PostgresCluster,
) -> Result<(), BoxError> {
    let Some(store) = prepared_store(postgres_cluster).await? else {
        return Ok(());
    };
    let project_id = ProjectId::new();
    seed_numbered(&store.service, project_id, 5).await?;

    let page = store
        .service
        .list_by_project(
            ListTasksRequest::new(project_id)
                .with_start_date(november(2)?)
                .with_end_date(november(4)?),
        )
        .await?;

    let titles: Vec<&str> = page
        .tasks()
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    assert_eq!(titles, ["Task 2", "Task 3", "Task 4"]);
    assert_eq!(page.total(), 3);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_and_priority_filters_combine(
    postgres_cluster: PostgresCluster,
) -> Result<(), BoxError> {
    let Some(store) = prepared_store(postgres_cluster).await? else {
        return Ok(());
    };
    let project_id = ProjectId::new();
    for (title, status, priority) in [
        ("Alpha", "done", "high"),
        ("Beta", "done", "low"),
        ("Gamma", "todo", "high"),
        ("Delta", "done", "high"),
    ] {
        store
            .service
            .create(
                CreateTaskRequest::new(title, project_id, november(1)?)
                    .with_status(status)
                    .with_priority(priority),
            )
            .await?;
    }

    let page = store
        .service
        .list_by_project(
            ListTasksRequest::new(project_id)
                .with_status("done")
                .with_priority("high"),
        )
        .await?;

    let titles: Vec<&str> = page
        .tasks()
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    assert_eq!(titles, ["Alpha", "Delta"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn partial_update_changes_only_supplied_fields(
    postgres_cluster: PostgresCluster,
) -> Result<(), BoxError> {
    let Some(store) = prepared_store(postgres_cluster).await? else {
        return Ok(());
    };
    let project_id = ProjectId::new();
    let created = store
        .service
        .create(
            CreateTaskRequest::new("Write changelog", project_id, november(7)?)
                .with_priority("high"),
        )
        .await?;
    let before = store
        .service
        .find_by_id(created.id())
        .await?
        .ok_or("created task should be stored")?;

    store
        .service
        .update(UpdateTaskRequest::new(created.id()).with_status("in-progress"))
        .await?;
    let after = store
        .service
        .find_by_id(created.id())
        .await?
        .ok_or("updated task should be stored")?;

    assert_eq!(after.status(), TaskStatus::InProgress);
    assert_eq!(after.title(), before.title());
    assert_eq!(after.priority(), TaskPriority::High);
    assert_eq!(after.deadline(), before.deadline());
    assert_eq!(after.project_id(), project_id);
    assert_eq!(after.created_at(), before.created_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_status_update_leaves_row_intact(
    postgres_cluster: PostgresCluster,
) -> Result<(), BoxError> {
    let Some(store) = prepared_store(postgres_cluster).await? else {
        return Ok(());
    };
    let created = store
        .service
        .create(CreateTaskRequest::new("Stable", ProjectId::new(), november(3)?))
        .await?;

    let result = store
        .service
        .update(UpdateTaskRequest::new(created.id()).with_status("bogus"))
        .await;
    assert!(matches!(result, Err(TaskLifecycleError::Domain(_))));

    let stored = store
        .service
        .find_by_id(created.id())
        .await?
        .ok_or("task should still exist")?;
    assert_eq!(stored.status(), TaskStatus::Todo);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_task_is_not_found(
    postgres_cluster: PostgresCluster,
) -> Result<(), BoxError> {
    let Some(store) = prepared_store(postgres_cluster).await? else {
        return Ok(());
    };
    let missing = TaskId::new();

    let result = store.service.delete(missing).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(TaskRepositoryError::NotFound(id))) if id == missing
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_is_gone_and_cannot_be_updated(
    postgres_cluster: PostgresCluster,
) -> Result<(), BoxError> {
    let Some(store) = prepared_store(postgres_cluster).await? else {
        return Ok(());
    };
    let created = store
        .service
        .create(CreateTaskRequest::new("Ephemeral", ProjectId::new(), november(5)?))
        .await?;

    store.service.delete(created.id()).await?;

    assert!(store.service.find_by_id(created.id()).await?.is_none());
    let result = store
        .service
        .update(UpdateTaskRequest::new(created.id()).with_title("Back again"))
        .await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(TaskRepositoryError::NotFound(_)))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn purge_removes_only_the_target_project(
    postgres_cluster: PostgresCluster,
) -> Result<(), BoxError> {
    let Some(store) = prepared_store(postgres_cluster).await? else {
        return Ok(());
    };
    let doomed = ProjectId::new();
    let kept = ProjectId::new();
    seed_numbered(&store.service, doomed, 3).await?;
    seed_numbered(&store.service, kept, 2).await?;

    let removed = store.service.purge_project(doomed).await?;

    assert_eq!(removed, 3);
    let remaining = store
        .service
        .list_by_project(ListTasksRequest::new(doomed))
        .await?;
    assert_eq!(remaining.total(), 0);
    let untouched = store
        .service
        .list_by_project(ListTasksRequest::new(kept))
        .await?;
    assert_eq!(untouched.total(), 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storing_the_same_task_twice_is_a_duplicate(
    postgres_cluster: PostgresCluster,
) -> Result<(), BoxError> {
    let Some(store) = prepared_store(postgres_cluster).await? else {
        return Ok(());
    };
    let task = Task::new(
        NewTask {
            title: TaskTitle::new("Only once")?,
            project_id: ProjectId::new(),
            deadline: november(8)?,
            status: TaskStatus::Done,
            priority: TaskPriority::Low,
        },
        &DefaultClock,
    );

    store.repo.store(&task).await?;
    let result = store.repo.store(&task).await;

    assert!(matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn applying_the_schema_again_is_harmless(
    postgres_cluster: PostgresCluster,
) -> Result<(), BoxError> {
    let Some(store) = prepared_store(postgres_cluster).await? else {
        return Ok(());
    };
    seed_numbered(&store.service, ProjectId::new(), 1).await?;

    store.repo.apply_schema().await?;

    let project_id = ProjectId::new();
    seed_numbered(&store.service, project_id, 1).await?;
    let page = store
        .service
        .list_by_project(ListTasksRequest::new(project_id))
        .await?;
    assert_eq!(page.total(), 1);
    Ok(())
}
