//! In-memory integration tests for the board projector.

use std::sync::Arc;

use super::helpers::{TestService, november, seed, service};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::{
    board::{
        adapters::ServiceBoardGateway,
        domain::BoardColumn,
        services::{BoardProjector, BoardProjectorError},
    },
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{ProjectId, TaskPriority, TaskStatus},
        services::ListTasksRequest,
    },
};

type Projector = BoardProjector<ServiceBoardGateway<InMemoryTaskRepository, DefaultClock>>;

fn column_titles(projector: &Projector, column: BoardColumn) -> Vec<String> {
    projector
        .board()
        .column(column)
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_walks_every_page(service: TestService) -> eyre::Result<()> {
    let capped = service.with_max_page_limit(4);
    let project_id = ProjectId::new();
    let titles: Vec<String> = (1..=11).map(|n| format!("Card {n}")).collect();
    let pairs: Vec<(&str, &str)> = titles.iter().map(|title| (title.as_str(), "todo")).collect();
    seed(&capped, project_id, &pairs).await?;

    let mut projector =
        BoardProjector::new(Arc::new(ServiceBoardGateway::new(capped)), project_id);
    projector.load().await?;

    eyre::ensure!(
        column_titles(&projector, BoardColumn::Todo) == titles,
        "board should hold every task in storage order"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moves_and_removals_reach_the_store(service: TestService) -> eyre::Result<()> {
    let project_id = ProjectId::new();
    let seeded = seed(
        &service,
        project_id,
        &[("Write", "todo"), ("Review", "in-progress"), ("Ship", "done")],
    )
    .await?;
    let [write, review, ship] = seeded.as_slice() else {
        eyre::bail!("expected three seeded tasks");
    };

    let mut projector = BoardProjector::new(
        Arc::new(ServiceBoardGateway::new(service.clone())),
        project_id,
    );
    projector.load().await?;

    projector.move_task(write.id(), "done").await?;
    projector.move_task(review.id(), "todo").await?;
    projector.remove_task(ship.id()).await?;

    eyre::ensure!(
        column_titles(&projector, BoardColumn::Done) == ["Write"],
        "Write should be the only done card"
    );
    eyre::ensure!(
        column_titles(&projector, BoardColumn::Todo) == ["Review"],
        "Review should be back in todo"
    );

    let stored = service
        .list_by_project(ListTasksRequest::new(project_id))
        .await?;
    let statuses: Vec<(String, TaskStatus)> = stored
        .tasks()
        .iter()
        .map(|task| (task.title().as_str().to_owned(), task.status()))
        .collect();
    eyre::ensure!(
        statuses
            == [
                ("Write".to_owned(), TaskStatus::Done),
                ("Review".to_owned(), TaskStatus::Todo),
            ],
        "store diverged from board: {statuses:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_deleted_elsewhere_fails_move_without_local_change(
    service: TestService,
) -> eyre::Result<()> {
    let project_id = ProjectId::new();
    let seeded = seed(&service, project_id, &[("Stale", "todo")]).await?;
    let stale = seeded
        .first()
        .ok_or_else(|| eyre::eyre!("expected a seeded task"))?;

    let mut projector = BoardProjector::new(
        Arc::new(ServiceBoardGateway::new(service.clone())),
        project_id,
    );
    projector.load().await?;
    service.delete(stale.id()).await?;

    let result = projector.move_task(stale.id(), "inprogress").await;

    eyre::ensure!(
        matches!(result, Err(BoardProjectorError::Gateway(_))),
        "expected gateway failure, got {result:?}"
    );
    eyre::ensure!(
        projector.board().locate(stale.id()) == Some(BoardColumn::Todo),
        "board must keep the card where it was"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn added_tasks_land_in_todo(service: TestService) -> eyre::Result<()> {
    let project_id = ProjectId::new();
    let mut projector = BoardProjector::new(
        Arc::new(ServiceBoardGateway::new(service.clone())),
        project_id,
    );
    projector.load().await?;

    let added = projector
        .add_task("Fresh", november(20)?, TaskPriority::Low)
        .await?;

    eyre::ensure!(
        projector.board().locate(added.id()) == Some(BoardColumn::Todo),
        "new tasks start in todo"
    );
    let stored = service.find_by_id(added.id()).await?;
    eyre::ensure!(stored == Some(added), "task should be persisted");
    Ok(())
}
