//! Given steps for board move BDD scenarios.

use std::sync::Arc;

use super::world::{BoardWorld, run_async};
use chrono::{TimeZone, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::{
    board::{adapters::ServiceBoardGateway, services::BoardProjector},
    task::services::CreateTaskRequest,
};

#[given(r#"a "{status}" task titled "{title}""#)]
fn task_with_status(
    world: &mut BoardWorld,
    status: String,
    title: String,
) -> Result<(), eyre::Report> {
    let deadline = Utc
        .with_ymd_and_hms(2026, 11, 30, 0, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid scenario deadline"))?;
    let request =
        CreateTaskRequest::new(title.as_str(), world.project_id, deadline).with_status(status);
    let created = run_async(world.service.create(request)).wrap_err("seed scenario task")?;
    world.task_ids.insert(title, created.id());
    Ok(())
}

#[given("the board has been loaded")]
fn board_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let gateway = Arc::new(ServiceBoardGateway::new(world.service.clone()));
    let mut projector = BoardProjector::new(gateway, world.project_id);
    run_async(projector.load()).wrap_err("load scenario board")?;
    world.projector = Some(projector);
    Ok(())
}

#[given(r#""{title}" has been deleted directly in the store"#)]
fn deleted_in_store(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    run_async(world.service.delete(task_id)).wrap_err("delete task behind the board")?;
    Ok(())
}
