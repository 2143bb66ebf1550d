//! When steps for board move BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#""{title}" is dropped on the "{column}" column"#)]
fn drop_on_column(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let result = run_async(world.projector()?.move_task(task_id, &column));
    world.last_error = result.err();
    Ok(())
}

#[when(r#""{title}" is removed from the board"#)]
fn remove_from_board(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let result = run_async(world.projector()?.remove_task(task_id));
    world.last_error = result.err();
    Ok(())
}
