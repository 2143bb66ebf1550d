//! Then steps for board move BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::{board::domain::BoardColumn, task::domain::TaskStatus};

fn column_titles(world: &mut BoardWorld, column: &str) -> Result<Vec<String>, eyre::Report> {
    let column = BoardColumn::normalize(column);
    Ok(world
        .projector()?
        .board()
        .column(column)
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect())
}

#[then(r#"the "{column}" column lists "{titles}""#)]
fn column_lists(
    world: &mut BoardWorld,
    column: String,
    titles: String,
) -> Result<(), eyre::Report> {
    let expected: Vec<String> = titles.split(',').map(|title| title.trim().to_owned()).collect();
    let actual = column_titles(world, &column)?;
    eyre::ensure!(
        actual == expected,
        "column {column} holds {actual:?}, expected {expected:?}"
    );
    Ok(())
}

#[then(r#"the "{column}" column is empty"#)]
fn column_is_empty(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let actual = column_titles(world, &column)?;
    eyre::ensure!(actual.is_empty(), "column {column} holds {actual:?}");
    Ok(())
}

#[then(r#"the stored status of "{title}" is "{status}""#)]
fn stored_status(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task_id = world.task_id(&title)?;
    let stored = run_async(world.service.find_by_id(task_id))?
        .ok_or_else(|| eyre::eyre!("task {title:?} missing from store"))?;
    eyre::ensure!(
        stored.status() == expected,
        "stored status is {}, expected {}",
        stored.status(),
        expected
    );
    Ok(())
}

#[then(r#""{title}" no longer exists in the store"#)]
fn gone_from_store(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let stored = run_async(world.service.find_by_id(task_id))?;
    eyre::ensure!(stored.is_none(), "task {title:?} still stored");
    Ok(())
}

#[then("the board operation fails")]
fn operation_fails(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_error.is_some(),
        "expected the last board operation to fail"
    );
    Ok(())
}
