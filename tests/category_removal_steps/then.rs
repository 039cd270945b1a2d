//! Then steps for category removal BDD scenarios.

use super::world::{CategoryRemovalWorld, run_async};
use rstest_bdd_macros::then;
use taskflow::board::{
    domain::CategoryId,
    ports::{CategoryRepository, TaskRepository},
    services::{CategoryRemoval, ErrorKind, TaskBoardError},
};

fn removal(world: &CategoryRemovalWorld) -> Result<&CategoryRemoval, eyre::Report> {
    match world.last_removal.as_ref() {
        Some(Ok(outcome)) => Ok(outcome),
        Some(Err(err)) => Err(eyre::eyre!("removal failed: {err}")),
        None => Err(eyre::eyre!("missing removal result")),
    }
}

fn removed_category(world: &CategoryRemovalWorld) -> Result<CategoryId, eyre::Report> {
    world
        .removed_category
        .ok_or_else(|| eyre::eyre!("missing removed category"))
}

#[then(r#"the category "{name}" no longer exists"#)]
fn category_is_gone(world: &CategoryRemovalWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.category_named(&name)?;
    let lookup = run_async(world.categories.find_by_id(id));
    if lookup.is_ok() {
        return Err(eyre::eyre!("category {name} is still stored"));
    }
    if world
        .service
        .view()
        .current()
        .categories
        .iter()
        .any(|entry| entry.id == id)
    {
        return Err(eyre::eyre!("category {name} is still published"));
    }
    Ok(())
}

#[then("{count:u64} tasks remain on the board")]
fn tasks_remain(world: &CategoryRemovalWorld, count: u64) -> Result<(), eyre::Report> {
    let stored = run_async(world.tasks.list())?;
    let found = u64::try_from(stored.len())?;
    if found != count {
        return Err(eyre::eyre!("expected {count} stored tasks, found {found}"));
    }
    Ok(())
}

#[then("no task references the removed category")]
fn no_task_references(world: &CategoryRemovalWorld) -> Result<(), eyre::Report> {
    let id = removed_category(world)?;
    let stored = run_async(world.tasks.list())?;
    if stored.iter().any(|task| task.category_id() == Some(id)) {
        return Err(eyre::eyre!("a stored task still references category {id}"));
    }
    let view = world.service.view().current();
    if view.tasks.iter().any(|task| task.category_id() == Some(id)) {
        return Err(eyre::eyre!("a published task still references category {id}"));
    }
    Ok(())
}

#[then("{count:u64} tasks were detached")]
fn tasks_detached(world: &CategoryRemovalWorld, count: u64) -> Result<(), eyre::Report> {
    let CategoryRemoval::Removed { detached, .. } = removal(world)? else {
        return Err(eyre::eyre!("expected the category to be removed"));
    };
    let found = u64::try_from(detached.len())?;
    if found != count {
        return Err(eyre::eyre!("expected {count} detached tasks, found {found}"));
    }
    Ok(())
}

#[then("the removal was declined")]
fn removal_declined(world: &CategoryRemovalWorld) -> Result<(), eyre::Report> {
    let outcome = removal(world)?;
    if *outcome != CategoryRemoval::Declined {
        return Err(eyre::eyre!("expected a declined removal, got {outcome:?}"));
    }
    Ok(())
}

#[then(r#"the category "{name}" still has {count:u64} task"#)]
fn category_still_has(
    world: &CategoryRemovalWorld,
    name: String,
    count: u64,
) -> Result<(), eyre::Report> {
    let id = world.category_named(&name)?;
    run_async(world.categories.find_by_id(id))?;
    let linked = run_async(world.tasks.find_by_category(id))?;
    let found = u64::try_from(linked.len())?;
    if found != count {
        return Err(eyre::eyre!("expected {count} tasks in {name}, found {found}"));
    }
    Ok(())
}

#[then("the removal fails with a not found error")]
fn removal_not_found(world: &CategoryRemovalWorld) -> Result<(), eyre::Report> {
    match world.last_removal.as_ref() {
        Some(Err(err @ TaskBoardError::Repository(_))) if err.kind() == ErrorKind::NotFound => {
            Ok(())
        }
        other => Err(eyre::eyre!("expected a not found error, got {other:?}")),
    }
}
