//! When steps for category removal BDD scenarios.

use super::world::{CategoryRemovalWorld, run_async};
use rstest_bdd_macros::when;
use taskflow::board::{domain::CategoryId, services::DeleteConfirmation};

fn remove(world: &mut CategoryRemovalWorld, id: CategoryId, confirmation: DeleteConfirmation) {
    let result = run_async(world.service.remove_category(id, confirmation));
    world.removed_category = Some(id);
    world.last_removal = Some(result);
}

#[when(r#"the category "{name}" is removed with confirmation"#)]
fn remove_confirmed(world: &mut CategoryRemovalWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.category_named(&name)?;
    remove(world, id, DeleteConfirmation::Confirmed);
    Ok(())
}

#[when(r#"the category "{name}" is removed without confirmation"#)]
fn remove_declined(world: &mut CategoryRemovalWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.category_named(&name)?;
    remove(world, id, DeleteConfirmation::Declined);
    Ok(())
}

#[when("an unknown category is removed with confirmation")]
fn remove_unknown(world: &mut CategoryRemovalWorld) {
    remove(world, CategoryId::new(404), DeleteConfirmation::Confirmed);
}
