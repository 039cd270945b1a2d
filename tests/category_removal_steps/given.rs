//! Given steps for category removal BDD scenarios.

use super::world::{CategoryRemovalWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskflow::board::services::{CreateCategoryRequest, CreateTaskRequest};

#[given(r#"a category named "{name}""#)]
fn category_named(world: &mut CategoryRemovalWorld, name: String) -> Result<(), eyre::Report> {
    let category = run_async(
        world
            .service
            .create_category(CreateCategoryRequest::new(name.clone())),
    )
    .wrap_err("create category for removal scenario")?;
    world.named_categories.insert(name, category.id());
    Ok(())
}

#[given(r#"a task "{title}" in category "{category}""#)]
fn task_in_category(
    world: &mut CategoryRemovalWorld,
    title: String,
    category: String,
) -> Result<(), eyre::Report> {
    let category_id = world.category_named(&category)?;
    let mutation = run_async(
        world
            .service
            .add_task(CreateTaskRequest::new(title).with_category(category_id)),
    )
    .wrap_err("create task for removal scenario")?;
    for refresh in mutation.into_parts().1 {
        run_async(refresh.outcome());
    }
    Ok(())
}
