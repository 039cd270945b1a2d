//! Invariants that must hold across a sequence of board mutations.

use crate::in_memory::helpers::{BoardFixture, fixture, runtime, settle, stored_tasks};
use rstest::rstest;
use std::collections::BTreeMap;
use std::io;
use taskflow::board::{
    domain::{CategoryId, Task},
    ports::CategoryRepository,
    services::{
        CategoryRemoval, CreateCategoryRequest, CreateTaskRequest, DeleteConfirmation,
        EditTaskRequest,
    },
};
use tokio::runtime::Runtime;

fn live_counts(tasks: &[Task]) -> BTreeMap<CategoryId, usize> {
    let mut counts = BTreeMap::new();
    for category_id in tasks
        .iter()
        .filter(|task| !task.is_archived())
        .filter_map(Task::category_id)
    {
        *counts.entry(category_id).or_insert(0) += 1;
    }
    counts
}

async fn mutate_board(fixture: &BoardFixture) -> (CategoryId, CategoryId) {
    let board = &fixture.board;
    let work = board
        .create_category(CreateCategoryRequest::new("Work"))
        .await
        .expect("work category")
        .id();
    let home = board
        .create_category(CreateCategoryRequest::new("Home"))
        .await
        .expect("home category")
        .id();

    let mut created = Vec::new();
    for (title, category) in [
        ("Draft roadmap", work),
        ("Review budget", work),
        ("Fix sink", home),
        ("Water plants", home),
    ] {
        let task = settle(
            board
                .add_task(CreateTaskRequest::new(title).with_category(category))
                .await
                .expect("create"),
        )
        .await;
        created.push(task.id());
    }

    let [roadmap, budget, sink, plants] = created[..] else {
        panic!("expected four tasks");
    };
    settle(
        board
            .edit_task(roadmap, EditTaskRequest::new().with_category(home))
            .await
            .expect("move"),
    )
    .await;
    settle(
        board
            .edit_task(budget, EditTaskRequest::new().with_archived(true))
            .await
            .expect("archive"),
    )
    .await;
    board
        .toggle_task_completion(sink, true)
        .await
        .expect("complete");
    settle(board.remove_task(plants).await.expect("remove")).await;
    (work, home)
}

#[rstest]
fn view_counts_match_live_tasks_after_mutations(
    runtime: io::Result<Runtime>,
    fixture: BoardFixture,
) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(mutate_board(&fixture));

    let stored = rt.block_on(stored_tasks(&fixture)).expect("list");
    let expected = live_counts(&stored);
    let view = fixture.board.view().current();

    for entry in &view.categories {
        assert_eq!(
            entry.task_count,
            expected.get(&entry.id).copied().unwrap_or(0),
            "count for {}",
            entry.name.as_str()
        );
    }
}

#[rstest]
fn settled_refreshes_leave_cached_counts_current(
    runtime: io::Result<Runtime>,
    fixture: BoardFixture,
) {
    let rt = runtime.expect("runtime creation");
    let (work, home) = rt.block_on(mutate_board(&fixture));

    let categories = rt
        .block_on(fixture.categories.list())
        .expect("list categories");
    let cached: BTreeMap<CategoryId, usize> = categories
        .iter()
        .map(|category| (category.id(), category.cached_task_count()))
        .collect();

    assert_eq!(cached.get(&work), Some(&0));
    assert_eq!(cached.get(&home), Some(&2));
}

#[rstest]
fn completion_timestamp_tracks_completed_flag(
    runtime: io::Result<Runtime>,
    fixture: BoardFixture,
) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(mutate_board(&fixture));

    let stored = rt.block_on(stored_tasks(&fixture)).expect("list");

    assert!(!stored.is_empty());
    for task in &stored {
        assert_eq!(task.is_completed(), task.completed_at().is_some());
    }
}

#[rstest]
fn removing_category_never_removes_tasks(runtime: io::Result<Runtime>, fixture: BoardFixture) {
    let rt = runtime.expect("runtime creation");
    let (_, home) = rt.block_on(mutate_board(&fixture));
    let before = rt.block_on(stored_tasks(&fixture)).expect("list");

    let removal = rt
        .block_on(
            fixture
                .board
                .remove_category(home, DeleteConfirmation::Confirmed),
        )
        .expect("remove category");

    let after = rt.block_on(stored_tasks(&fixture)).expect("list");
    assert_eq!(after.len(), before.len());
    assert!(after.iter().all(|task| task.category_id() != Some(home)));
    assert!(matches!(removal, CategoryRemoval::Removed { detached, .. } if detached.len() == 2));
    assert!(
        fixture
            .board
            .view()
            .current()
            .categories
            .iter()
            .all(|entry| entry.id != home)
    );
}
