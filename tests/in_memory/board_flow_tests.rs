//! Round trips through [`BoardService`] over the in-memory repositories.
//!
//! [`BoardService`]: taskflow::board::services::BoardService

use crate::in_memory::helpers::{BoardFixture, fixture, runtime, settle, stored_tasks};
use rstest::rstest;
use std::io;
use taskflow::board::{
    domain::{Priority, TaskId},
    query::FilterCriteria,
    services::{
        CreateCategoryRequest, CreateTaskRequest, EditCategoryRequest, EditTaskRequest, ErrorKind,
    },
};
use tokio::runtime::Runtime;

#[rstest]
fn created_task_is_fetchable_by_returned_id(runtime: io::Result<Runtime>, fixture: BoardFixture) {
    let rt = runtime.expect("runtime creation");

    let created = rt
        .block_on(
            fixture.board.add_task(
                CreateTaskRequest::new("Renew passport")
                    .with_priority(Priority::High)
                    .with_due_date("2030-05-01"),
            ),
        )
        .expect("create")
        .into_value();
    let fetched = rt
        .block_on(fixture.board.find_task(created.id()))
        .expect("fetch");

    assert_eq!(fetched, created);
    assert_eq!(fetched.due_date().map(|due| due.as_str()), Some("2030-05-01"));
}

#[rstest]
fn deleting_unknown_task_leaves_store_untouched(
    runtime: io::Result<Runtime>,
    fixture: BoardFixture,
) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(fixture.board.add_task(CreateTaskRequest::new("Stay")))
        .expect("create");
    let before = rt.block_on(stored_tasks(&fixture)).expect("list");

    let result = rt.block_on(fixture.board.remove_task(TaskId::new(1_000)));

    assert!(matches!(&result, Err(err) if err.kind() == ErrorKind::NotFound));
    assert_eq!(rt.block_on(stored_tasks(&fixture)).expect("list"), before);
}

#[rstest]
fn editing_unknown_task_is_not_found(runtime: io::Result<Runtime>, fixture: BoardFixture) {
    let rt = runtime.expect("runtime creation");

    let result = rt.block_on(
        fixture
            .board
            .edit_task(TaskId::new(5), EditTaskRequest::new().with_completed(true)),
    );

    assert!(matches!(&result, Err(err) if err.kind() == ErrorKind::NotFound));
}

#[rstest]
fn category_edits_are_published(runtime: io::Result<Runtime>, fixture: BoardFixture) {
    let rt = runtime.expect("runtime creation");
    let category = rt
        .block_on(
            fixture
                .board
                .create_category(CreateCategoryRequest::new("Errands").with_color("#4D96FF")),
        )
        .expect("create category");

    let edited = rt
        .block_on(fixture.board.edit_category(
            category.id(),
            EditCategoryRequest::new().with_name("Chores"),
        ))
        .expect("edit category");

    assert_eq!(edited.name().as_str(), "Chores");
    assert_eq!(edited.color().as_str(), "#4D96FF");
    let view = fixture.board.view().current();
    assert_eq!(
        view.categories.first().map(|entry| entry.name.as_str()),
        Some("Chores")
    );
}

#[rstest]
fn filters_apply_to_published_view_without_touching_store(
    runtime: io::Result<Runtime>,
    fixture: BoardFixture,
) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(async {
        let first = fixture
            .board
            .add_task(CreateTaskRequest::new("Clean garage"))
            .await
            .expect("create")
            .into_value();
        fixture
            .board
            .add_task(CreateTaskRequest::new("Call garage"))
            .await
            .expect("create");
        settle(
            fixture
                .board
                .edit_task(first.id(), EditTaskRequest::new().with_completed(true))
                .await
                .expect("complete"),
        )
        .await;
    });
    let view = fixture.board.view();

    view.set_search_query("GARAGE");
    assert_eq!(view.current().tasks.len(), 1);

    view.set_show_completed(true);
    assert_eq!(view.current().tasks.len(), 2);

    view.set_search_query("bicycle");
    assert!(view.current().tasks.is_empty());

    view.clear_filters();
    assert_eq!(view.criteria(), FilterCriteria::default());
    assert_eq!(rt.block_on(stored_tasks(&fixture)).expect("list").len(), 2);
}

#[rstest]
fn search_and_category_lookups_skip_archived(
    runtime: io::Result<Runtime>,
    fixture: BoardFixture,
) {
    use taskflow::board::ports::TaskRepository;

    let rt = runtime.expect("runtime creation");
    rt.block_on(async {
        let garden = fixture
            .board
            .create_category(CreateCategoryRequest::new("Garden"))
            .await
            .expect("category");
        let hedge = settle(
            fixture
                .board
                .add_task(CreateTaskRequest::new("Trim hedge").with_category(garden.id()))
                .await
                .expect("create"),
        )
        .await;
        settle(
            fixture
                .board
                .add_task(CreateTaskRequest::new("Trim roses").with_category(garden.id()))
                .await
                .expect("create"),
        )
        .await;
        settle(
            fixture
                .board
                .edit_task(hedge.id(), EditTaskRequest::new().with_archived(true))
                .await
                .expect("archive"),
        )
        .await;

        let by_category = fixture
            .tasks
            .find_by_category(garden.id())
            .await
            .expect("lookup");
        let by_title = fixture.tasks.search("trim").await.expect("search");

        assert_eq!(by_category.len(), 1);
        assert_eq!(by_title.len(), 1);
        assert_eq!(fixture.board.view().current().stats.total, 1);
    });
}
