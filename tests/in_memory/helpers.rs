//! Shared test helpers for in-memory board integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use taskflow::board::{
    adapters::memory::{InMemoryCategoryRepository, InMemoryTaskRepository},
    domain::Task,
    ports::TaskRepository,
    services::{BoardService, Mutation},
    view::ViewSynchronizer,
};
use tokio::runtime::Runtime;

/// Board service over the in-memory repositories.
pub type MemoryBoard = BoardService<InMemoryTaskRepository, InMemoryCategoryRepository, DefaultClock>;

/// Service plus direct handles on its repositories.
pub struct BoardFixture {
    pub board: MemoryBoard,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub categories: Arc<InMemoryCategoryRepository>,
}

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides an empty board without simulated latency.
#[fixture]
pub fn fixture() -> BoardFixture {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let categories = Arc::new(InMemoryCategoryRepository::new());
    let board = BoardService::new(
        Arc::clone(&tasks),
        Arc::clone(&categories),
        ViewSynchronizer::new(Arc::new(DefaultClock)),
    );
    BoardFixture {
        board,
        tasks,
        categories,
    }
}

/// Waits for every count refresh spawned by a mutation and returns its value.
pub async fn settle<T>(mutation: Mutation<T>) -> T {
    let (value, refreshes) = mutation.into_parts();
    for refresh in refreshes {
        refresh.outcome().await;
    }
    value
}

/// Lists every stored task.
///
/// # Errors
///
/// Returns an error if the repository call fails.
pub async fn stored_tasks(
    fixture: &BoardFixture,
) -> Result<Vec<Task>, taskflow::board::ports::RepositoryError> {
    fixture.tasks.list().await
}
