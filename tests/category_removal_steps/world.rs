//! Shared world state for category removal BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskflow::board::{
    adapters::memory::{InMemoryCategoryRepository, InMemoryTaskRepository},
    domain::CategoryId,
    services::{BoardService, CategoryRemoval, TaskBoardError},
    view::ViewSynchronizer,
};

/// Service type used by the BDD world.
pub type TestBoardService =
    BoardService<InMemoryTaskRepository, InMemoryCategoryRepository, DefaultClock>;

/// Scenario world for category removal behaviour tests.
pub struct CategoryRemovalWorld {
    pub service: TestBoardService,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub categories: Arc<InMemoryCategoryRepository>,
    pub named_categories: HashMap<String, CategoryId>,
    pub removed_category: Option<CategoryId>,
    pub last_removal: Option<Result<CategoryRemoval, TaskBoardError>>,
}

impl CategoryRemovalWorld {
    /// Creates a world over an empty board.
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let categories = Arc::new(InMemoryCategoryRepository::new());
        let service = BoardService::new(
            Arc::clone(&tasks),
            Arc::clone(&categories),
            ViewSynchronizer::new(Arc::new(DefaultClock)),
        );

        Self {
            service,
            tasks,
            categories,
            named_categories: HashMap::new(),
            removed_category: None,
            last_removal: None,
        }
    }

    /// Looks up a category created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if no category with that name was created.
    pub fn category_named(&self, name: &str) -> Result<CategoryId, eyre::Report> {
        self.named_categories
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("no category named {name} in scenario world"))
    }
}

impl Default for CategoryRemovalWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CategoryRemovalWorld {
    CategoryRemovalWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
