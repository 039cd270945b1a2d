//! In-memory category repository with simulated latency.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::latency::{StoreLatency, pause};
use crate::board::{
    domain::{Category, CategoryId, CategoryPatch, NewCategory},
    ports::{CategoryRepository, RepositoryError, RepositoryResult},
};

/// Thread-safe in-memory category repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    state: Arc<RwLock<InMemoryCategoryState>>,
    latency: StoreLatency,
}

#[derive(Debug, Default)]
struct InMemoryCategoryState {
    categories: BTreeMap<CategoryId, Category>,
    last_assigned: u64,
}

impl InMemoryCategoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding existing records.
    #[must_use]
    pub fn seeded(categories: impl IntoIterator<Item = Category>) -> Self {
        let categories: BTreeMap<CategoryId, Category> = categories
            .into_iter()
            .map(|category| (category.id(), category))
            .collect();
        let last_assigned = categories.keys().next_back().map_or(0, |id| id.value());
        Self {
            state: Arc::new(RwLock::new(InMemoryCategoryState {
                categories,
                last_assigned,
            })),
            latency: StoreLatency::none(),
        }
    }

    /// Sets the artificial delay applied before each call.
    #[must_use]
    pub const fn with_latency(mut self, latency: StoreLatency) -> Self {
        self.latency = latency;
        self
    }

    fn read_state(&self) -> RepositoryResult<RwLockReadGuard<'_, InMemoryCategoryState>> {
        self.state.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> RepositoryResult<RwLockWriteGuard<'_, InMemoryCategoryState>> {
        self.state.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> RepositoryResult<Vec<Category>> {
        pause(self.latency.list).await;
        let state = self.read_state()?;
        Ok(state.categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> RepositoryResult<Category> {
        pause(self.latency.read).await;
        let state = self.read_state()?;
        state
            .categories
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::CategoryNotFound(id))
    }

    async fn create(&self, input: &NewCategory) -> RepositoryResult<Category> {
        pause(self.latency.create).await;
        let mut state = self.write_state()?;
        let highest_live = state
            .categories
            .keys()
            .next_back()
            .map_or(0, |id| id.value());
        let next = highest_live.max(state.last_assigned) + 1;
        state.last_assigned = next;

        let category = Category::create(CategoryId::new(next), input);
        state.categories.insert(category.id(), category.clone());
        Ok(category)
    }

    async fn update(&self, id: CategoryId, patch: &CategoryPatch) -> RepositoryResult<Category> {
        pause(self.latency.write).await;
        let mut state = self.write_state()?;
        let category = state
            .categories
            .get_mut(&id)
            .ok_or(RepositoryError::CategoryNotFound(id))?;
        category.apply_patch(patch);
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> RepositoryResult<Category> {
        pause(self.latency.write).await;
        let mut state = self.write_state()?;
        state
            .categories
            .remove(&id)
            .ok_or(RepositoryError::CategoryNotFound(id))
    }

    async fn update_task_count(&self, id: CategoryId, count: usize) -> RepositoryResult<()> {
        pause(self.latency.write).await;
        let mut state = self.write_state()?;
        let category = state
            .categories
            .get_mut(&id)
            .ok_or(RepositoryError::CategoryNotFound(id))?;
        category.set_cached_task_count(count);
        Ok(())
    }
}
