//! In-memory task repository with simulated latency.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::latency::{StoreLatency, pause};
use crate::board::{
    domain::{CategoryId, NewTask, Task, TaskId, TaskPatch},
    ports::{RepositoryError, RepositoryResult, TaskRepository},
};

/// Thread-safe in-memory task repository.
pub struct InMemoryTaskRepository<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
    latency: StoreLatency,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_assigned: u64,
}

impl InMemoryTaskState {
    fn next_id(&mut self) -> TaskId {
        let highest_live = self
            .tasks
            .keys()
            .next_back()
            .map_or(0, |id| id.value());
        let next = highest_live.max(self.last_assigned) + 1;
        self.last_assigned = next;
        TaskId::new(next)
    }
}

impl InMemoryTaskRepository<DefaultClock> {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository stamping timestamps from `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self::seeded(clock, Vec::new())
    }

    /// Creates a repository holding existing records.
    ///
    /// Later identifiers continue after the highest seeded identifier.
    #[must_use]
    pub fn seeded(clock: Arc<C>, tasks: impl IntoIterator<Item = Task>) -> Self {
        let tasks: BTreeMap<TaskId, Task> = tasks.into_iter().map(|task| (task.id(), task)).collect();
        let last_assigned = tasks.keys().next_back().map_or(0, |id| id.value());
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState {
                tasks,
                last_assigned,
            })),
            clock,
            latency: StoreLatency::none(),
        }
    }

    /// Sets the artificial delay applied before each call.
    #[must_use]
    pub const fn with_latency(mut self, latency: StoreLatency) -> Self {
        self.latency = latency;
        self
    }

    fn read_state(&self) -> RepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> RepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl<C> Clone for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
            latency: self.latency,
        }
    }
}

/// Filters live tasks with `predicate`, skipping archived ones.
fn active_matching(state: &InMemoryTaskState, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
    state
        .tasks
        .values()
        .filter(|task| task.is_active() && predicate(task))
        .cloned()
        .collect()
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn list(&self) -> RepositoryResult<Vec<Task>> {
        pause(self.latency.list).await;
        let state = self.read_state()?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Task> {
        pause(self.latency.read).await;
        let state = self.read_state()?;
        state
            .tasks
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::TaskNotFound(id))
    }

    async fn create(&self, input: &NewTask) -> RepositoryResult<Task> {
        pause(self.latency.create).await;
        let mut state = self.write_state()?;
        let id = state.next_id();
        let task = Task::create(id, input, &*self.clock);
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> RepositoryResult<Task> {
        pause(self.latency.write).await;
        let mut state = self.write_state()?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(RepositoryError::TaskNotFound(id))?;
        task.apply_patch(patch, &*self.clock);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<Task> {
        pause(self.latency.write).await;
        let mut state = self.write_state()?;
        state
            .tasks
            .remove(&id)
            .ok_or(RepositoryError::TaskNotFound(id))
    }

    async fn bulk_delete(&self, ids: &[TaskId]) -> RepositoryResult<Vec<Task>> {
        pause(self.latency.bulk).await;
        let mut state = self.write_state()?;
        let wanted: HashSet<TaskId> = ids.iter().copied().collect();
        let mut removed: Vec<Task> = wanted
            .iter()
            .filter_map(|id| state.tasks.remove(id))
            .collect();
        removed.sort_by_key(Task::id);
        Ok(removed)
    }

    async fn find_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Task>> {
        pause(self.latency.read).await;
        let state = self.read_state()?;
        Ok(active_matching(&state, |task| {
            task.category_id() == Some(category_id)
        }))
    }

    async fn search(&self, query: &str) -> RepositoryResult<Vec<Task>> {
        pause(self.latency.read).await;
        let needle = query.trim().to_lowercase();
        let state = self.read_state()?;
        Ok(active_matching(&state, |task| {
            task.title().as_str().to_lowercase().contains(&needle)
        }))
    }
}
