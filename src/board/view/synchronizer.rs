//! Keeps the published board view in step with the snapshot and criteria.

use super::BoardSnapshot;
use crate::board::domain::{CategoryId, Priority};
use crate::board::query::{BoardView, FilterCriteria, LoadState, derive_view};
use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::debug;

/// Owns the filter criteria and the resident snapshot, and republishes a
/// freshly derived [`BoardView`] after every change.
///
/// Each change is applied and published under one lock, so subscribers never
/// observe a half-applied update such as a partially cleared filter set.
pub struct ViewSynchronizer<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<Mutex<SyncState>>,
    published: Arc<watch::Sender<Arc<BoardView>>>,
    clock: Arc<C>,
}

#[derive(Debug)]
struct SyncState {
    snapshot: BoardSnapshot,
    criteria: FilterCriteria,
    defaults: FilterCriteria,
    load_state: LoadState,
}

impl<C> ViewSynchronizer<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a synchronizer with default criteria and an empty snapshot.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_defaults(clock, FilterCriteria::default())
    }

    /// Creates a synchronizer whose criteria start at, and clear back to,
    /// `defaults`.
    #[must_use]
    pub fn with_defaults(clock: Arc<C>, defaults: FilterCriteria) -> Self {
        let today = clock.utc().date_naive();
        let (published, _) = watch::channel(Arc::new(BoardView::empty(defaults.clone(), today)));
        Self {
            state: Arc::new(Mutex::new(SyncState {
                snapshot: BoardSnapshot::default(),
                criteria: defaults.clone(),
                defaults,
                load_state: LoadState::Idle,
            })),
            published: Arc::new(published),
            clock,
        }
    }

    /// Returns a receiver that is notified of every published view.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<BoardView>> {
        self.published.subscribe()
    }

    /// Returns the latest published view.
    #[must_use]
    pub fn current(&self) -> Arc<BoardView> {
        Arc::clone(&self.published.borrow())
    }

    /// Returns the criteria currently in effect.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        self.lock().criteria.clone()
    }

    /// Returns a copy of the resident snapshot.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.lock().snapshot.clone()
    }

    /// Sets the title search query.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let text = query.into();
        self.mutate(|state| state.criteria.search_query = text);
    }

    /// Restricts the list to one category, or lifts the restriction.
    pub fn set_category_filter(&self, category_id: Option<CategoryId>) {
        self.mutate(|state| state.criteria.category_id = category_id);
    }

    /// Restricts the list to one priority, or lifts the restriction.
    pub fn set_priority_filter(&self, priority: Option<Priority>) {
        self.mutate(|state| state.criteria.priority = priority);
    }

    /// Shows or hides completed tasks.
    pub fn set_show_completed(&self, show_completed: bool) {
        self.mutate(|state| state.criteria.show_completed = show_completed);
    }

    /// Flips completed-task visibility.
    pub fn toggle_show_completed(&self) {
        self.mutate(|state| state.criteria.show_completed = !state.criteria.show_completed);
    }

    /// Replaces every criterion at once.
    pub fn set_criteria(&self, criteria: FilterCriteria) {
        self.mutate(|state| state.criteria = criteria);
    }

    /// Resets search, category, priority, and completed visibility to their
    /// defaults in a single update.
    pub fn clear_filters(&self) {
        self.mutate(|state| state.criteria = state.defaults.clone());
    }

    /// Re-derives the view without changing inputs, picking up a new day.
    pub fn refresh(&self) {
        self.mutate(|_| {});
    }

    pub(crate) fn with_snapshot<T>(&self, read: impl FnOnce(&BoardSnapshot) -> T) -> T {
        read(&self.lock().snapshot)
    }

    pub(crate) fn update_snapshot(&self, update: impl FnOnce(&mut BoardSnapshot)) {
        self.mutate(|state| update(&mut state.snapshot));
    }

    pub(crate) fn replace_snapshot(&self, snapshot: BoardSnapshot) {
        self.mutate(|state| {
            state.snapshot = snapshot;
            state.load_state = LoadState::Ready;
        });
    }

    pub(crate) fn set_load_state(&self, load_state: LoadState) {
        self.mutate(|state| state.load_state = load_state);
    }

    fn mutate(&self, change: impl FnOnce(&mut SyncState)) {
        let mut state = self.lock();
        change(&mut state);
        self.publish(&state);
    }

    fn publish(&self, state: &SyncState) {
        let today = self.clock.utc().date_naive();
        let mut view = derive_view(
            state.snapshot.tasks(),
            state.snapshot.categories(),
            &state.criteria,
            today,
        );
        view.load_state = state.load_state.clone();
        debug!(
            visible = view.tasks.len(),
            total = view.stats.total,
            categories = view.categories.len(),
            "published board view"
        );
        self.published.send_replace(Arc::new(view));
    }

    fn lock(&self) -> MutexGuard<'_, SyncState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C> Clone for ViewSynchronizer<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            published: Arc::clone(&self.published),
            clock: Arc::clone(&self.clock),
        }
    }
}
