//! Mutation coordination for the task board.
//!
//! Every operation validates its input, awaits the repository, and only then
//! folds the confirmed record into the resident snapshot. A failed call
//! leaves the snapshot at its last confirmed state.

use super::{
    CategoryRemoval, CountRefresh, CreateCategoryRequest, CreateTaskRequest,
    DeleteConfirmation, EditCategoryRequest, EditTaskRequest, Mutation, TaskBoardError,
    TaskBoardResult,
};
use crate::board::{
    domain::{Category, CategoryId, Task, TaskId, TaskPatch},
    ports::{CategoryRepository, RepositoryResult, TaskRepository},
    query::{LoadState, live_task_count},
    view::{BoardSnapshot, ViewSynchronizer},
};
use mockable::Clock;
use std::{collections::BTreeSet, future::Future, sync::Arc, time::Duration};
use tracing::{info, instrument, warn};

/// Applies user actions to the repositories and keeps the published view in
/// step with their results.
pub struct BoardService<T, R, C>
where
    T: TaskRepository + 'static,
    R: CategoryRepository + 'static,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    categories: Arc<R>,
    view: ViewSynchronizer<C>,
    timeout: Option<Duration>,
}

impl<T, R, C> BoardService<T, R, C>
where
    T: TaskRepository + 'static,
    R: CategoryRepository + 'static,
    C: Clock + Send + Sync,
{
    /// Creates a service publishing through `view`.
    #[must_use]
    pub const fn new(tasks: Arc<T>, categories: Arc<R>, view: ViewSynchronizer<C>) -> Self {
        Self {
            tasks,
            categories,
            view,
            timeout: None,
        }
    }

    /// Bounds every repository call by `limit`.
    #[must_use]
    pub const fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Returns the synchronizer publishing the board view.
    #[must_use]
    pub const fn view(&self) -> &ViewSynchronizer<C> {
        &self.view
    }

    /// Fetches all tasks and categories and replaces the resident snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError`] when either listing fails. The load state
    /// is then [`LoadState::Failed`] and the previous snapshot is kept.
    #[instrument(skip_all)]
    pub async fn load(&self) -> TaskBoardResult<()> {
        self.view.set_load_state(LoadState::Loading);
        let listing = tokio::try_join!(
            self.bounded(self.tasks.list()),
            self.bounded(self.categories.list()),
        );
        match listing {
            Ok((tasks, categories)) => {
                info!(tasks = tasks.len(), categories = categories.len(), "board loaded");
                self.view
                    .replace_snapshot(BoardSnapshot::new(tasks, categories));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "board load failed");
                self.view.set_load_state(LoadState::Failed {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Creates a task and refreshes its category's cached count.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for a blank title or malformed due
    /// date, before the repository is called, or the repository failure.
    #[instrument(skip_all)]
    pub async fn add_task(&self, request: CreateTaskRequest) -> TaskBoardResult<Mutation<Task>> {
        let input = request.validate()?;
        let task = self.bounded(self.tasks.create(&input)).await?;
        info!(task_id = %task.id(), "task created");
        self.view.update_snapshot(|snapshot| snapshot.upsert_task(task.clone()));
        let refreshes = self.refresh_counts(task.category_id());
        Ok(Mutation::new(task, refreshes))
    }

    /// Marks a task complete or incomplete.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the task does not exist or
    /// persistence fails.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn toggle_task_completion(&self, id: TaskId, completed: bool) -> TaskBoardResult<Task> {
        let patch = TaskPatch::new().with_completed(completed);
        let task = self.bounded(self.tasks.update(id, &patch)).await?;
        self.view.update_snapshot(|snapshot| snapshot.upsert_task(task.clone()));
        Ok(task)
    }

    /// Applies a partial edit to a task.
    ///
    /// When the edit moves the task between categories or changes whether it
    /// is archived, the cached counts of the affected categories are
    /// refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for invalid fields, or the
    /// repository failure.
    #[instrument(skip(self, request), fields(task_id = %id))]
    pub async fn edit_task(
        &self,
        id: TaskId,
        request: EditTaskRequest,
    ) -> TaskBoardResult<Mutation<Task>> {
        let patch = request.validate()?;
        let previous = self.view.with_snapshot(|snapshot| {
            snapshot
                .task(id)
                .map(|task| (task.category_id(), task.is_archived()))
        });
        let task = self.bounded(self.tasks.update(id, &patch)).await?;
        self.view.update_snapshot(|snapshot| snapshot.upsert_task(task.clone()));

        let refreshes = match previous {
            Some((old_category, was_archived))
                if old_category != task.category_id() || was_archived != task.is_archived() =>
            {
                self.refresh_counts(old_category.into_iter().chain(task.category_id()))
            }
            Some(_) => Vec::new(),
            None => self.refresh_counts(task.category_id()),
        };
        Ok(Mutation::new(task, refreshes))
    }

    /// Deletes a task and refreshes its category's cached count.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] with a not-found error when no
    /// task has the id; the snapshot is left untouched.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn remove_task(&self, id: TaskId) -> TaskBoardResult<Mutation<Task>> {
        let removed = self.bounded(self.tasks.delete(id)).await?;
        self.view.update_snapshot(|snapshot| {
            snapshot.remove_task(id);
        });
        let refreshes = self.refresh_counts(removed.category_id());
        Ok(Mutation::new(removed, refreshes))
    }

    /// Deletes every listed task; unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence fails.
    #[instrument(skip_all, fields(requested = ids.len()))]
    pub async fn remove_tasks(&self, ids: &[TaskId]) -> TaskBoardResult<Mutation<Vec<Task>>> {
        let removed = self.bounded(self.tasks.bulk_delete(ids)).await?;
        info!(removed = removed.len(), "tasks bulk deleted");
        self.view.update_snapshot(|snapshot| {
            for task in &removed {
                snapshot.remove_task(task.id());
            }
        });
        let refreshes = self.refresh_counts(removed.iter().filter_map(Task::category_id));
        Ok(Mutation::new(removed, refreshes))
    }

    /// Fetches a task straight from the repository.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the task does not exist or
    /// persistence fails.
    pub async fn find_task(&self, id: TaskId) -> TaskBoardResult<Task> {
        self.bounded(self.tasks.find_by_id(id)).await
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for a blank name or color, or the
    /// repository failure.
    #[instrument(skip_all)]
    pub async fn create_category(&self, request: CreateCategoryRequest) -> TaskBoardResult<Category> {
        let input = request.validate()?;
        let category = self.bounded(self.categories.create(&input)).await?;
        info!(category_id = %category.id(), "category created");
        self.view
            .update_snapshot(|snapshot| snapshot.upsert_category(category.clone()));
        Ok(category)
    }

    /// Renames or recolors a category.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for blank fields, or the repository
    /// failure.
    #[instrument(skip(self, request), fields(category_id = %id))]
    pub async fn edit_category(
        &self,
        id: CategoryId,
        request: EditCategoryRequest,
    ) -> TaskBoardResult<Category> {
        let patch = request.validate()?;
        let category = self.bounded(self.categories.update(id, &patch)).await?;
        self.view
            .update_snapshot(|snapshot| snapshot.upsert_category(category.clone()));
        Ok(category)
    }

    /// Deletes a category after clearing the reference on every task that
    /// points at it. Tasks themselves are never deleted.
    ///
    /// Nothing is touched when `confirmation` is
    /// [`DeleteConfirmation::Declined`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the category does not
    /// exist, or when clearing a reference or deleting the category fails.
    /// References cleared before the failure stay cleared in the snapshot.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn remove_category(
        &self,
        id: CategoryId,
        confirmation: DeleteConfirmation,
    ) -> TaskBoardResult<CategoryRemoval> {
        if confirmation == DeleteConfirmation::Declined {
            return Ok(CategoryRemoval::Declined);
        }
        self.bounded(self.categories.find_by_id(id)).await?;

        let referencing: Vec<TaskId> = self
            .bounded(self.tasks.list())
            .await?
            .iter()
            .filter(|task| task.category_id() == Some(id))
            .map(Task::id)
            .collect();

        let detach = TaskPatch::new().with_category(None);
        let mut detached = Vec::with_capacity(referencing.len());
        for task_id in referencing {
            match self.bounded(self.tasks.update(task_id, &detach)).await {
                Ok(task) => {
                    self.view.update_snapshot(|snapshot| snapshot.upsert_task(task));
                    detached.push(task_id);
                }
                Err(err) => {
                    warn!(%task_id, error = %err, "failed to clear category reference");
                    return Err(err);
                }
            }
        }

        let category = self.bounded(self.categories.delete(id)).await?;
        info!(detached = detached.len(), "category deleted");
        self.view.update_snapshot(|snapshot| snapshot.remove_category(id));
        Ok(CategoryRemoval::Removed { category, detached })
    }

    /// Spawns one best-effort refresh per distinct category, using the live
    /// count from the snapshot.
    fn refresh_counts(&self, category_ids: impl IntoIterator<Item = CategoryId>) -> Vec<CountRefresh> {
        let distinct: BTreeSet<CategoryId> = category_ids.into_iter().collect();
        distinct
            .into_iter()
            .map(|category_id| {
                let count = self
                    .view
                    .with_snapshot(|snapshot| live_task_count(snapshot.tasks(), category_id));
                CountRefresh::spawn(Arc::clone(&self.categories), category_id, count, self.timeout)
            })
            .collect()
    }

    async fn bounded<V>(
        &self,
        call: impl Future<Output = RepositoryResult<V>> + Send,
    ) -> TaskBoardResult<V> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| TaskBoardError::Timeout(limit))?
                .map_err(TaskBoardError::from),
            None => call.await.map_err(TaskBoardError::from),
        }
    }
}

impl<T, R, C> Clone for BoardService<T, R, C>
where
    T: TaskRepository + 'static,
    R: CategoryRepository + 'static,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            categories: Arc::clone(&self.categories),
            view: self.view.clone(),
            timeout: self.timeout,
        }
    }
}
