//! Repository ports for task and category persistence.
//!
//! These traits are the contract of the persistence collaborator. Every call
//! may suspend the caller; implementations assign identifiers and lifecycle
//! timestamps and report missing records as `NotFound`.

use crate::board::domain::{
    Category, CategoryId, CategoryPatch, NewCategory, NewTask, Task, TaskId, TaskPatch,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task, archived ones included.
    async fn list(&self) -> RepositoryResult<Vec<Task>>;

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskNotFound`] when no task has the id.
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Task>;

    /// Stores a new task and returns a copy of the created record.
    ///
    /// The identifier is one greater than the highest identifier ever
    /// assigned, so identifiers are never reused after deletion.
    async fn create(&self, input: &NewTask) -> RepositoryResult<Task>;

    /// Applies a partial update and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskNotFound`] when no task has the id.
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> RepositoryResult<Task>;

    /// Removes a task and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskNotFound`] when no task has the id.
    async fn delete(&self, id: TaskId) -> RepositoryResult<Task>;

    /// Removes every task whose id is listed and returns the removed records.
    ///
    /// Unknown ids are ignored.
    async fn bulk_delete(&self, ids: &[TaskId]) -> RepositoryResult<Vec<Task>>;

    /// Returns the non-archived tasks referencing the category.
    async fn find_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Task>>;

    /// Returns non-archived tasks whose title contains `query`, ignoring case.
    async fn search(&self, query: &str) -> RepositoryResult<Vec<Task>>;
}

/// Category persistence contract.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Returns every stored category.
    async fn list(&self) -> RepositoryResult<Vec<Category>>;

    /// Returns the category with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::CategoryNotFound`] when no category has the
    /// id.
    async fn find_by_id(&self, id: CategoryId) -> RepositoryResult<Category>;

    /// Stores a new category and returns a copy of the created record.
    async fn create(&self, input: &NewCategory) -> RepositoryResult<Category>;

    /// Applies a partial update and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::CategoryNotFound`] when no category has the
    /// id.
    async fn update(&self, id: CategoryId, patch: &CategoryPatch) -> RepositoryResult<Category>;

    /// Removes a category and returns the removed record.
    ///
    /// Tasks referencing the category are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::CategoryNotFound`] when no category has the
    /// id.
    async fn delete(&self, id: CategoryId) -> RepositoryResult<Category>;

    /// Writes the cached task count shown next to a category.
    ///
    /// Callers treat this as best-effort.
    async fn update_task_count(&self, id: CategoryId, count: usize) -> RepositoryResult<()>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The category was not found.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
