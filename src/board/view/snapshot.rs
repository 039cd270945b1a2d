//! Locally resident copy of the board records.

use crate::board::domain::{Category, CategoryId, Task, TaskId};

/// Tasks and categories as last confirmed by the persistence backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    tasks: Vec<Task>,
    categories: Vec<Category>,
}

impl BoardSnapshot {
    /// Creates a snapshot from loaded records.
    #[must_use]
    pub const fn new(tasks: Vec<Task>, categories: Vec<Category>) -> Self {
        Self { tasks, categories }
    }

    /// Returns every task, archived ones included.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns every category.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the task with the given identifier, if resident.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Inserts the task or replaces the resident copy with the same id.
    pub(crate) fn upsert_task(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|resident| resident.id() == task.id()) {
            Some(resident) => *resident = task,
            None => self.tasks.push(task),
        }
    }

    pub(crate) fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }

    pub(crate) fn upsert_category(&mut self, category: Category) {
        match self
            .categories
            .iter_mut()
            .find(|resident| resident.id() == category.id())
        {
            Some(resident) => *resident = category,
            None => self.categories.push(category),
        }
    }

    pub(crate) fn remove_category(&mut self, id: CategoryId) {
        self.categories.retain(|category| category.id() != id);
    }
}
