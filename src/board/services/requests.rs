//! Request payloads accepted by the board service.
//!
//! Requests carry raw user input. They are validated into domain values
//! before any repository call, so invalid input never reaches the store.

use crate::board::domain::{
    BoardDomainError, CategoryColor, CategoryId, CategoryName, CategoryPatch, DueDate,
    NewCategory, NewTask, Priority, TaskPatch, TaskTitle,
};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    priority: Priority,
    category_id: Option<CategoryId>,
    due_date: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: Priority::default(),
            category_id: None,
            due_date: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Files the task under a category.
    #[must_use]
    pub const fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets the due date from ISO 8601 text; blank text means no due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub(crate) fn validate(self) -> Result<NewTask, BoardDomainError> {
        let title = TaskTitle::new(self.title)?;
        let due_date = self
            .due_date
            .as_deref()
            .map(DueDate::parse_input)
            .transpose()?
            .flatten();
        Ok(NewTask::new(title)
            .with_priority(self.priority)
            .with_category(self.category_id)
            .with_due_date(due_date))
    }
}

/// Request payload for editing a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskRequest {
    title: Option<String>,
    completed: Option<bool>,
    priority: Option<Priority>,
    category_id: Option<Option<CategoryId>>,
    due_date: Option<Option<String>>,
    archived: Option<bool>,
}

impl EditTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Moves the task to a category.
    #[must_use]
    pub const fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(Some(category_id));
        self
    }

    /// Removes the task from its category.
    #[must_use]
    pub const fn without_category(mut self) -> Self {
        self.category_id = Some(None);
        self
    }

    /// Sets the due date from ISO 8601 text; blank text clears it.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(Some(due_date.into()));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub fn without_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Archives or restores the task.
    #[must_use]
    pub const fn with_archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    pub(crate) fn validate(self) -> Result<TaskPatch, BoardDomainError> {
        let mut patch = TaskPatch::new();
        if let Some(title) = self.title {
            patch = patch.with_title(TaskTitle::new(title)?);
        }
        if let Some(completed) = self.completed {
            patch = patch.with_completed(completed);
        }
        if let Some(priority) = self.priority {
            patch = patch.with_priority(priority);
        }
        if let Some(category_id) = self.category_id {
            patch = patch.with_category(category_id);
        }
        if let Some(due_date) = self.due_date {
            let parsed = due_date
                .as_deref()
                .map(DueDate::parse_input)
                .transpose()?
                .flatten();
            patch = patch.with_due_date(parsed);
        }
        if let Some(archived) = self.archived {
            patch = patch.with_archived(archived);
        }
        Ok(patch)
    }
}

/// Request payload for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryRequest {
    name: String,
    color: Option<String>,
}

impl CreateCategoryRequest {
    /// Creates a request with the required name and the default color.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    /// Sets the display color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub(crate) fn validate(self) -> Result<NewCategory, BoardDomainError> {
        let name = CategoryName::new(self.name)?;
        let color = self
            .color
            .map(CategoryColor::new)
            .transpose()?
            .unwrap_or_default();
        Ok(NewCategory::new(name, color))
    }
}

/// Request payload for editing a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditCategoryRequest {
    name: Option<String>,
    color: Option<String>,
}

impl EditCategoryRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames the category.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Recolors the category.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub(crate) fn validate(self) -> Result<CategoryPatch, BoardDomainError> {
        let mut patch = CategoryPatch::new();
        if let Some(name) = self.name {
            patch = patch.with_name(CategoryName::new(name)?);
        }
        if let Some(color) = self.color {
            patch = patch.with_color(CategoryColor::new(color)?);
        }
        Ok(patch)
    }
}
