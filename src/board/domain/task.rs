//! Task records, creation input, and partial updates.

use super::{BoardDomainError, CategoryId, DueDate, Priority, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty, trimmed task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    priority: Priority,
    category_id: Option<CategoryId>,
    due_date: Option<DueDate>,
}

impl NewTask {
    /// Creates input with default priority and no category or due date.
    #[must_use]
    pub fn new(title: TaskTitle) -> Self {
        Self {
            title,
            priority: Priority::default(),
            category_id: None,
            due_date: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category reference.
    #[must_use]
    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: Option<DueDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

/// Partial update applied to an existing task.
///
/// The identifier and creation timestamp are not part of the patch, so an
/// update can never change them. `completed_at` is derived from the
/// `completed` transition when the patch is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<TaskTitle>,
    completed: Option<bool>,
    priority: Option<Priority>,
    category_id: Option<Option<CategoryId>>,
    due_date: Option<Option<DueDate>>,
    archived: Option<bool>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
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

    /// Sets or clears the category reference.
    #[must_use]
    pub const fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: Option<DueDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the archived flag.
    #[must_use]
    pub const fn with_archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }
}

/// Task record.
///
/// Deserialized records pass through [`Task::from_persisted`], so a stored
/// record always satisfies the completion invariant once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PersistedTaskData")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    completed: bool,
    priority: Priority,
    category_id: Option<CategoryId>,
    due_date: Option<DueDate>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    archived: bool,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    #[serde(alias = "Id")]
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Persisted priority.
    #[serde(default)]
    pub priority: Priority,
    /// Persisted category reference, if any.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Persisted due date, if any.
    #[serde(default)]
    pub due_date: Option<DueDate>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted archived flag.
    #[serde(default)]
    pub archived: bool,
}

impl From<PersistedTaskData> for Task {
    fn from(data: PersistedTaskData) -> Self {
        Self::from_persisted(data)
    }
}

impl Task {
    /// Creates a task with the identifier assigned by the store.
    #[must_use]
    pub fn create(id: TaskId, input: &NewTask, clock: &impl Clock) -> Self {
        Self {
            id,
            title: input.title.clone(),
            completed: false,
            priority: input.priority,
            category_id: input.category_id,
            due_date: input.due_date.clone(),
            created_at: clock.utc(),
            completed_at: None,
            archived: false,
        }
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// A completed record without a completion timestamp is stamped with its
    /// creation time; an open record drops any stale completion timestamp.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let completed_at = if data.completed {
            Some(data.completed_at.unwrap_or(data.created_at))
        } else {
            None
        };
        Self {
            id: data.id,
            title: data.title,
            completed: data.completed,
            priority: data.priority,
            category_id: data.category_id,
            due_date: data.due_date,
            created_at: data.created_at,
            completed_at,
            archived: data.archived,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns `true` when the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the category reference, if any.
    ///
    /// The reference is weak: it may point at a category that no longer
    /// exists.
    #[must_use]
    pub const fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<&DueDate> {
        self.due_date.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, present exactly when completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns `true` when the task is archived.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.archived
    }

    /// Returns `true` when the task counts towards active totals.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.archived
    }

    /// Merges a patch onto the task.
    ///
    /// `completed_at` follows the transition of `completed`: it is stamped on
    /// false→true and cleared whenever the task ends up open. A completed task
    /// that somehow lacks a timestamp is stamped as well.
    pub fn apply_patch(&mut self, patch: &TaskPatch, clock: &impl Clock) {
        let was_completed = self.completed;

        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(due_date) = &patch.due_date {
            self.due_date.clone_from(due_date);
        }
        if let Some(archived) = patch.archived {
            self.archived = archived;
        }

        if !self.completed {
            self.completed_at = None;
        } else if !was_completed || self.completed_at.is_none() {
            self.completed_at = Some(clock.utc());
        }
    }
}
