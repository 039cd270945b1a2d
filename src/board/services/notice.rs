//! User-facing notices for board actions.
//!
//! Failures of a user action are reported as non-fatal notices rather than
//! surfaced as process errors. Best-effort count refreshes never produce a
//! notice.

use super::TaskBoardError;
use crate::board::domain::{Category, TaskId};
use serde::Serialize;

/// Prompt shown before a category is removed.
pub const CATEGORY_DELETE_PROMPT: &str = "Delete this category? Tasks will not be deleted.";

/// User actions that produce a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    /// Initial board load.
    LoadBoard,
    /// Task creation.
    AddTask,
    /// Completion toggle; `completed` is the requested new state.
    ToggleTask {
        /// Requested completion state.
        completed: bool,
    },
    /// Task edit.
    EditTask,
    /// Task removal, single or bulk.
    RemoveTask,
    /// Category creation.
    CreateCategory,
    /// Category edit.
    EditCategory,
    /// Category removal.
    RemoveCategory,
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// The action succeeded.
    Success,
    /// The action failed and nothing was changed.
    Failure,
}

/// A short message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Message text.
    pub message: &'static str,
}

impl Notice {
    /// Returns the success notice for `action`, if the action announces one.
    ///
    /// Un-completing a task and loading the board succeed silently.
    #[must_use]
    pub const fn success(action: UserAction) -> Option<Self> {
        let message = match action {
            UserAction::LoadBoard | UserAction::ToggleTask { completed: false } => return None,
            UserAction::AddTask => "Task created successfully!",
            UserAction::ToggleTask { completed: true } => "Task completed! 🎉",
            UserAction::EditTask => "Task updated",
            UserAction::RemoveTask => "Task deleted",
            UserAction::CreateCategory => "Category created!",
            UserAction::EditCategory => "Category updated",
            UserAction::RemoveCategory => "Category deleted",
        };
        Some(Self {
            level: NoticeLevel::Success,
            message,
        })
    }

    /// Returns the failure notice for `action`.
    #[must_use]
    pub const fn failure(action: UserAction) -> Self {
        let message = match action {
            UserAction::LoadBoard => "Failed to load tasks",
            UserAction::AddTask => "Failed to create task",
            UserAction::ToggleTask { .. } | UserAction::EditTask => "Failed to update task",
            UserAction::RemoveTask => "Failed to delete task",
            UserAction::CreateCategory => "Failed to create category",
            UserAction::EditCategory => "Failed to update category",
            UserAction::RemoveCategory => "Failed to delete category",
        };
        Self {
            level: NoticeLevel::Failure,
            message,
        }
    }

    /// Maps the result of `action` to its notice.
    #[must_use]
    pub fn for_result<T>(action: UserAction, result: &Result<T, TaskBoardError>) -> Option<Self> {
        match result {
            Ok(_) => Self::success(action),
            Err(_) => Some(Self::failure(action)),
        }
    }
}

/// Caller's answer to [`CATEGORY_DELETE_PROMPT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteConfirmation {
    /// Proceed with the removal.
    Confirmed,
    /// Leave the category in place.
    Declined,
}

/// Outcome of a category removal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRemoval {
    /// The caller declined; nothing was touched.
    Declined,
    /// The category was deleted.
    Removed {
        /// The deleted record.
        category: Category,
        /// Tasks whose category reference was cleared.
        detached: Vec<TaskId>,
    },
}
