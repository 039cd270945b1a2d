//! Filter criteria chosen by the user.

use crate::board::domain::{CategoryId, Priority, Task};
use serde::{Deserialize, Serialize};

/// Filters applied to the task list before sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive title substring; blank means no search.
    pub search_query: String,
    /// Only tasks referencing this category; `None` disables the filter.
    pub category_id: Option<CategoryId>,
    /// Only tasks with this priority; `None` disables the filter.
    pub priority: Option<Priority>,
    /// When `false`, completed tasks are left out entirely.
    pub show_completed: bool,
}

impl FilterCriteria {
    /// Returns the trimmed search needle, or `None` when search is off.
    #[must_use]
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    /// Returns `true` when any filter deviates from "show all open tasks".
    ///
    /// Any non-empty query counts, including whitespace that
    /// [`Self::search_needle`] ignores when filtering.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.category_id.is_some()
            || self.priority.is_some()
            || !self.search_query.is_empty()
            || self.show_completed
    }

    /// Returns `true` when the task passes the category filter.
    #[must_use]
    pub fn matches_category(&self, task: &Task) -> bool {
        self.category_id
            .is_none_or(|category_id| task.category_id() == Some(category_id))
    }

    /// Returns `true` when the task passes the priority filter.
    #[must_use]
    pub fn matches_priority(&self, task: &Task) -> bool {
        self.priority
            .is_none_or(|priority| task.priority() == priority)
    }

    /// Returns `true` when the task passes the completed-visibility filter.
    #[must_use]
    pub const fn matches_completion(&self, task: &Task) -> bool {
        self.show_completed || !task.is_completed()
    }
}
