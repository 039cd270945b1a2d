//! The derived board view handed to the presentation layer.

use super::{CategoryView, FilterCriteria, TaskStats, category_counts, filter_tasks, sort_tasks};
use crate::board::domain::{Category, Task};
use chrono::NaiveDate;
use serde::Serialize;

/// Progress of the initial board load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The snapshot reflects the backend.
    Ready,
    /// The last load failed.
    Failed {
        /// Human-readable failure reason.
        message: String,
    },
}

/// Filtered, sorted tasks plus aggregates, derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    /// Tasks passing the criteria, in display order.
    pub tasks: Vec<Task>,
    /// Every category with its live task count.
    pub categories: Vec<CategoryView>,
    /// Statistics over all non-archived tasks, independent of the criteria.
    pub stats: TaskStats,
    /// Criteria the view was derived with.
    pub criteria: FilterCriteria,
    /// Calendar day used for due-date decisions.
    pub today: NaiveDate,
    /// Load progress at derivation time.
    pub load_state: LoadState,
}

impl BoardView {
    /// Returns an empty view for `today`.
    #[must_use]
    pub fn empty(criteria: FilterCriteria, today: NaiveDate) -> Self {
        Self {
            tasks: Vec::new(),
            categories: Vec::new(),
            stats: TaskStats::default(),
            criteria,
            today,
            load_state: LoadState::Idle,
        }
    }
}

/// Derives the board view from a snapshot.
///
/// Pure and synchronous; safe to call on every input change.
#[must_use]
pub fn derive_view(
    tasks: &[Task],
    categories: &[Category],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> BoardView {
    let mut visible = filter_tasks(tasks, criteria);
    sort_tasks(&mut visible);

    BoardView {
        tasks: visible.into_iter().cloned().collect(),
        categories: category_counts(categories, tasks),
        stats: TaskStats::compute(tasks, today),
        criteria: criteria.clone(),
        today,
        load_state: LoadState::Idle,
    }
}
