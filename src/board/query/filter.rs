//! Task list filtering.

use super::FilterCriteria;
use crate::board::domain::Task;

/// Narrows `tasks` by search, category, priority, and completed visibility,
/// in that order.
///
/// Archived tasks are not removed here; they only drop out of counts.
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    let needle = criteria.search_needle();

    tasks
        .iter()
        .filter(|task| {
            needle
                .as_deref()
                .is_none_or(|needle| task.title().as_str().to_lowercase().contains(needle))
        })
        .filter(|task| criteria.matches_category(task))
        .filter(|task| criteria.matches_priority(task))
        .filter(|task| criteria.matches_completion(task))
        .collect()
}
