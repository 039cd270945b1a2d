//! Live task counts per category.

use crate::board::domain::{Category, CategoryColor, CategoryId, CategoryName, Task};
use serde::Serialize;
use std::collections::HashMap;

/// Category annotated with its live task count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    /// Category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: CategoryName,
    /// Display color.
    pub color: CategoryColor,
    /// Non-archived tasks currently referencing the category.
    pub task_count: usize,
}

/// Annotates every category with the live count of non-archived tasks that
/// reference it.
///
/// The cached count stored on the category is ignored.
#[must_use]
pub fn category_counts(categories: &[Category], tasks: &[Task]) -> Vec<CategoryView> {
    let mut counts: HashMap<CategoryId, usize> = HashMap::new();
    for category_id in tasks
        .iter()
        .filter(|task| task.is_active())
        .filter_map(Task::category_id)
    {
        *counts.entry(category_id).or_default() += 1;
    }

    categories
        .iter()
        .map(|category| CategoryView {
            id: category.id(),
            name: category.name().clone(),
            color: category.color().clone(),
            task_count: counts.get(&category.id()).copied().unwrap_or_default(),
        })
        .collect()
}

/// Counts the non-archived tasks referencing one category.
#[must_use]
pub fn live_task_count(tasks: &[Task], category_id: CategoryId) -> usize {
    tasks
        .iter()
        .filter(|task| task.is_active() && task.category_id() == Some(category_id))
        .count()
}
