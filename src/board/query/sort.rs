//! Display ordering for tasks.

use crate::board::domain::{DueDate, Task};
use std::cmp::Ordering;

/// Orders tasks for display.
///
/// Open tasks come before completed ones, then higher priority first, then
/// tasks with a due date (earliest first) before tasks without one, then the
/// most recently created first. Identifiers break any remaining tie so the
/// order is total.
#[must_use]
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.is_completed()
        .cmp(&b.is_completed())
        .then_with(|| b.priority().weight().cmp(&a.priority().weight()))
        .then_with(|| compare_due_dates(a.due_date(), b.due_date()))
        .then_with(|| b.created_at().cmp(&a.created_at()))
        .then_with(|| b.id().cmp(&a.id()))
}

/// Sorts a filtered task list in place.
pub fn sort_tasks(tasks: &mut [&Task]) {
    tasks.sort_by(|a, b| compare_tasks(a, b));
}

// Unparsable dates still count as "has a due date" but sort after every
// valid date.
fn compare_due_dates(a: Option<&DueDate>, b: Option<&DueDate>) -> Ordering {
    match (a, b) {
        (Some(first), Some(second)) => match (first.date(), second.date()) {
            (Ok(left), Ok(right)) => left.cmp(&right),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => Ordering::Equal,
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
