//! Aggregate task statistics.

use super::due::is_overdue;
use crate::board::domain::Task;
use chrono::NaiveDate;
use serde::Serialize;

/// Counts over non-archived tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    /// Non-archived tasks.
    pub total: usize,
    /// Non-archived completed tasks.
    pub completed: usize,
    /// Non-archived open tasks due before `today`.
    pub overdue: usize,
}

impl TaskStats {
    /// Computes statistics for `tasks` as of `today`.
    #[must_use]
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        tasks
            .iter()
            .filter(|task| task.is_active())
            .fold(Self::default(), |mut stats, task| {
                stats.total += 1;
                if task.is_completed() {
                    stats.completed += 1;
                }
                if is_overdue(task, today) {
                    stats.overdue += 1;
                }
                stats
            })
    }

    /// Returns the completed share as a whole percentage, rounded half up.
    ///
    /// Returns 0 when there are no tasks.
    #[must_use]
    pub fn completion_rate(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        // round(completed / total * 100) == floor((200 * completed + total) / (2 * total))
        let numerator = self.completed.saturating_mul(200).saturating_add(self.total);
        let denominator = self.total.saturating_mul(2);
        let rate = numerator.div_euclid(denominator);
        u8::try_from(rate).unwrap_or(100)
    }
}
