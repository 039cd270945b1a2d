//! Due-date classification relative to the current calendar day.

use crate::board::domain::{DueDate, Task};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

const LABEL_FORMAT: &str = "%b %-d";

/// Where a due date falls relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "date", rename_all = "snake_case")]
pub enum DueStatus {
    /// Due on the current calendar day.
    Today,
    /// Due on the following calendar day.
    Tomorrow,
    /// Due before today on a task that is still open.
    Overdue(NaiveDate),
    /// Due before today on a task that is already completed.
    Past(NaiveDate),
    /// Due after tomorrow.
    Upcoming(NaiveDate),
    /// The stored date cannot be parsed.
    Invalid,
}

impl DueStatus {
    /// Returns `true` for [`DueStatus::Overdue`].
    #[must_use]
    pub const fn is_overdue(self) -> bool {
        matches!(self, Self::Overdue(_))
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => f.write_str("Today"),
            Self::Tomorrow => f.write_str("Tomorrow"),
            Self::Overdue(date) => write!(f, "Overdue - {}", date.format(LABEL_FORMAT)),
            Self::Past(date) | Self::Upcoming(date) => write!(f, "{}", date.format(LABEL_FORMAT)),
            Self::Invalid => f.write_str("Invalid date"),
        }
    }
}

/// Classifies a due date for a task with the given completion state.
#[must_use]
pub fn classify_due(due_date: &DueDate, completed: bool, today: NaiveDate) -> DueStatus {
    let Ok(date) = due_date.date() else {
        return DueStatus::Invalid;
    };

    if date == today {
        DueStatus::Today
    } else if today.succ_opt() == Some(date) {
        DueStatus::Tomorrow
    } else if date < today && completed {
        DueStatus::Past(date)
    } else if date < today {
        DueStatus::Overdue(date)
    } else {
        DueStatus::Upcoming(date)
    }
}

/// Classifies the task's due date, or returns `None` when it has none.
#[must_use]
pub fn describe_due(task: &Task, today: NaiveDate) -> Option<DueStatus> {
    task.due_date()
        .map(|due_date| classify_due(due_date, task.is_completed(), today))
}

/// Returns `true` when the task is open and its due date is before today.
#[must_use]
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    describe_due(task, today).is_some_and(DueStatus::is_overdue)
}
