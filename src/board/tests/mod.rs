//! Unit tests for the board module.
//!
//! Tests are organised by layer: domain records, query derivation, the
//! in-memory store, mutation coordination, and view synchronization.


use crate::board::domain::{PersistedTaskData, Priority, TaskId, TaskTitle};
use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Mutex, PoisonError};

/// Clock frozen at a chosen instant, advanced explicitly by tests.
#[derive(Debug)]
pub(super) struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub(super) const fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub(super) fn advance(&self, by: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Noon UTC on 2024-01-08, the reference "now" for time-sensitive tests.
pub(super) fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 8, 12, 0, 0)
        .single()
        .expect("valid reference instant")
}

pub(super) fn reference_today() -> NaiveDate {
    reference_now().date_naive()
}

/// Open, medium-priority, uncategorized task created at `created_at`.
pub(super) fn persisted(id: u64, title: &str, created_at: DateTime<Utc>) -> PersistedTaskData {
    PersistedTaskData {
        id: TaskId::new(id),
        title: TaskTitle::new(title).expect("valid title"),
        completed: false,
        priority: Priority::Medium,
        category_id: None,
        due_date: None,
        created_at,
        completed_at: None,
        archived: false,
    }
}
