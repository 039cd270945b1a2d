//! Simulated call latency for the in-memory repositories.

use std::time::Duration;

/// Artificial delay applied before each repository call, per call class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreLatency {
    /// Delay before listing every record.
    pub list: Duration,
    /// Delay before single-record reads and filtered lookups.
    pub read: Duration,
    /// Delay before creating a record.
    pub create: Duration,
    /// Delay before updates and single deletes.
    pub write: Duration,
    /// Delay before bulk deletes.
    pub bulk: Duration,
}

impl StoreLatency {
    /// No delay at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            list: Duration::ZERO,
            read: Duration::ZERO,
            create: Duration::ZERO,
            write: Duration::ZERO,
            bulk: Duration::ZERO,
        }
    }

    /// Delays matching a slow mock backend (300/200/250/200/300 ms).
    #[must_use]
    pub const fn simulated() -> Self {
        Self {
            list: Duration::from_millis(300),
            read: Duration::from_millis(200),
            create: Duration::from_millis(250),
            write: Duration::from_millis(200),
            bulk: Duration::from_millis(300),
        }
    }
}

pub(super) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
