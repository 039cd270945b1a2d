//! Best-effort refresh of the task count cached on a category.

use crate::board::{domain::CategoryId, ports::CategoryRepository};
use std::{sync::Arc, time::Duration};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Outcome of a finished count refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStatus {
    /// The backend accepted the new count.
    Applied,
    /// The backend rejected the write, timed out, or the refresh task died.
    /// The failure has already been logged.
    Failed,
}

/// Handle to a detached count refresh.
///
/// The triggering action never awaits this handle; dropping it leaves the
/// refresh running. Callers that need to observe completion, such as tests,
/// may await [`CountRefresh::outcome`].
#[derive(Debug)]
pub struct CountRefresh {
    category_id: CategoryId,
    handle: JoinHandle<RefreshStatus>,
}

impl CountRefresh {
    /// Spawns a refresh writing `count` to the category's cached field.
    pub(crate) fn spawn<R>(
        repository: Arc<R>,
        category_id: CategoryId,
        count: usize,
        timeout: Option<Duration>,
    ) -> Self
    where
        R: CategoryRepository + 'static,
    {
        let handle = tokio::spawn(async move {
            let write = repository.update_task_count(category_id, count);
            let result = match timeout {
                Some(limit) => match tokio::time::timeout(limit, write).await {
                    Ok(result) => result.map_err(|err| err.to_string()),
                    Err(_) => Err(format!("timed out after {limit:?}")),
                },
                None => write.await.map_err(|err| err.to_string()),
            };
            match result {
                Ok(()) => {
                    debug!(%category_id, count, "refreshed category task count");
                    RefreshStatus::Applied
                }
                Err(reason) => {
                    warn!(%category_id, count, %reason, "category task count refresh failed");
                    RefreshStatus::Failed
                }
            }
        });
        Self {
            category_id,
            handle,
        }
    }

    /// Returns the category being refreshed.
    #[must_use]
    pub const fn category_id(&self) -> CategoryId {
        self.category_id
    }

    /// Waits for the refresh to finish.
    pub async fn outcome(self) -> RefreshStatus {
        match self.handle.await {
            Ok(status) => status,
            Err(err) => {
                warn!(category_id = %self.category_id, error = %err, "count refresh task aborted");
                RefreshStatus::Failed
            }
        }
    }
}

/// Result of a successful mutation plus the count refreshes it triggered.
#[derive(Debug)]
pub struct Mutation<T> {
    value: T,
    refreshes: Vec<CountRefresh>,
}

impl<T> Mutation<T> {
    pub(crate) const fn new(value: T, refreshes: Vec<CountRefresh>) -> Self {
        Self { value, refreshes }
    }

    /// Returns the mutation result.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the refreshes spawned by the mutation.
    #[must_use]
    pub fn refreshes(&self) -> &[CountRefresh] {
        &self.refreshes
    }

    /// Discards the refresh handles and returns the result.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Splits the mutation into its result and refresh handles.
    #[must_use]
    pub fn into_parts(self) -> (T, Vec<CountRefresh>) {
        (self.value, self.refreshes)
    }
}
