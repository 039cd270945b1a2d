//! Seed records for the in-memory repositories.
//!
//! A seed file is a JSON object with optional `tasks` and `categories`
//! arrays using the same field names the repositories persist.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use super::{InMemoryCategoryRepository, InMemoryTaskRepository, StoreLatency};
use crate::board::domain::{Category, Task};
use crate::config::read_file;
use mockable::Clock;

/// Errors returned while loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Read {
        /// Path of the seed file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not valid seed JSON.
    #[error("failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Records used to pre-populate the in-memory repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeedData {
    /// Seed tasks.
    pub tasks: Vec<Task>,
    /// Seed categories.
    pub categories: Vec<Category>,
}

impl SeedData {
    /// Parses seed data from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] when the document is malformed or a
    /// record fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Read`] when the file cannot be read or
    /// [`SeedError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, SeedError> {
        let contents = read_file(path).map_err(|source| SeedError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Builds repositories holding the seed records.
    #[must_use]
    pub fn into_repositories<C>(
        self,
        clock: Arc<C>,
        latency: StoreLatency,
    ) -> (InMemoryTaskRepository<C>, InMemoryCategoryRepository)
    where
        C: Clock + Send + Sync,
    {
        let tasks = InMemoryTaskRepository::seeded(clock, self.tasks).with_latency(latency);
        let categories = InMemoryCategoryRepository::seeded(self.categories).with_latency(latency);
        (tasks, categories)
    }
}
