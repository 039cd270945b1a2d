//! Runtime configuration loaded from TOML.
//!
//! Every field has a default, so an empty document is a valid configuration.
//!
//! ```toml
//! [store]
//! seed_path = "board.json"
//!
//! [store.latency]
//! list_ms = 300
//! read_ms = 200
//!
//! [board]
//! persistence_timeout_ms = 5000
//! show_completed = false
//!
//! [logging]
//! filter = "info,taskflow=debug"
//! ansi = false
//! ```

use crate::board::{adapters::memory::StoreLatency, query::FilterCriteria};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::Deserialize;
use std::{io, time::Duration};
use thiserror::Error;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskflowConfig {
    /// Persistence backend settings.
    pub store: StoreConfig,
    /// Board behaviour settings.
    pub board: BoardConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Persistence backend settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Simulated per-call latency.
    pub latency: LatencyConfig,
    /// JSON file holding records to seed the store with.
    pub seed_path: Option<Utf8PathBuf>,
}

/// Simulated latency per call class, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatencyConfig {
    /// Listing every record.
    pub list_ms: u64,
    /// Fetching one record.
    pub read_ms: u64,
    /// Creating a record.
    pub create_ms: u64,
    /// Updating or deleting a record.
    pub write_ms: u64,
    /// Bulk deletion.
    pub bulk_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self::from(StoreLatency::simulated())
    }
}

impl From<StoreLatency> for LatencyConfig {
    fn from(latency: StoreLatency) -> Self {
        Self {
            list_ms: millis(latency.list),
            read_ms: millis(latency.read),
            create_ms: millis(latency.create),
            write_ms: millis(latency.write),
            bulk_ms: millis(latency.bulk),
        }
    }
}

impl From<LatencyConfig> for StoreLatency {
    fn from(config: LatencyConfig) -> Self {
        Self {
            list: Duration::from_millis(config.list_ms),
            read: Duration::from_millis(config.read_ms),
            create: Duration::from_millis(config.create_ms),
            write: Duration::from_millis(config.write_ms),
            bulk: Duration::from_millis(config.bulk_ms),
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Board behaviour settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Upper bound on each repository call; `0` disables the bound.
    pub persistence_timeout_ms: u64,
    /// Whether completed tasks are shown when filters are cleared.
    pub show_completed: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            persistence_timeout_ms: 5_000,
            show_completed: false,
        }
    }
}

impl BoardConfig {
    /// Returns the repository call bound, if any.
    #[must_use]
    pub const fn persistence_timeout(&self) -> Option<Duration> {
        match self.persistence_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Returns the criteria the board starts with and clears back to.
    #[must_use]
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            show_completed: self.show_completed,
            ..FilterCriteria::default()
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Whether to colour output.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,taskflow=debug".to_owned(),
            ansi: false,
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The TOML document was invalid.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl TaskflowConfig {
    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let document = read_file(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&document)
    }
}

/// Reads a UTF-8 file through a capability handle on its parent directory.
pub(crate) fn read_file(path: &Utf8Path) -> io::Result<String> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("{path} has no file name"))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
