//! Loads a board from a seed file and prints the derived view as JSON.
//!
//! Usage:
//!
//! ```text
//! board_snapshot [config-path] [search-query]
//! ```
//!
//! Without a config path every setting takes its default and the board starts
//! empty. A representative config is:
//!
//! ```toml
//! [store]
//! seed_path = "board.json"
//!
//! [store.latency]
//! list_ms = 0
//!
//! [board]
//! show_completed = true
//! ```
//!
//! The seed file holds `tasks` and `categories` arrays in the persisted field
//! layout.

use camino::Utf8PathBuf;
use mockable::DefaultClock;
use std::env;
use std::io::{self, Write};
use std::sync::Arc;
use taskflow::board::adapters::memory::SeedData;
use taskflow::board::services::BoardService;
use taskflow::board::view::ViewSynchronizer;
use taskflow::config::TaskflowConfig;
use taskflow::telemetry::init_tracing;
use thiserror::Error;
use tokio::runtime::Builder;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum SnapshotError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to build runtime: {0}")]
    Runtime(#[source] io::Error),
}

struct Args {
    config_path: Option<Utf8PathBuf>,
    search_query: Option<String>,
}

fn main() -> Result<(), BoxError> {
    let args = parse_args(env::args().skip(1))?;
    let config = match args.config_path {
        Some(path) => TaskflowConfig::load(&path)?,
        None => TaskflowConfig::default(),
    };
    init_tracing(&config.logging)?;

    let seed = match config.store.seed_path.as_deref() {
        Some(path) => SeedData::load(path)?,
        None => SeedData::default(),
    };

    let runtime = Builder::new_multi_thread()
        .enable_time()
        .build()
        .map_err(SnapshotError::Runtime)?;

    let view = runtime.block_on(async {
        let clock = Arc::new(DefaultClock);
        let (tasks, categories) =
            seed.into_repositories(Arc::clone(&clock), config.store.latency.into());
        let synchronizer = ViewSynchronizer::with_defaults(clock, config.board.default_criteria());
        let mut service = BoardService::new(Arc::new(tasks), Arc::new(categories), synchronizer);
        if let Some(limit) = config.board.persistence_timeout() {
            service = service.with_timeout(limit);
        }
        service.load().await?;
        if let Some(query) = args.search_query {
            service.view().set_search_query(query);
        }
        Ok::<_, BoxError>(service.view().current())
    })?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &*view)?;
    writeln!(stdout)?;
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, SnapshotError> {
    let config_path = args.next().map(Utf8PathBuf::from);
    let search_query = args.next();
    if let Some(extra) = args.next() {
        return Err(SnapshotError::InvalidArgs(format!(
            "unexpected argument `{extra}`"
        )));
    }
    Ok(Args {
        config_path,
        search_query,
    })
}
