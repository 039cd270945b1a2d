//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod repository;

pub use repository::{CategoryRepository, RepositoryError, RepositoryResult, TaskRepository};
