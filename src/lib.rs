//! Taskflow: task state and query engine for a personal task board.
//!
//! The crate holds tasks and categories, applies user mutations while keeping
//! the two consistent, and derives the filtered, sorted task list and
//! aggregate statistics a presentation layer renders.
//!
//! # Architecture
//!
//! Taskflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure records and validation with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the persistence collaborator
//! - **Adapters**: Concrete implementations of ports (an in-memory store)
//!
//! # Modules
//!
//! - [`board`]: Tasks, categories, mutation coordination, and view derivation
//! - [`config`]: TOML configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod board;
pub mod config;
pub mod telemetry;
