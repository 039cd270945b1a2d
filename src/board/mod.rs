//! Task board: tasks, categories, and the views derived from them.
//!
//! The context follows a hexagonal layout. `domain` holds the records,
//! `ports` the persistence contract, `adapters` the in-memory backend,
//! `services` the mutation coordination, `query` the pure view derivation,
//! and `view` the synchronizer publishing derived views.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod query;
pub mod services;
pub mod view;

#[cfg(test)]
mod tests;
