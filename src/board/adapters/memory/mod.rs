//! In-memory repositories standing in for a remote persistence backend.

mod category;
mod latency;
mod seed;
mod task;

pub use category::InMemoryCategoryRepository;
pub use latency::StoreLatency;
pub use seed::{SeedData, SeedError};
pub use task::InMemoryTaskRepository;
