//! Query engine deriving displayable views from a board snapshot.
//!
//! Everything here is a pure function of `(tasks, categories, criteria,
//! today)`: no I/O, no suspension, no mutation of the inputs.

mod categories;
mod criteria;
mod due;
mod filter;
mod sort;
mod stats;
mod view;

pub use categories::{CategoryView, category_counts, live_task_count};
pub use criteria::FilterCriteria;
pub use due::{DueStatus, classify_due, describe_due, is_overdue};
pub use filter::filter_tasks;
pub use sort::{compare_tasks, sort_tasks};
pub use stats::TaskStats;
pub use view::{BoardView, LoadState, derive_view};
