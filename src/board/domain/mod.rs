//! Domain model for the task board.
//!
//! Tasks and categories are plain records with validated scalar fields. The
//! link from a task to its category is a weak, optional reference; the
//! domain never enforces that the category exists.

mod category;
mod due_date;
mod error;
mod ids;
mod priority;
mod task;

pub use category::{
    CATEGORY_PALETTE, Category, CategoryColor, CategoryName, CategoryPatch,
    DEFAULT_CATEGORY_COLOR, NewCategory,
};
pub use due_date::DueDate;
pub use error::{BoardDomainError, DueDateError, ParsePriorityError};
pub use ids::{CategoryId, TaskId};
pub use priority::Priority;
pub use task::{NewTask, PersistedTaskData, Task, TaskPatch, TaskTitle};
