//! Application services for the task board.

mod board;
mod error;
mod notice;
mod refresh;
mod requests;

pub use board::BoardService;
pub use error::{ErrorKind, TaskBoardError, TaskBoardResult};
pub use notice::{
    CATEGORY_DELETE_PROMPT, CategoryRemoval, DeleteConfirmation, Notice, NoticeLevel, UserAction,
};
pub use refresh::{CountRefresh, Mutation, RefreshStatus};
pub use requests::{
    CreateCategoryRequest, CreateTaskRequest, EditCategoryRequest, EditTaskRequest,
};
