//! Service-level errors for board operations.

use crate::board::{domain::BoardDomainError, ports::RepositoryError};
use std::time::Duration;
use thiserror::Error;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Input validation failed before any repository call.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// The repository did not answer in time.
    #[error("persistence call timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Coarse classification of a failed user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The action referenced a task or category that does not exist.
    NotFound,
    /// A required field was empty or malformed.
    ValidationFailure,
    /// The persistence backend failed or timed out.
    PersistenceFailure,
}

impl TaskBoardError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::ValidationFailure,
            Self::Repository(RepositoryError::TaskNotFound(_) | RepositoryError::CategoryNotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::Repository(RepositoryError::Persistence(_)) | Self::Timeout(_) => {
                ErrorKind::PersistenceFailure
            }
        }
    }
}
