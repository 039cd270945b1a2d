//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The category name is empty after trimming.
    #[error("category name must not be empty")]
    EmptyCategoryName,

    /// The category color is empty after trimming.
    #[error("category color must not be empty")]
    EmptyCategoryColor,

    /// The identifier is not a positive integer.
    #[error("invalid identifier '{0}', expected a positive integer")]
    InvalidIdentifier(String),

    /// The due date supplied with new input cannot be parsed.
    #[error(transparent)]
    InvalidDueDate(#[from] DueDateError),
}

/// Error returned while parsing priorities from persistence or user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned when a stored due date is not an ISO 8601 date.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid due date '{0}'")]
pub struct DueDateError(pub String);
