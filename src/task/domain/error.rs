//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title is required")]
    EmptyTitle,

    /// The task title exceeds the permitted length.
    #[error("task title must not exceed {max} characters (got {length})")]
    TitleTooLong {
        /// Length of the rejected title, in characters.
        length: usize,
        /// Maximum permitted length, in characters.
        max: usize,
    },

    /// The task description exceeds the permitted length.
    #[error("task description must not exceed {max} characters (got {length})")]
    DescriptionTooLong {
        /// Length of the rejected description, in characters.
        length: usize,
        /// Maximum permitted length, in characters.
        max: usize,
    },
}

/// Error returned while parsing a task identifier from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task identifier: {0}")]
pub struct ParseTaskIdError(pub String);
