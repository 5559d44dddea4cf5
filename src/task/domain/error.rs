//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or transitioning task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyName,

    /// The task description exceeds the configured character limit.
    #[error("task description has {actual} characters, exceeds limit of {limit}")]
    DescriptionTooLong {
        /// Number of characters supplied.
        actual: usize,
        /// Maximum number of characters allowed.
        limit: usize,
    },

    /// The priority value is not one of the supported levels.
    #[error("unknown task priority: {0}")]
    UnknownPriority(String),

    /// The colour value is not part of the palette.
    #[error("unknown task colour: {0}")]
    UnknownColor(String),

    /// The referenced task does not exist in the store.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The identifier counter has no value left to issue.
    #[error("task identifiers exhausted")]
    IdsExhausted,
}

/// Violation of a single task field rule.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldRuleError {
    /// The name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The description is longer than the configured limit.
    #[error("description has {actual} characters, exceeds limit of {limit}")]
    DescriptionTooLong {
        /// Number of characters supplied.
        actual: usize,
        /// Maximum number of characters allowed.
        limit: usize,
    },
}

impl From<FieldRuleError> for TaskDomainError {
    fn from(error: FieldRuleError) -> Self {
        match error {
            FieldRuleError::EmptyName => Self::EmptyName,
            FieldRuleError::DescriptionTooLong { actual, limit } => {
                Self::DescriptionTooLong { actual, limit }
            }
        }
    }
}
