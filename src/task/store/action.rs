//! Action contract dispatched by the presentation layer.

use crate::task::domain::{NewTaskData, TaskId, TaskPatch};
use serde::{Deserialize, Serialize};

/// A state transition request for the task store.
///
/// Actions serialize as JSON objects tagged by `type`, for example
/// `{"type":"DELETE_TASK","id":3}`.
///
/// # Examples
///
/// ```
/// use taskboard::task::{domain::TaskId, store::TaskAction};
///
/// let action = TaskAction::from_json(r#"{"type":"DELETE_TASK","id":3}"#)
///     .expect("well-formed action");
/// assert_eq!(action, TaskAction::delete(TaskId::new(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskAction {
    /// Adds a new task.
    CreateTask {
        /// Creation payload.
        data: NewTaskData,
    },
    /// Merges a partial update into an existing task.
    UpdateTask {
        /// Target task.
        id: TaskId,
        /// Fields to replace.
        data: TaskPatch,
    },
    /// Removes a task if present.
    DeleteTask {
        /// Target task.
        id: TaskId,
    },
}

impl TaskAction {
    /// Builds a create action.
    #[must_use]
    pub const fn create(data: NewTaskData) -> Self {
        Self::CreateTask { data }
    }

    /// Builds an update action.
    #[must_use]
    pub const fn update(id: TaskId, data: TaskPatch) -> Self {
        Self::UpdateTask { id, data }
    }

    /// Builds a delete action.
    #[must_use]
    pub const fn delete(id: TaskId) -> Self {
        Self::DeleteTask { id }
    }

    /// Parses an action from its JSON wire shape.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the input is not a well-formed
    /// action, such as an unknown `type` or a missing required key.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Returns the wire name of the action type.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CreateTask { .. } => "CREATE_TASK",
            Self::UpdateTask { .. } => "UPDATE_TASK",
            Self::DeleteTask { .. } => "DELETE_TASK",
        }
    }
}
