//! Feedback port notified after successful store transitions.

use crate::task::domain::TaskId;
use std::fmt;

/// A store transition that changed the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskEvent {
    /// A task was created with this identifier.
    Created(TaskId),
    /// The task with this identifier was updated.
    Updated(TaskId),
    /// The task with this identifier was deleted.
    Deleted(TaskId),
}

impl TaskEvent {
    /// Returns the task the event refers to.
    #[must_use]
    pub const fn task_id(self) -> TaskId {
        match self {
            Self::Created(id) | Self::Updated(id) | Self::Deleted(id) => id,
        }
    }
}

impl fmt::Display for TaskEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created(id) => write!(f, "task {id} created"),
            Self::Updated(id) => write!(f, "task {id} updated"),
            Self::Deleted(id) => write!(f, "task {id} deleted"),
        }
    }
}

/// Receiver of user-facing feedback such as confirmation toasts or
/// vibration.
///
/// Called once per transition that changed the store, after the new store
/// is in place. Failed transitions and no-op deletes are not reported.
pub trait TaskFeedback {
    /// Handles a completed transition.
    fn notify(&self, event: TaskEvent);
}

/// Feedback sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl TaskFeedback for NoFeedback {
    fn notify(&self, _event: TaskEvent) {}
}
