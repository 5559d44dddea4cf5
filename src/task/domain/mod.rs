//! Domain model for the personal task list.
//!
//! The task domain holds the entity shape, its field rules, and the
//! payloads used to create and patch tasks. Nothing here owns a
//! collection; the store and view layers build on these values.

mod color;
mod error;
mod ids;
mod limits;
mod priority;
pub mod rules;
mod task;

pub use color::TaskColor;
pub use error::{FieldRuleError, TaskDomainError};
pub use ids::TaskId;
pub use limits::{DEFAULT_MAX_DESCRIPTION_CHARS, TaskLimits};
pub use priority::Priority;
pub use task::{NewTaskData, Task, TaskPatch, TaskRecord};
