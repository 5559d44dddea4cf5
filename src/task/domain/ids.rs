//! Identifier type for the task domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task within a store.
///
/// Identifiers are issued by the store from a monotonically increasing
/// counter, so a larger identifier always denotes a more recently created
/// task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Identifier issued to the first task of an empty store.
    pub const FIRST: Self = Self(1);

    /// Creates a task identifier from a raw counter value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one, or `None` when the
    /// counter is at its maximum.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
