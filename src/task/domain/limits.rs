//! Configurable limits shared by the store and the task form.

use serde::{Deserialize, Serialize};

/// Default maximum description length in characters.
pub const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 140;

/// Limits applied to task fields.
///
/// The same limits are handed to the store and to every form session so
/// both sides reject exactly the same input.
///
/// # Examples
///
/// ```
/// use taskboard::task::domain::TaskLimits;
///
/// let limits = TaskLimits::default();
/// assert_eq!(limits.max_description_chars, 140);
///
/// let parsed: TaskLimits = serde_json::from_str(r#"{"max_description_chars": 80}"#)
///     .expect("valid limits");
/// assert_eq!(parsed.max_description_chars, 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskLimits {
    /// Maximum description length, counted in Unicode scalar values.
    pub max_description_chars: usize,
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self {
            max_description_chars: DEFAULT_MAX_DESCRIPTION_CHARS,
        }
    }
}

impl TaskLimits {
    /// Creates limits with a custom description length.
    #[must_use]
    pub const fn with_max_description_chars(max_description_chars: usize) -> Self {
        Self {
            max_description_chars,
        }
    }
}
