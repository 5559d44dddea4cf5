//! Task entity and the payloads used to create and patch it.

use super::{
    Priority, TaskColor, TaskDomainError, TaskId, TaskLimits,
    rules::{check_description, normalize_name},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

/// A single to-do item.
///
/// Deserialization goes through [`TaskRecord`], so a decoded task obeys the
/// same name and description rules as one built by [`Task::create`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    name: String,
    desc: String,
    color: Option<TaskColor>,
    priority: Priority,
    status: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from validated creation data.
    ///
    /// The name is stored trimmed. Missing optional fields take their
    /// defaults: empty description, no colour, [`Priority::Low`], and
    /// incomplete status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyName`] or
    /// [`TaskDomainError::DescriptionTooLong`] when `data` breaks a field
    /// rule.
    pub fn create(
        id: TaskId,
        data: NewTaskData,
        limits: &TaskLimits,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let name = normalize_name(&data.name)?;
        let desc = data.desc.unwrap_or_default();
        check_description(&desc, limits)?;
        let timestamp = clock.utc();

        Ok(Self {
            id,
            name,
            desc,
            color: data.color,
            priority: data.priority.unwrap_or_default(),
            status: false,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Rebuilds a task from a stored record, re-checking its field rules.
    ///
    /// The name is trimmed as on creation; the remaining fields are taken
    /// as recorded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyName`] or
    /// [`TaskDomainError::DescriptionTooLong`] when the record breaks a
    /// field rule under `limits`.
    pub fn from_record(record: TaskRecord, limits: &TaskLimits) -> Result<Self, TaskDomainError> {
        let name = normalize_name(&record.name)?;
        check_description(&record.desc, limits)?;
        Ok(Self {
            id: record.id,
            name,
            desc: record.desc,
            color: record.color,
            priority: record.priority,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    /// Returns a copy of this task with `patch` merged in.
    ///
    /// The identifier and creation timestamp are preserved; `updated_at`
    /// is refreshed from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyName`] or
    /// [`TaskDomainError::DescriptionTooLong`] when a patched field breaks a
    /// field rule. The receiver is left untouched either way.
    pub fn patched(
        &self,
        patch: &TaskPatch,
        limits: &TaskLimits,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name = normalize_name(name)?;
        }
        if let Some(desc) = &patch.desc {
            check_description(desc, limits)?;
            next.desc.clone_from(desc);
        }
        if let Some(color) = patch.color {
            next.color = color;
        }
        if let Some(priority) = patch.priority {
            next.priority = priority;
        }
        if let Some(status) = patch.status {
            next.status = status;
        }
        next.updated_at = clock.utc();
        Ok(next)
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Returns the colour tag, if any.
    #[must_use]
    pub const fn color(&self) -> Option<TaskColor> {
        self.color
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns `true` when the task is completed.
    #[must_use]
    pub const fn status(&self) -> bool {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Field-for-field snapshot of a task, as held outside the store.
///
/// Records are untrusted: turn them into tasks with [`Task::from_record`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskRecord {
    /// Recorded identifier.
    pub id: TaskId,
    /// Recorded name.
    pub name: String,
    /// Recorded description.
    #[serde(default)]
    pub desc: String,
    /// Recorded colour tag.
    #[serde(default)]
    pub color: Option<TaskColor>,
    /// Recorded priority.
    #[serde(default)]
    pub priority: Priority,
    /// Recorded completion status.
    #[serde(default)]
    pub status: bool,
    /// Recorded creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Recorded latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            name: task.name,
            desc: task.desc,
            color: task.color,
            priority: task.priority,
            status: task.status,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskDomainError;

    /// Checks the record against [`TaskLimits::default`].
    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        Self::from_record(record, &TaskLimits::default())
    }
}

/// Payload of a create action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskData {
    /// Required task name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Optional colour tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<TaskColor>,
    /// Optional priority, defaulting to [`Priority::Low`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl NewTaskData {
    /// Creates creation data with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Sets the colour tag.
    #[must_use]
    pub const fn with_color(mut self, color: TaskColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Typed partial update for an existing task.
///
/// Absent fields leave the stored value unchanged. `color` is doubly
/// optional so a patch can clear the tag: `Some(None)` removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// Replacement name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Replacement colour; `Some(None)` clears it.
    #[serde(
        default,
        deserialize_with = "present_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Option<TaskColor>>,
    /// Replacement priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Replacement completion status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Replaces or clears the colour tag.
    #[must_use]
    pub const fn with_color(mut self, color: Option<TaskColor>) -> Self {
        self.color = Some(color);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the completion status.
    #[must_use]
    pub const fn with_status(mut self, status: bool) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns `true` when the patch changes no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.desc.is_none()
            && self.color.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}

impl From<NewTaskData> for TaskPatch {
    /// Converts a full form payload into a patch that overwrites every
    /// editable field except status.
    fn from(data: NewTaskData) -> Self {
        Self {
            name: Some(data.name),
            desc: Some(data.desc.unwrap_or_default()),
            color: Some(data.color),
            priority: Some(data.priority.unwrap_or_default()),
            status: None,
        }
    }
}

/// Deserializes a present key as `Some`, so `null` becomes `Some(None)`.
fn present_field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
