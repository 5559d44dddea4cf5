//! Immutable task store and its transition function.

use super::TaskAction;
use crate::task::domain::{
    NewTaskData, Task, TaskDomainError, TaskId, TaskLimits, TaskPatch, TaskRecord,
};
use mockable::Clock;
use std::collections::BTreeMap;

/// Keyed collection of tasks.
///
/// A store is a value: [`TaskStore::apply`] never mutates the receiver and
/// returns a new store instead. Iteration follows ascending identifier
/// order, which is creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: BTreeMap<TaskId, Task>,
    next_id: Option<TaskId>,
    revision: u64,
    limits: TaskLimits,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::with_limits(TaskLimits::default())
    }
}

impl TaskStore {
    /// Creates an empty store with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store enforcing the given limits.
    #[must_use]
    pub const fn with_limits(limits: TaskLimits) -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: Some(TaskId::FIRST),
            revision: 0,
            limits,
        }
    }

    /// Creates a store seeded with existing tasks.
    ///
    /// Every task is re-checked against `limits`, so a seed built under
    /// looser limits cannot slip past them. Later tasks replace earlier ones
    /// with the same identifier. The next issued identifier follows the
    /// largest seeded one.
    ///
    /// # Errors
    ///
    /// Returns the first field rule error found in `seed`.
    pub fn from_tasks(
        seed: impl IntoIterator<Item = Task>,
        limits: TaskLimits,
    ) -> Result<Self, TaskDomainError> {
        let tasks = seed
            .into_iter()
            .map(|task| {
                Task::from_record(TaskRecord::from(task), &limits)
                    .map(|checked| (checked.id(), checked))
            })
            .collect::<Result<BTreeMap<TaskId, Task>, TaskDomainError>>()?;
        let next_id = match tasks.last_key_value() {
            Some((id, _)) => id.next(),
            None => Some(TaskId::FIRST),
        };
        Ok(Self {
            tasks,
            next_id,
            revision: 0,
            limits,
        })
    }

    /// Returns the raw task mapping.
    #[must_use]
    pub const fn tasks(&self) -> &BTreeMap<TaskId, Task> {
        &self.tasks
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Returns `true` when a task with `id` exists.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the identifier the next create will assign, or `None` once
    /// the identifier space is used up.
    #[must_use]
    pub const fn next_id(&self) -> Option<TaskId> {
        self.next_id
    }

    /// Returns the number of state-changing transitions applied so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the limits enforced on task fields.
    #[must_use]
    pub const fn limits(&self) -> &TaskLimits {
        &self.limits
    }

    /// Applies an action and returns the resulting store.
    ///
    /// Deleting an absent task returns a store equal to the receiver.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] when an update targets an
    /// absent task, [`TaskDomainError::IdsExhausted`] when a create finds no
    /// identifier left to assign, or a field rule error when the payload is
    /// invalid. On error no part of the action is applied.
    pub fn apply(&self, action: TaskAction, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        match action {
            TaskAction::CreateTask { data } => self.create(data, clock),
            TaskAction::UpdateTask { id, data } => self.update(id, &data, clock),
            TaskAction::DeleteTask { id } => Ok(self.delete(id)),
        }
    }

    fn create(&self, data: NewTaskData, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let id = self.next_id.ok_or(TaskDomainError::IdsExhausted)?;
        let task = Task::create(id, data, &self.limits, clock)?;
        let mut next = self.clone();
        next.tasks.insert(id, task);
        next.next_id = id.next();
        next.revision = self.revision.saturating_add(1);
        Ok(next)
    }

    fn update(
        &self,
        id: TaskId,
        patch: &TaskPatch,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let current = self.tasks.get(&id).ok_or(TaskDomainError::NotFound(id))?;
        let updated = current.patched(patch, &self.limits, clock)?;
        let mut next = self.clone();
        next.tasks.insert(id, updated);
        next.revision = self.revision.saturating_add(1);
        Ok(next)
    }

    fn delete(&self, id: TaskId) -> Self {
        if !self.tasks.contains_key(&id) {
            return self.clone();
        }
        let mut next = self.clone();
        next.tasks.remove(&id);
        next.revision = self.revision.saturating_add(1);
        next
    }
}
