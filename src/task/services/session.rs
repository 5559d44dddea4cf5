//! Session service that owns the current store and serves the list screen.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskLimits},
    form::{FormState, ValidationError},
    ports::{NoFeedback, TaskEvent, TaskFeedback},
    store::{TaskAction, TaskStore},
    view::{MemoizedView, ViewQuery},
};
use mockable::Clock;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for task session operations.
#[derive(Debug, Error)]
pub enum TaskSessionError {
    /// The store rejected the action.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The submitted form is not valid.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The action could not be parsed.
    #[error("malformed action: {0}")]
    MalformedAction(#[from] serde_json::Error),
}

/// Result type for task session operations.
pub type TaskSessionResult<T> = Result<T, TaskSessionError>;

/// Single-session task engine.
///
/// Holds the current store value and replaces it with the reducer's output
/// on every successful dispatch. Transitions take `&mut self`, so actions
/// are applied one at a time in dispatch order.
#[derive(Debug)]
pub struct TaskSession<C, F = NoFeedback>
where
    C: Clock,
    F: TaskFeedback,
{
    store: TaskStore,
    view: MemoizedView,
    clock: C,
    feedback: F,
}

impl<C> TaskSession<C, NoFeedback>
where
    C: Clock,
{
    /// Creates a session with an empty store, default limits, and no
    /// feedback sink.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_feedback(TaskStore::new(), clock, NoFeedback)
    }
}

impl<C, F> TaskSession<C, F>
where
    C: Clock,
    F: TaskFeedback,
{
    /// Creates a session over an existing store.
    #[must_use]
    pub const fn with_feedback(store: TaskStore, clock: C, feedback: F) -> Self {
        Self {
            store,
            view: MemoizedView::new(),
            clock,
            feedback,
        }
    }

    /// Applies an action to the store.
    ///
    /// Returns the event reported to the feedback sink, or `None` when the
    /// action left the store unchanged (deleting an absent task).
    ///
    /// # Errors
    ///
    /// Returns [`TaskSessionError::Domain`] when the reducer rejects the
    /// action; the current store is kept.
    pub fn dispatch(&mut self, action: TaskAction) -> TaskSessionResult<Option<TaskEvent>> {
        let kind = action.kind();
        let outcome = self
            .pending_event(&action)
            .and_then(|event| {
                self.store
                    .apply(action, &self.clock)
                    .map(|next| (event, next))
            });
        let (event, next) =
            outcome.inspect_err(|err| warn!(action = kind, error = %err, "task action rejected"))?;

        if next.revision() == self.store.revision() {
            debug!(action = kind, task_id = %event.task_id(), "task action left store unchanged");
            return Ok(None);
        }

        self.store = next;
        debug!(
            action = kind,
            task_id = %event.task_id(),
            revision = self.store.revision(),
            "task action applied"
        );
        self.feedback.notify(event);
        Ok(Some(event))
    }

    fn pending_event(&self, action: &TaskAction) -> Result<TaskEvent, TaskDomainError> {
        Ok(match action {
            TaskAction::CreateTask { .. } => TaskEvent::Created(
                self.store
                    .next_id()
                    .ok_or(TaskDomainError::IdsExhausted)?,
            ),
            TaskAction::UpdateTask { id, .. } => TaskEvent::Updated(*id),
            TaskAction::DeleteTask { id } => TaskEvent::Deleted(*id),
        })
    }

    /// Parses a JSON action and dispatches it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSessionError::MalformedAction`] when the input is not
    /// a well-formed action, or any error of [`TaskSession::dispatch`].
    pub fn dispatch_json(&mut self, input: &str) -> TaskSessionResult<Option<TaskEvent>> {
        let action = TaskAction::from_json(input)?;
        self.dispatch(action)
    }

    /// Dispatches the action built from a submitted form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSessionError::Validation`] when the form is not
    /// submittable, or any error of [`TaskSession::dispatch`].
    pub fn submit(&mut self, form: &FormState) -> TaskSessionResult<Option<TaskEvent>> {
        let action = form.to_action()?;
        self.dispatch(action)
    }

    /// Opens a blank create form using the store's limits.
    #[must_use]
    pub fn create_form(&self) -> FormState {
        FormState::new(*self.store.limits())
    }

    /// Opens an edit form seeded from the task with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] when the task does not exist.
    pub fn edit_form(&self, id: TaskId) -> TaskSessionResult<FormState> {
        let task = self.store.get(id).ok_or(TaskDomainError::NotFound(id))?;
        Ok(FormState::for_task(task, *self.store.limits()))
    }

    /// Returns the raw task mapping.
    #[must_use]
    pub const fn all_tasks(&self) -> &BTreeMap<TaskId, Task> {
        self.store.tasks()
    }

    /// Returns the visible task list for `query`.
    ///
    /// The result is cached until the store or the query changes.
    pub fn visible_tasks(&mut self, query: &ViewQuery) -> &[Task] {
        self.view.get(&self.store, query)
    }

    /// Returns the current store value.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Returns the limits enforced by the store.
    #[must_use]
    pub const fn limits(&self) -> &TaskLimits {
        self.store.limits()
    }

    /// Returns the memoized view, for inspecting cache behaviour.
    #[must_use]
    pub const fn view(&self) -> &MemoizedView {
        &self.view
    }
}
