//! Form state machine for the create/edit screen.

use super::{
    FieldInput, FieldValidities, FormField, FormValues, ValidationError,
    rules::{check_field, validate_field},
};
use crate::task::{
    domain::{NewTaskData, Task, TaskId, TaskLimits},
    store::TaskAction,
};
use tracing::debug;

/// Whether the form creates a new task or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Creating a new task.
    Create,
    /// Editing the task with this identifier.
    Edit(TaskId),
}

/// State of one create/edit session.
///
/// Every change recomputes the changed field's validity and then the
/// aggregate over all fields, so repairing one field can make the whole
/// form valid again.
///
/// # Examples
///
/// ```
/// use taskboard::task::domain::TaskLimits;
/// use taskboard::task::form::{FieldInput, FormState};
///
/// let form = FormState::new(TaskLimits::default());
/// assert!(!form.is_submittable());
///
/// let named = form.on_field_change(FieldInput::Name("Buy milk".to_owned()));
/// assert!(named.is_submittable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    mode: FormMode,
    limits: TaskLimits,
    values: FormValues,
    validities: FieldValidities,
    form_is_valid: bool,
}

impl FormState {
    /// Creates a blank form for a new task.
    #[must_use]
    pub fn new(limits: TaskLimits) -> Self {
        Self::seeded(FormMode::Create, FormValues::default(), limits)
    }

    /// Creates a form pre-filled from an existing task.
    #[must_use]
    pub fn for_task(task: &Task, limits: TaskLimits) -> Self {
        Self::seeded(FormMode::Edit(task.id()), FormValues::from_task(task), limits)
    }

    fn seeded(mode: FormMode, values: FormValues, limits: TaskLimits) -> Self {
        let mut validities = FieldValidities {
            name: true,
            desc: true,
            color: true,
            priority: true,
        };
        for field in FormField::ALL {
            validities.set(field, check_field(&values.get(field), &limits).is_ok());
        }
        Self {
            mode,
            limits,
            values,
            validities,
            form_is_valid: validities.all(),
        }
    }

    /// Applies one field edit and returns the updated state.
    #[must_use]
    pub fn on_field_change(mut self, input: FieldInput) -> Self {
        let outcome = validate_field(input, &self.limits);
        self.validities.set(outcome.field, outcome.is_valid);
        self.values.set(outcome.value);

        let was_valid = self.form_is_valid;
        self.form_is_valid = self.validities.all();
        if was_valid != self.form_is_valid {
            debug!(
                field = %outcome.field,
                form_is_valid = self.form_is_valid,
                "task form validity changed"
            );
        }
        self
    }

    /// Returns whether the form may be submitted.
    #[must_use]
    pub const fn is_submittable(&self) -> bool {
        self.form_is_valid
    }

    /// Returns the session mode.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Returns the current field values.
    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    /// Returns the current per-field validity flags.
    #[must_use]
    pub const fn validities(&self) -> &FieldValidities {
        &self.validities
    }

    /// Returns the validity flag of a single field.
    #[must_use]
    pub const fn is_field_valid(&self, field: FormField) -> bool {
        self.validities.get(field)
    }

    /// Returns the rule violations of every invalid field, in field order.
    #[must_use]
    pub fn errors(&self) -> Vec<ValidationError> {
        FormField::ALL
            .into_iter()
            .filter_map(|field| check_field(&self.values.get(field), &self.limits).err())
            .collect()
    }

    /// Returns the rule violation for `field`, if any.
    #[must_use]
    pub fn error_for(&self, field: FormField) -> Option<ValidationError> {
        check_field(&self.values.get(field), &self.limits).err()
    }

    /// Builds the task payload from the current values.
    ///
    /// The name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns the combined [`ValidationError`] of every invalid field when
    /// the form is not submittable.
    pub fn payload(&self) -> Result<NewTaskData, ValidationError> {
        if !self.form_is_valid {
            return Err(ValidationError::multiple(self.errors()));
        }
        Ok(NewTaskData {
            name: self.values.name.trim().to_owned(),
            desc: Some(self.values.desc.clone()),
            color: self.values.color,
            priority: Some(self.values.priority),
        })
    }

    /// Builds a create action from the current values.
    ///
    /// # Errors
    ///
    /// Returns the combined [`ValidationError`] when the form is invalid.
    pub fn to_create_action(&self) -> Result<TaskAction, ValidationError> {
        self.payload().map(TaskAction::create)
    }

    /// Builds an update action for `id` from the current values.
    ///
    /// # Errors
    ///
    /// Returns the combined [`ValidationError`] when the form is invalid.
    pub fn to_update_action(&self, id: TaskId) -> Result<TaskAction, ValidationError> {
        self.payload().map(|data| TaskAction::update(id, data.into()))
    }

    /// Builds the action matching the session mode.
    ///
    /// # Errors
    ///
    /// Returns the combined [`ValidationError`] when the form is invalid.
    pub fn to_action(&self) -> Result<TaskAction, ValidationError> {
        match self.mode {
            FormMode::Create => self.to_create_action(),
            FormMode::Edit(id) => self.to_update_action(id),
        }
    }
}

/// Returns whether `state` may be submitted.
#[must_use]
pub const fn is_submittable(state: &FormState) -> bool {
    state.is_submittable()
}
