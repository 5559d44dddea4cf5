//! The fixed set of task form fields and their values.

use crate::task::domain::{Priority, Task, TaskColor, TaskDomainError};
use std::fmt;

/// A field of the create/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// Task name.
    Name,
    /// Task description.
    Desc,
    /// Colour tag.
    Color,
    /// Priority level.
    Priority,
}

impl FormField {
    /// Every tracked field.
    pub const ALL: [Self; 4] = [Self::Name, Self::Desc, Self::Color, Self::Priority];

    /// Returns the field key used by the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Desc => "desc",
            Self::Color => "color",
            Self::Priority => "priority",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A new value for one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Text typed into the name input.
    Name(String),
    /// Text typed into the description input.
    Desc(String),
    /// Selected colour, or `None` for no colour.
    Color(Option<TaskColor>),
    /// Selected priority.
    Priority(Priority),
}

impl FieldInput {
    /// Builds an input from a field key and the raw widget value.
    ///
    /// Text fields accept any string. Colour accepts a palette name or a
    /// blank string; priority accepts a level name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownColor`] or
    /// [`TaskDomainError::UnknownPriority`] when a selector value is not
    /// one of the offered options.
    pub fn parse(field: FormField, raw: &str) -> Result<Self, TaskDomainError> {
        Ok(match field {
            FormField::Name => Self::Name(raw.to_owned()),
            FormField::Desc => Self::Desc(raw.to_owned()),
            FormField::Color => Self::Color(TaskColor::parse_optional(raw)?),
            FormField::Priority => Self::Priority(Priority::try_from(raw)?),
        })
    }

    /// Returns the field this input targets.
    #[must_use]
    pub const fn field(&self) -> FormField {
        match self {
            Self::Name(_) => FormField::Name,
            Self::Desc(_) => FormField::Desc,
            Self::Color(_) => FormField::Color,
            Self::Priority(_) => FormField::Priority,
        }
    }
}

/// Current value of every form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    /// Name as typed, untrimmed.
    pub name: String,
    /// Description as typed.
    pub desc: String,
    /// Selected colour.
    pub color: Option<TaskColor>,
    /// Selected priority.
    pub priority: Priority,
}

impl FormValues {
    /// Seeds values from an existing task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            name: task.name().to_owned(),
            desc: task.desc().to_owned(),
            color: task.color(),
            priority: task.priority(),
        }
    }

    /// Stores `input` in its field.
    pub fn set(&mut self, input: FieldInput) {
        match input {
            FieldInput::Name(name) => self.name = name,
            FieldInput::Desc(desc) => self.desc = desc,
            FieldInput::Color(color) => self.color = color,
            FieldInput::Priority(priority) => self.priority = priority,
        }
    }

    /// Returns the stored value of `field` as an input.
    #[must_use]
    pub fn get(&self, field: FormField) -> FieldInput {
        match field {
            FormField::Name => FieldInput::Name(self.name.clone()),
            FormField::Desc => FieldInput::Desc(self.desc.clone()),
            FormField::Color => FieldInput::Color(self.color),
            FormField::Priority => FieldInput::Priority(self.priority),
        }
    }
}

/// Validity flag of every form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidities {
    /// Name validity.
    pub name: bool,
    /// Description validity.
    pub desc: bool,
    /// Colour validity.
    pub color: bool,
    /// Priority validity.
    pub priority: bool,
}

impl FieldValidities {
    /// Returns the flag for `field`.
    #[must_use]
    pub const fn get(&self, field: FormField) -> bool {
        match field {
            FormField::Name => self.name,
            FormField::Desc => self.desc,
            FormField::Color => self.color,
            FormField::Priority => self.priority,
        }
    }

    /// Sets the flag for `field`.
    pub const fn set(&mut self, field: FormField, is_valid: bool) {
        match field {
            FormField::Name => self.name = is_valid,
            FormField::Desc => self.desc = is_valid,
            FormField::Color => self.color = is_valid,
            FormField::Priority => self.priority = is_valid,
        }
    }

    /// Returns `true` when every tracked field is valid.
    #[must_use]
    pub fn all(&self) -> bool {
        FormField::ALL.into_iter().all(|field| self.get(field))
    }
}
