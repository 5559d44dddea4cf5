//! Named validation rule for each form field.

use super::{FieldInput, FormField, ValidationError};
use crate::task::domain::{
    TaskLimits,
    rules::{check_description, normalize_name},
};

/// Outcome of validating one field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    /// Field that was validated.
    pub field: FormField,
    /// Whether the value passes the field's rule.
    pub is_valid: bool,
    /// Value to store in the form. Text is kept as typed so editing is not
    /// disturbed; the name is trimmed only when the payload is built.
    pub value: FieldInput,
    /// Rule violation, when `is_valid` is `false`.
    pub error: Option<ValidationError>,
}

/// Validates a single field value.
///
/// `name` fails when empty after trimming and `desc` fails when longer than
/// `limits.max_description_chars`. `color` and `priority` always pass.
///
/// # Examples
///
/// ```
/// use taskboard::task::domain::TaskLimits;
/// use taskboard::task::form::{FieldInput, validate_field};
///
/// let outcome = validate_field(FieldInput::Name("   ".to_owned()), &TaskLimits::default());
/// assert!(!outcome.is_valid);
/// ```
#[must_use]
pub fn validate_field(input: FieldInput, limits: &TaskLimits) -> FieldValidation {
    let error = check_field(&input, limits).err();
    FieldValidation {
        field: input.field(),
        is_valid: error.is_none(),
        value: input,
        error,
    }
}

/// Applies the rule for `input`'s field.
///
/// # Errors
///
/// Returns the field's [`ValidationError`] when the value breaks its rule.
pub fn check_field(input: &FieldInput, limits: &TaskLimits) -> Result<(), ValidationError> {
    match input {
        FieldInput::Name(name) => validate_name(name),
        FieldInput::Desc(desc) => validate_desc(desc, limits),
        FieldInput::Color(_) | FieldInput::Priority(_) => Ok(()),
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    normalize_name(name).map(drop).map_err(ValidationError::from)
}

fn validate_desc(desc: &str, limits: &TaskLimits) -> Result<(), ValidationError> {
    check_description(desc, limits).map_err(ValidationError::from)
}
