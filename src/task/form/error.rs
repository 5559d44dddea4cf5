//! Per-field validation errors for the task form.

use super::FormField;
use crate::task::domain::FieldRuleError;
use thiserror::Error;

/// A task form field that fails its rule.
///
/// These errors are surfaced next to the offending input; they never abort
/// the editing session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is empty after trimming.
    #[error("name is required")]
    EmptyName,

    /// The description is longer than the configured limit.
    #[error("description has {actual} characters, maximum is {limit}")]
    DescriptionTooLong {
        /// Number of characters entered.
        actual: usize,
        /// Maximum number of characters allowed.
        limit: usize,
    },

    /// Several fields failed at once.
    #[error("multiple validation errors: {0:?}")]
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Combines errors, unwrapping a single error and flattening nested
    /// `Multiple` values.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        let mut flat = Vec::with_capacity(errors.len());
        for error in errors {
            match error {
                Self::Multiple(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        if flat.len() == 1 {
            if let Some(single) = flat.pop() {
                return single;
            }
        }
        Self::Multiple(flat)
    }

    /// Returns the field this error belongs to, if it is a single-field
    /// error.
    #[must_use]
    pub const fn field(&self) -> Option<FormField> {
        match self {
            Self::EmptyName => Some(FormField::Name),
            Self::DescriptionTooLong { .. } => Some(FormField::Desc),
            Self::Multiple(_) => None,
        }
    }
}

impl From<FieldRuleError> for ValidationError {
    fn from(error: FieldRuleError) -> Self {
        match error {
            FieldRuleError::EmptyName => Self::EmptyName,
            FieldRuleError::DescriptionTooLong { actual, limit } => {
                Self::DescriptionTooLong { actual, limit }
            }
        }
    }
}
