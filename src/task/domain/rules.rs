//! Field rules shared by the store and the task form.

use super::{FieldRuleError, TaskLimits};

/// Returns the trimmed task name.
///
/// # Errors
///
/// Returns [`FieldRuleError::EmptyName`] when the name is empty after
/// trimming.
pub fn normalize_name(raw: &str) -> Result<String, FieldRuleError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldRuleError::EmptyName);
    }
    Ok(trimmed.to_owned())
}

/// Checks a description against the configured character limit.
///
/// # Errors
///
/// Returns [`FieldRuleError::DescriptionTooLong`] when the description has
/// more characters than `limits.max_description_chars`.
pub fn check_description(desc: &str, limits: &TaskLimits) -> Result<(), FieldRuleError> {
    let actual = desc.chars().count();
    if actual > limits.max_description_chars {
        return Err(FieldRuleError::DescriptionTooLong {
            actual,
            limit: limits.max_description_chars,
        });
    }
    Ok(())
}
