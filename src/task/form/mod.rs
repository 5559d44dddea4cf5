//! Validation state machine for the task create/edit form.
//!
//! The form tracks a value and a validity flag for each field of a fixed
//! set and derives aggregate validity from all of them. It never touches
//! the store; a valid form only produces the payload for an action.

mod error;
mod field;
mod rules;
mod state;

pub use error::ValidationError;
pub use field::{FieldInput, FieldValidities, FormField, FormValues};
pub use rules::{FieldValidation, check_field, validate_field};
pub use state::{FormMode, FormState, is_submittable};
