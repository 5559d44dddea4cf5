//! Task store and reducer.
//!
//! The store is an immutable value; the only way to obtain a new version is
//! to apply a [`TaskAction`] to an existing one.

mod action;
mod reducer;

pub use action::TaskAction;
pub use reducer::TaskStore;
