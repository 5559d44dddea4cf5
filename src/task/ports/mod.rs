//! Port contracts for the task engine.
//!
//! Ports define the interfaces the presentation layer implements.

pub mod feedback;

pub use feedback::{NoFeedback, TaskEvent, TaskFeedback};
