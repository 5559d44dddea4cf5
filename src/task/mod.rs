//! Client-side task state engine.
//!
//! The engine turns user intents into new task lists and derives the list
//! the user sees. It is organized as:
//!
//! - Entity types and field rules in [`domain`]
//! - The immutable store and its reducer in [`store`]
//! - The create/edit form state machine in [`form`]
//! - The sort/filter/search pipeline in [`view`]
//! - Presentation-facing contracts in [`ports`]
//! - Session orchestration in [`services`]

pub mod domain;
pub mod form;
pub mod ports;
pub mod services;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;
