//! Taskboard: client-side state engine for a personal task list.
//!
//! This crate holds the logic behind a to-do client: applying create,
//! update, and delete actions to an immutable task store, validating the
//! create/edit form field by field, and deriving the sorted, filtered, and
//! searched list that the presentation layer renders.
//!
//! # Architecture
//!
//! The engine follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task values and field rules
//! - **Ports**: Traits the presentation layer implements
//! - **Services**: Session orchestration over the pure core
//!
//! Everything runs synchronously on the caller's thread. Persistence,
//! sync, and network I/O are outside the engine.
//!
//! # Modules
//!
//! - [`task`]: Task store, form state machine, and view pipeline

pub mod task;
