//! Application services for the task engine.

mod session;

pub use session::{TaskSession, TaskSessionError, TaskSessionResult};
