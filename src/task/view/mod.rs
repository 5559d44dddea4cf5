//! Derived view of the task list.
//!
//! The pipeline turns the raw store into the ordered list the user sees.
//! It is pure, so recomputing on every input change is always correct;
//! [`MemoizedView`] only avoids redundant work.

mod memo;
mod pipeline;
mod query;
mod sort;

pub use memo::MemoizedView;
pub use pipeline::{compute_view, sort_tasks};
pub use query::{PriorityFilter, ViewQuery};
pub use sort::SortMode;
