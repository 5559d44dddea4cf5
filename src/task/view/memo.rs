//! Cached view keyed on store revision and query.

use super::{ViewQuery, compute_view};
use crate::task::{domain::Task, store::TaskStore};

/// Last computed view, reused while neither input changes.
///
/// The cache is keyed on [`TaskStore::revision`], so one memo must follow a
/// single store lineage.
#[derive(Debug, Default)]
pub struct MemoizedView {
    cached: Option<CachedView>,
    computations: u64,
}

#[derive(Debug)]
struct CachedView {
    revision: u64,
    query: ViewQuery,
    tasks: Vec<Task>,
}

impl MemoizedView {
    /// Creates an empty memo.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cached: None,
            computations: 0,
        }
    }

    /// Returns the view for `store` and `query`, recomputing only when
    /// either differs from the cached inputs.
    pub fn get(&mut self, store: &TaskStore, query: &ViewQuery) -> &[Task] {
        if !self.is_fresh(store.revision(), query) {
            self.cached = None;
        }
        let computations = &mut self.computations;
        let cached = self.cached.get_or_insert_with(|| {
            *computations = computations.saturating_add(1);
            CachedView {
                revision: store.revision(),
                query: query.clone(),
                tasks: compute_view(store.tasks().values(), query),
            }
        });
        &cached.tasks
    }

    /// Returns `true` when the cached view matches the given inputs.
    #[must_use]
    pub fn is_fresh(&self, revision: u64, query: &ViewQuery) -> bool {
        self.cached
            .as_ref()
            .is_some_and(|cached| cached.revision == revision && cached.query == *query)
    }

    /// Drops the cached view.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Returns how many times the view has been computed.
    #[must_use]
    pub const fn computations(&self) -> u64 {
        self.computations
    }
}
