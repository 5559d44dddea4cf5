//! Filter and sort inputs held by the list screen.

use super::SortMode;
use crate::task::domain::Priority;

/// Insertion-ordered set of priorities to keep.
///
/// The order in which priorities were selected is the order in which the
/// view groups its results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PriorityFilter(Vec<Priority>);

impl PriorityFilter {
    /// Creates an empty filter, which keeps every task.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds `priority` at the end of the set. Returns `false` when it was
    /// already selected.
    pub fn insert(&mut self, priority: Priority) -> bool {
        if self.contains(priority) {
            return false;
        }
        self.0.push(priority);
        true
    }

    /// Removes `priority` from the set. Returns `false` when it was not
    /// selected.
    pub fn remove(&mut self, priority: Priority) -> bool {
        let before = self.0.len();
        self.0.retain(|selected| *selected != priority);
        self.0.len() != before
    }

    /// Selects `priority` if absent, otherwise deselects it.
    pub fn toggle(&mut self, priority: Priority) {
        if !self.remove(priority) {
            self.0.push(priority);
        }
    }

    /// Returns `true` when `priority` is selected.
    #[must_use]
    pub fn contains(&self, priority: Priority) -> bool {
        self.0.contains(&priority)
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates selected priorities in selection order.
    pub fn iter(&self) -> impl Iterator<Item = Priority> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Priority> for PriorityFilter {
    fn from_iter<I: IntoIterator<Item = Priority>>(iter: I) -> Self {
        let mut filter = Self::new();
        for priority in iter {
            filter.insert(priority);
        }
        filter
    }
}

/// Inputs of the view pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ViewQuery {
    /// Active sort mode.
    pub sort_mode: SortMode,
    /// When `true`, only completed tasks are shown.
    pub status_filter: bool,
    /// Priorities to keep; empty keeps all.
    pub priority_filter: PriorityFilter,
    /// Case-insensitive name substring; empty matches all.
    pub search_text: String,
}

impl ViewQuery {
    /// Creates a query that shows every task in default order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sort mode.
    #[must_use]
    pub const fn with_sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    /// Sets the completed-only filter.
    #[must_use]
    pub const fn with_status_filter(mut self, status_filter: bool) -> Self {
        self.status_filter = status_filter;
        self
    }

    /// Sets the priority filter.
    #[must_use]
    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        self.priority_filter = priorities.into_iter().collect();
        self
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    /// Steps the sort mode forward, holding at the last mode.
    pub fn advance_sort(&mut self) {
        self.sort_mode = self.sort_mode.advance();
    }

    /// Flips the completed-only filter.
    pub const fn toggle_status_filter(&mut self) {
        self.status_filter = !self.status_filter;
    }

    /// Selects or deselects a priority.
    pub fn toggle_priority(&mut self, priority: Priority) {
        self.priority_filter.toggle(priority);
    }

    /// Replaces the search text.
    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.search_text = search_text.into();
    }

    /// Clears every filter and the search text, keeping the sort mode.
    pub fn clear_filters(&mut self) {
        self.status_filter = false;
        self.priority_filter = PriorityFilter::new();
        self.search_text.clear();
    }
}
