//! Derived task list: sort, status filter, priority filter, search.

use super::{PriorityFilter, SortMode, ViewQuery};
use crate::task::domain::Task;
use std::cmp::Reverse;

/// Computes the ordered list of visible tasks.
///
/// Stages run in a fixed order: sort, status filter, priority filter, text
/// search. The input is not modified and ties in every sort keep the input
/// order.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use taskboard::task::domain::NewTaskData;
/// use taskboard::task::store::{TaskAction, TaskStore};
/// use taskboard::task::view::{ViewQuery, compute_view};
///
/// let clock = DefaultClock;
/// let store = TaskStore::new()
///     .apply(TaskAction::create(NewTaskData::new("Cat")), &clock)
///     .and_then(|s| s.apply(TaskAction::create(NewTaskData::new("Dog")), &clock))
///     .expect("valid tasks");
///
/// let visible = compute_view(store.tasks().values(), &ViewQuery::new().with_search_text("CA"));
/// assert_eq!(visible.len(), 1);
/// ```
#[must_use]
pub fn compute_view<'a>(tasks: impl IntoIterator<Item = &'a Task>, query: &ViewQuery) -> Vec<Task> {
    let mut ordered: Vec<&Task> = tasks.into_iter().collect();
    sort_tasks(&mut ordered, query.sort_mode);
    let completed = filter_status(ordered, query.status_filter);
    let grouped = filter_priorities(completed, &query.priority_filter);
    search_names(grouped, &query.search_text)
        .into_iter()
        .cloned()
        .collect()
}

/// Sorts tasks in place with the comparator of `mode`.
pub fn sort_tasks(tasks: &mut [&Task], mode: SortMode) {
    match mode {
        SortMode::Default => tasks.sort_by_key(|task| Reverse(task.id())),
        SortMode::Alphabetical => tasks.sort_by_cached_key(|task| task.name().to_lowercase()),
        SortMode::Priority => tasks.sort_by_key(|task| Reverse(task.priority().rank())),
    }
}

fn filter_status(tasks: Vec<&Task>, only_completed: bool) -> Vec<&Task> {
    if !only_completed {
        return tasks;
    }
    tasks.into_iter().filter(|task| task.status()).collect()
}

fn filter_priorities<'a>(tasks: Vec<&'a Task>, filter: &PriorityFilter) -> Vec<&'a Task> {
    if filter.is_empty() {
        return tasks;
    }
    let candidates = &tasks;
    filter
        .iter()
        .flat_map(move |priority| {
            candidates
                .iter()
                .copied()
                .filter(move |task| task.priority() == priority)
        })
        .collect()
}

fn search_names<'a>(tasks: Vec<&'a Task>, search_text: &str) -> Vec<&'a Task> {
    if search_text.is_empty() {
        return tasks;
    }
    let needle = search_text.to_lowercase();
    tasks
        .into_iter()
        .filter(|task| task.name().to_lowercase().contains(&needle))
        .collect()
}
