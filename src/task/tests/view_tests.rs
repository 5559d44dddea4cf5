//! Unit tests for the view pipeline.

use crate::task::{
    domain::{NewTaskData, Priority, Task, TaskId, TaskLimits, TaskPatch},
    store::{TaskAction, TaskStore},
    view::{MemoizedView, PriorityFilter, SortMode, ViewQuery, compute_view},
};
use mockable::DefaultClock;
use rstest::rstest;

fn task(id: u64, name: &str, priority: Priority, status: bool) -> Task {
    let limits = TaskLimits::default();
    let created = Task::create(
        TaskId::new(id),
        NewTaskData::new(name).with_priority(priority),
        &limits,
        &DefaultClock,
    )
    .expect("valid task");
    created
        .patched(&TaskPatch::new().with_status(status), &limits, &DefaultClock)
        .expect("valid patch")
}

fn names(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::name).collect()
}

#[rstest]
fn default_sort_shows_most_recent_first() {
    let tasks = [
        task(1, "first", Priority::Low, false),
        task(2, "second", Priority::Low, false),
        task(3, "third", Priority::Low, false),
    ];
    let view = compute_view(&tasks, &ViewQuery::new());
    assert_eq!(names(&view), vec!["third", "second", "first"]);
}

#[rstest]
fn alphabetical_sort_ignores_case() {
    let tasks = [
        task(1, "banana", Priority::Low, false),
        task(2, "Apple", Priority::Low, false),
    ];
    let query = ViewQuery::new().with_sort_mode(SortMode::Alphabetical);
    assert_eq!(names(&compute_view(&tasks, &query)), vec!["Apple", "banana"]);
}

#[rstest]
fn alphabetical_sort_is_stable_for_equal_names() {
    let tasks = [
        task(1, "Same", Priority::Low, false),
        task(2, "same", Priority::High, false),
    ];
    let query = ViewQuery::new().with_sort_mode(SortMode::Alphabetical);
    let ids: Vec<TaskId> = compute_view(&tasks, &query).iter().map(Task::id).collect();
    assert_eq!(ids, vec![TaskId::new(1), TaskId::new(2)]);
}

#[rstest]
fn priority_sort_puts_highest_first() {
    let tasks = [
        task(1, "low", Priority::Low, false),
        task(2, "high", Priority::High, false),
        task(3, "medium", Priority::Medium, false),
    ];
    let query = ViewQuery::new().with_sort_mode(SortMode::Priority);
    assert_eq!(
        names(&compute_view(&tasks, &query)),
        vec!["high", "medium", "low"]
    );
}

#[rstest]
fn priority_sort_keeps_input_order_for_ties() {
    let tasks = [
        task(1, "a", Priority::High, false),
        task(2, "b", Priority::Low, false),
        task(3, "c", Priority::High, false),
    ];
    let query = ViewQuery::new().with_sort_mode(SortMode::Priority);
    assert_eq!(names(&compute_view(&tasks, &query)), vec!["a", "c", "b"]);
}

#[rstest]
fn status_filter_keeps_completed_tasks() {
    let tasks = [
        task(1, "a", Priority::Low, true),
        task(2, "b", Priority::Low, false),
    ];
    let query = ViewQuery::new().with_status_filter(true);
    assert_eq!(names(&compute_view(&tasks, &query)), vec!["a"]);
}

#[rstest]
fn priority_filter_groups_by_selection_order() {
    let tasks = [
        task(1, "low-1", Priority::Low, false),
        task(2, "high-1", Priority::High, false),
        task(3, "medium-1", Priority::Medium, false),
        task(4, "low-2", Priority::Low, false),
        task(5, "high-2", Priority::High, false),
    ];
    let query = ViewQuery::new().with_priorities([Priority::Low, Priority::High]);
    assert_eq!(
        names(&compute_view(&tasks, &query)),
        vec!["low-2", "low-1", "high-2", "high-1"]
    );
}

#[rstest]
fn search_matches_case_insensitive_substring() {
    let tasks = [
        task(1, "Cat", Priority::Low, false),
        task(2, "Dog", Priority::Low, false),
        task(3, "Scar", Priority::Low, false),
    ];
    let query = ViewQuery::new()
        .with_sort_mode(SortMode::Alphabetical)
        .with_search_text("ca");
    assert_eq!(names(&compute_view(&tasks, &query)), vec!["Cat", "Scar"]);
}

#[rstest]
fn stages_compose_in_fixed_order() {
    let tasks = [
        task(1, "Write report", Priority::High, true),
        task(2, "write tests", Priority::Low, true),
        task(3, "Write docs", Priority::High, false),
        task(4, "Review", Priority::High, true),
    ];
    let query = ViewQuery::new()
        .with_sort_mode(SortMode::Alphabetical)
        .with_status_filter(true)
        .with_priorities([Priority::High])
        .with_search_text("WRITE");
    assert_eq!(names(&compute_view(&tasks, &query)), vec!["Write report"]);
}

#[rstest]
fn compute_view_leaves_input_untouched() {
    let tasks = vec![
        task(1, "b", Priority::Low, false),
        task(2, "a", Priority::Low, false),
    ];
    let before = tasks.clone();
    let _view = compute_view(&tasks, &ViewQuery::new().with_sort_mode(SortMode::Alphabetical));
    assert_eq!(tasks, before);
}

#[rstest]
#[case(SortMode::Default, SortMode::Alphabetical)]
#[case(SortMode::Alphabetical, SortMode::Priority)]
#[case(SortMode::Priority, SortMode::Priority)]
fn advancing_sort_mode_holds_at_last(#[case] from: SortMode, #[case] expected: SortMode) {
    assert_eq!(from.advance(), expected);
}

#[rstest]
fn query_advance_sort_never_wraps() {
    let mut query = ViewQuery::new();
    for _ in 0..5 {
        query.advance_sort();
    }
    assert_eq!(query.sort_mode, SortMode::Priority);
    assert_eq!(SortMode::from_index(query.sort_mode.index()), Some(SortMode::Priority));
    assert_eq!(SortMode::from_index(3), None);
}

#[rstest]
fn priority_filter_toggle_keeps_selection_order() {
    let mut filter = PriorityFilter::new();
    filter.toggle(Priority::High);
    filter.toggle(Priority::Low);
    filter.toggle(Priority::High);
    filter.toggle(Priority::High);

    assert_eq!(
        filter.iter().collect::<Vec<_>>(),
        vec![Priority::Low, Priority::High]
    );
    assert!(!filter.insert(Priority::Low));
}

#[rstest]
fn clear_filters_keeps_sort_mode() {
    let mut query = ViewQuery::new()
        .with_sort_mode(SortMode::Priority)
        .with_status_filter(true)
        .with_priorities([Priority::Medium])
        .with_search_text("milk");
    query.clear_filters();

    assert_eq!(query, ViewQuery::new().with_sort_mode(SortMode::Priority));
}

#[rstest]
fn memoized_view_recomputes_only_when_inputs_change() -> eyre::Result<()> {
    let clock = DefaultClock;
    let store = TaskStore::new().apply(TaskAction::create(NewTaskData::new("Cat")), &clock)?;
    let query = ViewQuery::new();
    let mut memo = MemoizedView::new();

    eyre::ensure!(memo.get(&store, &query).len() == 1);
    eyre::ensure!(memo.get(&store, &query).len() == 1);
    eyre::ensure!(memo.computations() == 1);

    let searched = query.clone().with_search_text("dog");
    eyre::ensure!(memo.get(&store, &searched).is_empty());
    eyre::ensure!(memo.computations() == 2);

    let grown = store.apply(TaskAction::create(NewTaskData::new("Dog")), &clock)?;
    eyre::ensure!(memo.get(&grown, &searched).len() == 1);
    eyre::ensure!(memo.computations() == 3);

    memo.invalidate();
    eyre::ensure!(!memo.is_fresh(grown.revision(), &searched));
    let refilled = memo.get(&grown, &searched);
    eyre::ensure!(refilled.len() == 1);
    eyre::ensure!(refilled.first().map(Task::name) == Some("Dog"));
    eyre::ensure!(memo.computations() == 4);
    eyre::ensure!(memo.is_fresh(grown.revision(), &searched));
    Ok(())
}
