//! Shared world state for task board BDD scenarios.

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    form::FormState,
    ports::TaskEvent,
    services::{TaskSession, TaskSessionResult},
    view::ViewQuery,
};

/// Session type used by the BDD world.
pub type TestSession = TaskSession<DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub session: TestSession,
    pub query: ViewQuery,
    pub form: Option<FormState>,
    pub last_result: Option<TaskSessionResult<Option<TaskEvent>>>,
}

impl BoardWorld {
    /// Creates a world with an empty board and a default query.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: TaskSession::new(DefaultClock),
            query: ViewQuery::new(),
            form: None,
            last_result: None,
        }
    }

    /// Returns the names of the visible tasks for the current query.
    pub fn visible_names(&mut self) -> Vec<String> {
        self.session
            .visible_tasks(&self.query)
            .iter()
            .map(|task| task.name().to_owned())
            .collect()
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Splits a comma-separated step argument into trimmed names.
pub fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
