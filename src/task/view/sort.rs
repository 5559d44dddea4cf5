//! Sort modes for the task list.

use std::fmt;

/// Ordering applied to the task list before filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Most recently created first.
    #[default]
    Default,
    /// Ascending by name, ignoring case.
    Alphabetical,
    /// Highest priority first.
    Priority,
}

impl SortMode {
    /// Modes in the order the sort control steps through them.
    pub const ALL: [Self; 3] = [Self::Default, Self::Alphabetical, Self::Priority];

    /// Returns the position of this mode in [`SortMode::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Default => 0,
            Self::Alphabetical => 1,
            Self::Priority => 2,
        }
    }

    /// Returns the mode at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the next mode, holding at the last one.
    ///
    /// ```
    /// use taskboard::task::view::SortMode;
    ///
    /// assert_eq!(SortMode::Default.advance(), SortMode::Alphabetical);
    /// assert_eq!(SortMode::Priority.advance(), SortMode::Priority);
    /// ```
    #[must_use]
    pub fn advance(self) -> Self {
        Self::from_index(self.index().saturating_add(1)).unwrap_or(self)
    }

    /// Returns the label shown on the sort control.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Alphabetical => "alphabetical",
            Self::Priority => "priority",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
