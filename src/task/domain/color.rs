//! Colour tags from the fixed task palette.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour tag attached to a task.
///
/// A task without a colour stores `None`; the palette itself has no
/// "empty" entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskColor {
    /// Red tag.
    Red,
    /// Orange tag.
    Orange,
    /// Yellow tag.
    Yellow,
    /// Green tag.
    Green,
    /// Blue tag.
    Blue,
    /// Purple tag.
    Purple,
}

impl TaskColor {
    /// The full palette in display order.
    pub const PALETTE: [Self; 6] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
    ];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    /// Parses an optional colour, treating blank input as "no colour".
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownColor`] when the value is not blank
    /// and not part of the palette.
    pub fn parse_optional(value: &str) -> Result<Option<Self>, TaskDomainError> {
        if value.trim().is_empty() {
            return Ok(None);
        }
        Self::try_from(value).map(Some)
    }
}

impl TryFrom<&str> for TaskColor {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::PALETTE
            .into_iter()
            .find(|color| color.as_str() == normalized)
            .ok_or_else(|| TaskDomainError::UnknownColor(value.to_owned()))
    }
}

impl fmt::Display for TaskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
