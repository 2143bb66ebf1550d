//! Board columns and the translation between display and storage status
//! vocabularies.

use crate::task::domain::TaskStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Kanban column, named in display vocabulary (`inprogress`, no separator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardColumn {
    /// Work not started.
    Todo,
    /// Work under way.
    InProgress,
    /// Work finished.
    Done,
}

impl BoardColumn {
    /// Columns in left-to-right board order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Maps any spelling of a status to its column.
    ///
    /// The input is lower-cased and stripped of whitespace, hyphens and
    /// underscores, so `"In Progress"`, `"in-progress"`, `"in_progress"` and
    /// `"inprogress"` all land in [`Self::InProgress`]. Unrecognised values
    /// fall back to [`Self::Todo`].
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let folded: String = raw
            .chars()
            .filter(|ch| !ch.is_whitespace() && !matches!(*ch, '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "inprogress" => Self::InProgress,
            "done" => Self::Done,
            _ => Self::Todo,
        }
    }

    /// Returns the display identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Translates the column back to the storage status
    /// (`inprogress` becomes `in-progress`).
    #[must_use]
    pub const fn to_status(self) -> TaskStatus {
        match self {
            Self::Todo => TaskStatus::Todo,
            Self::InProgress => TaskStatus::InProgress,
            Self::Done => TaskStatus::Done,
        }
    }
}

impl From<TaskStatus> for BoardColumn {
    fn from(status: TaskStatus) -> Self {
        Self::normalize(status.as_str())
    }
}

impl fmt::Display for BoardColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
