//! Task status enumeration and its linear progression.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task workflow status.
///
/// The first four variants form a strict linear progression. `Blocked` sits
/// outside it and is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task has been assigned but work has not started.
    Pending,
    /// Assignee is working on the task.
    InProgress,
    /// Work is finished and awaits the assigner's approval.
    Review,
    /// Assigner approved the task.
    Completed,
    /// Task is frozen.
    Blocked,
}

impl TaskStatus {
    /// Every status in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::InProgress,
        Self::Review,
        Self::Completed,
        Self::Blocked,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Review => "REVIEW",
            Self::Completed => "COMPLETED",
            Self::Blocked => "BLOCKED",
        }
    }

    /// Returns the human-readable label shown in listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Completed => "Completed",
            Self::Blocked => "Blocked",
        }
    }

    /// Returns the next status in the linear progression.
    ///
    /// Absorbing statuses have no successor.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::InProgress),
            Self::InProgress => Some(Self::Review),
            Self::Review => Some(Self::Completed),
            Self::Completed | Self::Blocked => None,
        }
    }

    /// Returns `true` when no transition leaves this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.successor().is_none()
    }

    /// Returns `true` when a submitted change from `self` to `to` follows
    /// the workflow.
    ///
    /// Only the immediate successor is reachable, except that any
    /// non-terminal status may be blocked.
    #[must_use]
    pub fn can_move_to(self, to: Self) -> bool {
        self.successor() == Some(to) || (to == Self::Blocked && !self.is_terminal())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "REVIEW" => Ok(Self::Review),
            "COMPLETED" => Ok(Self::Completed),
            "BLOCKED" => Ok(Self::Blocked),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}
