//! Detection of deployments still running the pre-`BLOCKED` status table.

use super::TaskStatus;
use serde::{Deserialize, Serialize};

/// Status table a listing's select control was rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusSchema {
    /// The control offers `BLOCKED`.
    Current,
    /// The control predates `BLOCKED` and needs migrating.
    Legacy,
}

impl StatusSchema {
    /// Classifies the option values offered by a status control.
    ///
    /// Returns `None` when there are no options to inspect.
    #[must_use]
    pub fn detect<I, S>(option_values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen_any = false;
        for value in option_values {
            seen_any = true;
            if TaskStatus::try_from(value.as_ref()) == Ok(TaskStatus::Blocked) {
                return Some(Self::Current);
            }
        }
        seen_any.then_some(Self::Legacy)
    }

    /// Returns `true` for the legacy table.
    #[must_use]
    pub const fn needs_migration(self) -> bool {
        matches!(self, Self::Legacy)
    }
}
