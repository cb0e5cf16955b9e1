//! Deadline classification result.

use serde::{Deserialize, Serialize};

/// Whether a row's deadline has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeadlineVerdict {
    is_overdue: bool,
}

impl DeadlineVerdict {
    /// Verdict for a deadline strictly before today.
    pub const OVERDUE: Self = Self { is_overdue: true };

    /// Verdict for a deadline that is today, in the future, unknown, or not
    /// being classified.
    pub const ON_TIME: Self = Self { is_overdue: false };

    /// Returns `true` when the deadline has passed.
    #[must_use]
    pub const fn is_overdue(self) -> bool {
        self.is_overdue
    }
}

impl From<bool> for DeadlineVerdict {
    fn from(is_overdue: bool) -> Self {
        Self { is_overdue }
    }
}
