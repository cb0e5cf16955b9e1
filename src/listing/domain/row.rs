//! Raw facts extracted from one listing row.

use crate::workflow::domain::UserIdentity;
use serde::{Deserialize, Serialize};

/// One task row as rendered by the listing.
///
/// `status` is `None` when the row has no status control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    status: Option<String>,
    assignee: UserIdentity,
    assigner: UserIdentity,
    deadline_text: String,
}

impl TaskRow {
    /// Creates a row without a status control or deadline.
    #[must_use]
    pub fn new(assignee: impl Into<UserIdentity>, assigner: impl Into<UserIdentity>) -> Self {
        Self {
            status: None,
            assignee: assignee.into(),
            assigner: assigner.into(),
            deadline_text: String::new(),
        }
    }

    /// Sets the current value of the status control.
    ///
    /// Surrounding markup whitespace is stripped; the value itself is kept
    /// verbatim so that parsing stays exact.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        let raw = status.into();
        let trimmed = raw.trim();
        self.status = Some(if trimmed.len() == raw.len() {
            raw
        } else {
            trimmed.to_owned()
        });
        self
    }

    /// Sets the rendered deadline text.
    #[must_use]
    pub fn with_deadline_text(mut self, deadline_text: impl Into<String>) -> Self {
        self.deadline_text = deadline_text.into();
        self
    }

    /// Returns the raw status, if the row has a status control.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee(&self) -> &UserIdentity {
        &self.assignee
    }

    /// Returns the assigner.
    #[must_use]
    pub const fn assigner(&self) -> &UserIdentity {
        &self.assigner
    }

    /// Returns the rendered deadline text.
    #[must_use]
    pub fn deadline_text(&self) -> &str {
        &self.deadline_text
    }
}
