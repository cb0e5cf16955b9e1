//! Edge-dependent edit authority.
//!
//! Who may move a task forward depends on which edge of the state machine is
//! being crossed: the assignee drives `Pending` and `InProgress`, the assigner
//! approves `Review`, and terminal statuses are frozen for everyone. The whole
//! rule lives in [`RequiredAuthority::for_status`].

use super::{TaskStatus, UserIdentity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Participant role a viewer must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowRole {
    /// The user responsible for doing the work.
    Assignee,
    /// The user who delegated the work.
    Assigner,
}

impl WorkflowRole {
    /// Returns `true` when `viewer` holds this role on the task.
    #[must_use]
    pub fn is_held_by(
        self,
        viewer: &UserIdentity,
        assignee: &UserIdentity,
        assigner: &UserIdentity,
    ) -> bool {
        match self {
            Self::Assignee => viewer == assignee,
            Self::Assigner => viewer == assigner,
        }
    }
}

/// Authority needed to edit a task in a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredAuthority {
    /// The viewer must hold the role.
    Role(WorkflowRole),
    /// Nobody may edit; the denial explains why.
    Frozen(EditDenial),
}

impl RequiredAuthority {
    /// Looks up the authority for `status`.
    #[must_use]
    pub const fn for_status(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending | TaskStatus::InProgress => Self::Role(WorkflowRole::Assignee),
            TaskStatus::Review => Self::Role(WorkflowRole::Assigner),
            TaskStatus::Completed => Self::Frozen(EditDenial::Completed),
            TaskStatus::Blocked => Self::Frozen(EditDenial::Blocked),
        }
    }
}

/// Reason a status control is rendered read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditDenial {
    /// The task is completed.
    Completed,
    /// The task is blocked.
    Blocked,
    /// The viewer lacks the role required for this status, or the status is
    /// not recognised.
    NotAssignedToViewer,
}

impl EditDenial {
    /// Returns the annotation shown on the disabled control.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Completed => "Completed tasks cannot be edited",
            Self::Blocked => "Blocked tasks are frozen",
            Self::NotAssignedToViewer => "You can only change status for tasks assigned to you",
        }
    }
}

impl fmt::Display for EditDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
