//! Workflow decision value handed to the renderer.

use super::{EditDenial, TaskStatus};
use serde::{Deserialize, Serialize};

/// Outcome of evaluating one task row against the workflow policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDecision {
    allowed_next_statuses: Vec<TaskStatus>,
    denial: Option<EditDenial>,
}

impl WorkflowDecision {
    /// Creates an editable decision.
    #[must_use]
    pub const fn editable(allowed_next_statuses: Vec<TaskStatus>) -> Self {
        Self {
            allowed_next_statuses,
            denial: None,
        }
    }

    /// Creates a read-only decision.
    #[must_use]
    pub const fn read_only(allowed_next_statuses: Vec<TaskStatus>, denial: EditDenial) -> Self {
        Self {
            allowed_next_statuses,
            denial: Some(denial),
        }
    }

    /// Statuses the control may keep, in progression order.
    #[must_use]
    pub fn allowed_next_statuses(&self) -> &[TaskStatus] {
        &self.allowed_next_statuses
    }

    /// Returns `true` when the viewer may change the status.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        self.denial.is_none()
    }

    /// Returns the denial, if any.
    #[must_use]
    pub const fn denial(&self) -> Option<EditDenial> {
        self.denial
    }

    /// Returns the annotation for a read-only control.
    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        self.denial.map(EditDenial::message)
    }
}
