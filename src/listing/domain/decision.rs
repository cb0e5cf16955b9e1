//! Per-row decision and render pass summary.

use crate::{
    deadline::domain::DeadlineVerdict,
    workflow::domain::{StatusSchema, WorkflowDecision},
};
use serde::Serialize;

/// Everything the renderer needs to apply to one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDecision {
    workflow: WorkflowDecision,
    deadline: DeadlineVerdict,
    highlight_assigned: bool,
}

impl RowDecision {
    /// Combines the workflow and deadline outcomes.
    ///
    /// The assigned-to-viewer highlight is dropped for overdue rows.
    #[must_use]
    pub const fn new(
        workflow: WorkflowDecision,
        deadline: DeadlineVerdict,
        assigned_to_viewer: bool,
    ) -> Self {
        Self {
            workflow,
            deadline,
            highlight_assigned: assigned_to_viewer && !deadline.is_overdue(),
        }
    }

    /// Returns the workflow decision.
    #[must_use]
    pub const fn workflow(&self) -> &WorkflowDecision {
        &self.workflow
    }

    /// Returns the deadline verdict.
    #[must_use]
    pub const fn deadline(&self) -> DeadlineVerdict {
        self.deadline
    }

    /// Returns `true` when the row should carry the assigned-to-viewer
    /// highlight.
    #[must_use]
    pub const fn highlight_assigned(&self) -> bool {
        self.highlight_assigned
    }
}

/// Counts gathered over one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RenderSummary {
    /// Rows evaluated and updated.
    pub processed: usize,
    /// Rows without a status control.
    pub skipped: usize,
    /// Rows marked overdue.
    pub overdue: usize,
    /// Status table detected from the first control with options.
    pub schema: Option<StatusSchema>,
}
