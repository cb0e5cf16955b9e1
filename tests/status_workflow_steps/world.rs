//! Shared world state for status workflow BDD scenarios.

use rstest::fixture;
use taskflow::workflow::{
    domain::{TaskStatus, UserIdentity, WorkflowDecision, WorkflowError},
    services::WorkflowPolicy,
};

/// Task facts captured by given steps.
pub struct PendingTask {
    /// Raw status shown by the control.
    pub status: String,
    /// User responsible for the work.
    pub assignee: UserIdentity,
    /// User who delegated the work.
    pub assigner: UserIdentity,
}

/// Scenario world for status workflow behaviour tests.
#[derive(Default)]
pub struct StatusWorkflowWorld {
    pub policy: WorkflowPolicy,
    pub task: Option<PendingTask>,
    pub viewer: Option<UserIdentity>,
    pub last_decision: Option<WorkflowDecision>,
    pub last_submission: Option<Result<TaskStatus, WorkflowError>>,
}

impl StatusWorkflowWorld {
    /// Returns the task and viewer set up by given steps.
    ///
    /// # Errors
    ///
    /// Returns an error when a given step did not run.
    pub fn task_and_viewer(&self) -> Result<(&PendingTask, &UserIdentity), eyre::Report> {
        let task = self
            .task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
        let viewer = self
            .viewer
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing viewer in scenario world"))?;
        Ok((task, viewer))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StatusWorkflowWorld {
    StatusWorkflowWorld::default()
}
