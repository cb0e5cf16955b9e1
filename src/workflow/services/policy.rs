//! Workflow policy: legal next statuses and edit authority.

use crate::workflow::domain::{
    EditDenial, RequiredAuthority, TaskStatus, UserIdentity, WorkflowDecision, WorkflowError,
};
use tracing::debug;

/// Pure decision engine for task status controls.
///
/// Raw status text from the listing is accepted as-is; values outside the
/// enumeration fail closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowPolicy;

impl WorkflowPolicy {
    /// Creates the policy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the statuses a control may present for `status`, in
    /// progression order and including `status` itself.
    ///
    /// Unrecognised statuses yield an empty list.
    #[must_use]
    pub fn allowed_transitions(&self, status: &str) -> Vec<TaskStatus> {
        parse_or_log(status).map_or_else(Vec::new, allowed_from)
    }

    /// Returns `true` when `viewer` may change the status of the task.
    #[must_use]
    pub fn can_edit(
        &self,
        status: &str,
        viewer: &UserIdentity,
        assignee: &UserIdentity,
        assigner: &UserIdentity,
    ) -> bool {
        edit_denial(parse_or_log(status), viewer, assignee, assigner).is_none()
    }

    /// Evaluates both rules for one task row.
    #[must_use]
    pub fn evaluate(
        &self,
        status: &str,
        viewer: &UserIdentity,
        assignee: &UserIdentity,
        assigner: &UserIdentity,
    ) -> WorkflowDecision {
        let parsed = parse_or_log(status);
        let allowed = parsed.map_or_else(Vec::new, allowed_from);
        match edit_denial(parsed, viewer, assignee, assigner) {
            None => WorkflowDecision::editable(allowed),
            Some(denial) => WorkflowDecision::read_only(allowed, denial),
        }
    }

    /// Checks a submitted status change before it is forwarded for saving.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::UnknownStatus`] when either value is outside
    /// the enumeration, [`WorkflowError::NotPermitted`] when the viewer may
    /// not edit the task, and [`WorkflowError::TransitionNotAllowed`] when
    /// `requested` is neither the immediate successor of `current` nor
    /// `Blocked`.
    pub fn authorize_submission(
        &self,
        current: &str,
        requested: &str,
        viewer: &UserIdentity,
        assignee: &UserIdentity,
        assigner: &UserIdentity,
    ) -> Result<TaskStatus, WorkflowError> {
        let from = TaskStatus::try_from(current)?;
        let to = TaskStatus::try_from(requested)?;

        if let Some(reason) = edit_denial(Some(from), viewer, assignee, assigner) {
            return Err(WorkflowError::NotPermitted {
                status: from,
                reason,
            });
        }
        if !from.can_move_to(to) {
            return Err(WorkflowError::TransitionNotAllowed { from, to });
        }
        Ok(to)
    }
}

fn parse_or_log(status: &str) -> Option<TaskStatus> {
    match TaskStatus::try_from(status) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(%err, "failing closed on unrecognised status");
            None
        }
    }
}

fn allowed_from(status: TaskStatus) -> Vec<TaskStatus> {
    std::iter::once(status).chain(status.successor()).collect()
}

fn edit_denial(
    status: Option<TaskStatus>,
    viewer: &UserIdentity,
    assignee: &UserIdentity,
    assigner: &UserIdentity,
) -> Option<EditDenial> {
    let Some(known) = status else {
        return Some(EditDenial::NotAssignedToViewer);
    };
    match RequiredAuthority::for_status(known) {
        RequiredAuthority::Frozen(denial) => Some(denial),
        RequiredAuthority::Role(role) if role.is_held_by(viewer, assignee, assigner) => None,
        RequiredAuthority::Role(_) => Some(EditDenial::NotAssignedToViewer),
    }
}
