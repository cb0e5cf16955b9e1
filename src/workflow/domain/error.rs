//! Error types for workflow status parsing and submission checks.

use super::{EditDenial, TaskStatus};
use thiserror::Error;

/// Error returned while parsing task statuses from listing data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Errors returned when a submitted status change is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// A status value was outside the enumeration.
    #[error(transparent)]
    UnknownStatus(#[from] ParseTaskStatusError),

    /// The viewer has no authority over the task in its current status.
    #[error("{reason}")]
    NotPermitted {
        /// Status the task was in.
        status: TaskStatus,
        /// Why the edit was denied.
        reason: EditDenial,
    },

    /// The requested status is not reachable from the current one.
    #[error("cannot change task from {} to {}", .from.label(), .to.label())]
    TransitionNotAllowed {
        /// Status the task was in.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },
}
