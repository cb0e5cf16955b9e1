//! Domain model for the task status workflow.
//!
//! Statuses, identities and the authority table are plain values; nothing in
//! this module touches the page or any storage.

mod authority;
mod decision;
mod error;
mod identity;
mod schema;
mod status;

pub use authority::{EditDenial, RequiredAuthority, WorkflowRole};
pub use decision::WorkflowDecision;
pub use error::{ParseTaskStatusError, WorkflowError};
pub use identity::UserIdentity;
pub use schema::StatusSchema;
pub use status::TaskStatus;
