//! Application services for the task status workflow.

mod policy;

pub use policy::WorkflowPolicy;
