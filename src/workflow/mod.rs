//! Task status workflow.
//!
//! Decides which statuses a task's status control may offer and whether the
//! viewing user may change it at all. The state machine is linear
//! (`Pending` → `InProgress` → `Review` → `Completed`) with `Blocked` as an
//! absorbing side state:
//!
//! - Domain types in [`domain`]
//! - The decision engine in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
