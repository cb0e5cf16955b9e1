//! Taskflow: task status workflow and deadline classification for admin task
//! listings.
//!
//! The page renderer extracts facts from each listing row (current status,
//! assignee, assigner, deadline text) and this crate decides what the row may
//! show: which statuses the status control keeps, whether the viewer may
//! change it, and whether the row is overdue.
//!
//! # Architecture
//!
//! Each module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values and rules with no page or storage dependencies
//! - **Ports**: Trait interfaces the page implements
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: Decision engines and the render pass
//!
//! # Modules
//!
//! - [`workflow`]: Status state machine and edit authority
//! - [`deadline`]: Deadline parsing and overdue classification
//! - [`listing`]: Render passes applying both decisions to rows

pub mod deadline;
pub mod listing;
pub mod workflow;
