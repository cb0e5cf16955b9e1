//! Deadline classification for task listings.
//!
//! Parses deadlines rendered as free-form text and decides whether a row is
//! overdue. Classification only runs on listings filtered to statuses that
//! still await action.
//!
//! - Domain types and the date parser in [`domain`]
//! - The classifier in [`services`]
//! - Settings in [`DeadlineConfig`]

mod config;
pub mod domain;
pub mod services;

pub use config::{ConfigError, DeadlineConfig};

#[cfg(test)]
mod tests;
