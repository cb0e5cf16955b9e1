//! Listing render passes.
//!
//! Bridges the page and the two decision engines. A render pass reads raw row
//! facts, asks [`crate::workflow`] and [`crate::deadline`] for decisions, and
//! hands them to a [`ports::RowEffects`] implementation owned by the page:
//!
//! - Row facts, decisions and render context in [`domain`]
//! - The effect port in [`ports`]
//! - An in-memory effect recorder in [`adapters`]
//! - The render pass in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
