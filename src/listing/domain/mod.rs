//! Domain model for listing render passes.

mod context;
mod decision;
mod row;

pub use context::RenderContext;
pub use decision::{RenderSummary, RowDecision};
pub use row::TaskRow;
