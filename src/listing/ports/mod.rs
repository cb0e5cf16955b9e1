//! Port contracts for listing render passes.

pub mod effects;

pub use effects::RowEffects;
