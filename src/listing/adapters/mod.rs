//! Adapter implementations for listing ports.

pub mod memory;

pub use memory::{RecordedRow, RowStyle};
