//! Domain model for deadline classification.

mod parser;
mod verdict;
mod view;

pub use parser::parse_deadline;
pub use verdict::DeadlineVerdict;
pub use view::ViewContext;
