//! Application services for deadline classification.

mod classifier;

pub use classifier::DeadlineClassifier;
