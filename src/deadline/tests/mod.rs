//! Unit tests for deadline classification.

mod classifier_tests;
