//! Unit tests for listing render passes.
