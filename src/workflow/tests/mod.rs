//! Unit tests for the task status workflow.
