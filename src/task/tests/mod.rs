//! Unit tests for the task engine.

mod view_tests;
