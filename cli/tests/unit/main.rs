//! Unit tests for nodeboot CLI
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod property_tests;
