//! Contract tests for the assertion engine
//!
//! These tests verify the public API behavior: classification, deep
//! equality in both modes, and the assertion facade.

mod deep_equality_tests;
