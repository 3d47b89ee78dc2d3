//! Integration test suite for the assertion utility
//!
//! This crate provides integration tests that verify the value model
//! and the assertion engine work together correctly across component
//! boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use assert_engine;
    pub use value_model;
}
