//! Assertion primitives over dynamic values
//!
//! This crate provides the comparison engine and assertion facade
//! consumed by test runners:
//! - Value classification into comparison kinds
//! - Coercive and strict primitive equality as explicit rule tables
//! - Deep structural equality with a visited-pair cycle guard
//! - Structured assertion errors with cycle-safe diagnostic rendering
//! - The `Assert` facade: ok, equal, deepEqual, throws, ifError, and
//!   their variants
//!
//! # Example
//!
//! ```
//! use assert_engine::{Assert, AssertError};
//! use value_model::Value;
//!
//! let actual = Value::object();
//! actual.set("count", Value::number(4.0));
//! let expected = Value::object();
//! expected.set("count", Value::string("4"));
//!
//! // Loose deep equality coerces at the leaves
//! assert!(Assert::deep_equal(&actual, &expected, None).is_ok());
//!
//! // Strict deep equality does not
//! match Assert::deep_strict_equal(&actual, &expected, None) {
//!     Err(AssertError::Assertion(err)) => {
//!         assert_eq!(err.operator, "deepStrictEqual");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assert;
pub mod classify;
pub mod coerce;
pub mod deep;
pub mod error;
pub mod render;

// Re-export main types for convenience
pub use assert::{Assert, ThrowsExpectation};
pub use classify::{classify, ComparisonKind};
pub use deep::{loose_deep_equal, strict_deep_equal};
pub use error::{AssertError, AssertionError};
pub use render::{render, CIRCULAR_MARKER};
