//! Assertion failure types
//!
//! The structured error an assertion raises on mismatch, and the closed
//! failure taxonomy the facade surfaces: mismatch, programmer-usage
//! error, or an unexpected raised value propagated unmodified.

use thiserror::Error;
use value_model::Value;

use crate::render::render;

/// A failed assertion with full diagnostic context.
///
/// Immutable after construction; `generated_message` records whether
/// the message was synthesized from the operands rather than supplied
/// by the caller.
///
/// # Examples
///
/// ```
/// use assert_engine::AssertionError;
/// use value_model::Value;
///
/// let err = AssertionError::new(&Value::number(4.0), &Value::string("4"), None, "===");
/// assert!(err.generated_message);
/// assert_eq!(err.message, "4 === \"4\"");
/// ```
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AssertionError {
    /// The value the assertion observed
    pub actual: Value,
    /// The value the assertion wanted
    pub expected: Value,
    /// Failure message, caller-supplied or generated
    pub message: String,
    /// Operator tag of the failed assertion
    pub operator: String,
    /// Whether `message` was generated rather than caller-supplied
    pub generated_message: bool,
}

impl AssertionError {
    /// Build an assertion error, generating the
    /// `"<actual> <operator> <expected>"` message when the caller
    /// supplied none.
    pub fn new(actual: &Value, expected: &Value, message: Option<&str>, operator: &str) -> Self {
        let (message, generated_message) = match message {
            Some(text) => (text.to_string(), false),
            None => (
                format!("{} {} {}", render(actual), operator, render(expected)),
                true,
            ),
        };
        AssertionError {
            actual: actual.clone(),
            expected: expected.clone(),
            message,
            operator: operator.to_string(),
            generated_message,
        }
    }
}

/// Failure taxonomy of the assertion facade.
///
/// Distinguishes "the expectation did not hold" from "the test itself
/// is wrong" from "the code under test raised something unexpected", so
/// callers can react to each differently.
#[derive(Debug, Error)]
pub enum AssertError {
    /// An assertion mismatch
    #[error(transparent)]
    Assertion(#[from] AssertionError),
    /// A programmer-usage error: the block argument was not callable
    #[error("TypeError: {0}")]
    NotCallable(String),
    /// A raised value propagated unmodified
    #[error("{0}")]
    Raised(Value),
}
