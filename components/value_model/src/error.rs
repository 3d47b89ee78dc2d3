//! Error kinds and error objects
//!
//! This module provides the error-object type that callable values raise
//! and that exception-shape assertions match against:
//! - A closed kind taxonomy mirroring the standard error constructors
//! - An error object carrying kind, name, and message
//! - Constructor helpers for the common kinds

use std::fmt;

/// The kind of a raised error.
///
/// These correspond to the standard error constructors a raised value can
/// be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic error
    Error,
    /// Type mismatch errors
    TypeError,
    /// Numeric range violations
    RangeError,
    /// Undefined variable access
    ReferenceError,
    /// Malformed pattern or source text
    SyntaxError,
    /// Eval failures (legacy)
    EvalError,
}

impl ErrorKind {
    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::EvalError => "EvalError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An error object with a kind, a name, and a message.
///
/// The textual form is `"Name: message"`, or just `"Name"` when the
/// message is empty.
///
/// # Examples
///
/// ```
/// use value_model::{ErrorKind, ErrorObject};
///
/// let error = ErrorObject::new(ErrorKind::TypeError, "not a function");
/// assert_eq!(error.name(), "TypeError");
/// assert_eq!(error.to_string(), "TypeError: not a function");
/// ```
#[derive(Debug, Clone)]
pub struct ErrorObject {
    /// The kind of error
    kind: ErrorKind,
    /// Error name (defaults to the kind name)
    name: String,
    /// Error message
    message: String,
}

impl ErrorObject {
    /// Create a new error object.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ErrorObject {
            kind,
            name: kind.name().to_string(),
            message: message.into(),
        }
    }

    /// Create a TypeError.
    pub fn type_error(message: impl Into<String>) -> Self {
        ErrorObject::new(ErrorKind::TypeError, message)
    }

    /// Create a RangeError.
    pub fn range_error(message: impl Into<String>) -> Self {
        ErrorObject::new(ErrorKind::RangeError, message)
    }

    /// Create a ReferenceError.
    pub fn reference_error(message: impl Into<String>) -> Self {
        ErrorObject::new(ErrorKind::ReferenceError, message)
    }

    /// Create a SyntaxError.
    pub fn syntax_error(message: impl Into<String>) -> Self {
        ErrorObject::new(ErrorKind::SyntaxError, message)
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}
