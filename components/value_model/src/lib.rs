//! Dynamic value model for the assertion utility
//!
//! This crate provides the dynamic values that assertions range over:
//! - The `Value` enum: primitives, boxed primitive wrappers, and
//!   reference-counted composites (objects, arrays, dates, regexps,
//!   callables, errors)
//! - Reference identity, truthiness, and type tagging
//! - Regexp values with validated, canonicalized flags
//! - Date values keyed by millisecond timestamps
//! - Error objects with a closed kind taxonomy
//!
//! # Example
//!
//! ```
//! use value_model::Value;
//!
//! let arr = Value::array_from(vec![Value::number(1.0), Value::number(2.0)]);
//! assert_eq!(arr.array_length(), 2);
//!
//! // Clones share identity; fresh values do not
//! let alias = arr.clone();
//! assert_eq!(arr.object_identity(), alias.object_identity());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod date;
pub mod error;
pub mod regexp;
pub mod value;

// Re-export main types for convenience
pub use date::DateValue;
pub use error::{ErrorKind, ErrorObject};
pub use regexp::RegExpValue;
pub use value::{ArrayData, CallResult, FunctionData, ObjectData, SymbolValue, Value};
