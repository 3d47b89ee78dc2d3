//! Coercive and strict primitive equality
//!
//! The loose table codifies the coercion rules as data rather than
//! leaning on a native coercing operator:
//! - null ~ undefined
//! - number ~ string (numeric parse of the string)
//! - boolean ~ number / string / bigint (the boolean converts to 0 or 1)
//! - bigint ~ number (integer-valued numbers only)
//! - bigint ~ string (integer parse of the string)
//!
//! NaN is unequal to NaN under both tables. Symbols never coerce.

use num_bigint::BigInt;
use num_traits::FromPrimitive;
use value_model::Value;

/// Strict primitive equality: identical type and value.
///
/// `NaN` is not equal to `NaN`; a bigint is never strictly equal to a
/// number, even with the same magnitude.
pub fn strict_primitive_eq(a: &Value, b: &Value) -> bool {
    a.strict_equals(b)
}

/// Loose primitive equality over unwrapped primitive values.
///
/// Inputs that are not primitives fall through to the catch-all and
/// report unequal; callers unwrap wrapper objects first.
pub fn loose_primitive_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        // Same-type comparisons
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        // NaN != NaN falls out of the IEEE comparison
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x.id() == y.id(),
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        // null == undefined
        (Value::Undefined, Value::Null) | (Value::Null, Value::Undefined) => true,
        // String-to-number coercion
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            string_to_number(s) == *n
        }
        // Bigint-to-number coercion: integer-valued numbers only
        (Value::BigInt(big), Value::Number(n)) | (Value::Number(n), Value::BigInt(big)) => {
            n.is_finite() && n.fract() == 0.0 && BigInt::from_f64(*n).as_ref() == Some(big)
        }
        // Bigint-to-string coercion
        (Value::BigInt(big), Value::String(s)) | (Value::String(s), Value::BigInt(big)) => {
            s.trim().parse::<BigInt>().map_or(false, |parsed| parsed == *big)
        }
        // A boolean converts to 0 or 1 against everything else
        (Value::Boolean(x), other) | (other, Value::Boolean(x)) => {
            let as_number = Value::Number(if *x { 1.0 } else { 0.0 });
            loose_primitive_eq(&as_number, other)
        }
        _ => false,
    }
}

/// Value-level loose equality (the `==` predicate).
///
/// Composite values compare by reference identity; wrapper objects
/// unwrap against primitives; primitives go through the coercion table.
///
/// # Examples
///
/// ```
/// use assert_engine::coerce::loose_equals;
/// use value_model::Value;
///
/// assert!(loose_equals(&Value::number(4.0), &Value::string("4")));
/// assert!(loose_equals(&Value::null(), &Value::undefined()));
/// assert!(loose_equals(&Value::boxed_number(4.0), &Value::number(4.0)));
/// assert!(!loose_equals(&Value::object(), &Value::object()));
/// ```
pub fn loose_equals(a: &Value, b: &Value) -> bool {
    if let (Some(x), Some(y)) = (a.object_identity(), b.object_identity()) {
        return x == y;
    }
    let ua = unwrapped(a);
    let ub = unwrapped(b);
    loose_primitive_eq(&ua, &ub)
}

/// A wrapper's primitive, or the value itself.
pub(crate) fn unwrapped(value: &Value) -> Value {
    value
        .unwrapped_primitive()
        .unwrap_or_else(|| value.clone())
}

fn string_to_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        // The empty string converts to zero
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => {
            // Only digit-led text converts; the float parser's own
            // alphabetic spellings (inf, nan) must not
            let rest = t
                .strip_prefix('+')
                .or_else(|| t.strip_prefix('-'))
                .unwrap_or(t);
            if !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                return f64::NAN;
            }
            t.parse::<f64>().unwrap_or(f64::NAN)
        }
    }
}
