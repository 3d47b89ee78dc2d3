//! Value classification for comparison-strategy selection
//!
//! Every value maps to exactly one comparison kind; the deep-equality
//! engine selects its strategy from the kind pair. Classification probes
//! capabilities (timestamp accessor, pattern accessors, indexed shape,
//! callability) rather than nominal types, and is recomputed per
//! comparison; nothing is cached or persisted.

use value_model::Value;

/// The comparison kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonKind {
    /// Inline primitive (undefined, null, boolean, number, string, symbol, bigint)
    Primitive,
    /// Boxed wrapper object carrying an unwrapped primitive
    PrimitiveWrapper,
    /// Date-like value keyed by its timestamp
    Date,
    /// Regexp-like value keyed by (source, flags)
    RegexLike,
    /// Ordered integer-indexed container
    ArrayLike,
    /// Plain property-bag object
    PlainObject,
    /// Callable value, equal only by reference
    Function,
    /// Any other object shape, equal only by reference
    Other,
}

/// Classify a value into exactly one `ComparisonKind`.
///
/// Rules apply in order: null-ish and typeof-primitives first, then
/// wrapper unboxing, then the date/regexp capability probes, then the
/// container shapes, then callables.
///
/// # Examples
///
/// ```
/// use assert_engine::{classify, ComparisonKind};
/// use value_model::Value;
///
/// assert_eq!(classify(&Value::number(4.0)), ComparisonKind::Primitive);
/// assert_eq!(classify(&Value::boxed_number(4.0)), ComparisonKind::PrimitiveWrapper);
/// assert_eq!(classify(&Value::array()), ComparisonKind::ArrayLike);
/// assert_eq!(classify(&Value::object()), ComparisonKind::PlainObject);
/// ```
pub fn classify(value: &Value) -> ComparisonKind {
    if value.is_nullish() {
        return ComparisonKind::Primitive;
    }
    if matches!(
        value.type_of(),
        "boolean" | "number" | "string" | "symbol" | "bigint"
    ) {
        return ComparisonKind::Primitive;
    }
    if value.unwrapped_primitive().is_some() {
        return ComparisonKind::PrimitiveWrapper;
    }
    if value.timestamp_key().is_some() {
        return ComparisonKind::Date;
    }
    if value.pattern_key().is_some() {
        return ComparisonKind::RegexLike;
    }
    if value.is_indexed() {
        return ComparisonKind::ArrayLike;
    }
    if value.is_callable() {
        return ComparisonKind::Function;
    }
    if value.is_plain_object() {
        return ComparisonKind::PlainObject;
    }
    ComparisonKind::Other
}
