//! Unit tests for date values

use value_model::{DateValue, Value};

#[test]
fn test_same_components_same_timestamp() {
    let a = DateValue::from_components(2024, 5, Some(10), Some(8), Some(30), Some(15), Some(250));
    let b = DateValue::from_components(2024, 5, Some(10), Some(8), Some(30), Some(15), Some(250));
    assert_eq!(a.timestamp(), b.timestamp());
}

#[test]
fn test_different_components_differ() {
    let a = DateValue::from_components(2024, 5, Some(10), None, None, None, None);
    let b = DateValue::from_components(2024, 5, Some(11), None, None, None, None);
    assert_ne!(a.timestamp(), b.timestamp());
}

#[test]
fn test_invalid_dates_have_nan_keys() {
    let invalid = DateValue::invalid();
    assert!(invalid.timestamp().is_nan());
    // NaN keys compare unequal even to themselves
    assert_ne!(invalid.timestamp(), DateValue::invalid().timestamp());
}

#[test]
fn test_timestamp_key_through_value() {
    let v = Value::date_from_timestamp(86_400_000.0);
    assert_eq!(v.timestamp_key(), Some(86_400_000.0));
}

#[test]
fn test_defaulted_components() {
    let explicit = DateValue::from_components(2024, 0, Some(1), Some(0), Some(0), Some(0), Some(0));
    let defaulted = DateValue::from_components(2024, 0, None, None, None, None, None);
    assert_eq!(explicit.timestamp(), defaulted.timestamp());
}
