//! Unit tests for regexp values

use value_model::{RegExpValue, Value};

#[test]
fn test_flag_order_does_not_matter() {
    let a = RegExpValue::new("a", "gim").unwrap();
    let b = RegExpValue::new("a", "img").unwrap();
    assert_eq!(a.flags(), b.flags());
    assert_eq!(a.flags(), "gim");
}

#[test]
fn test_flag_content_matters() {
    let a = RegExpValue::new("a", "g").unwrap();
    let b = RegExpValue::new("a", "").unwrap();
    assert_ne!(a.flags(), b.flags());
}

#[test]
fn test_all_flags_accepted_once() {
    let re = RegExpValue::new("a", "ymsgui").unwrap();
    assert_eq!(re.flags(), "gimsuy");
}

#[test]
fn test_pattern_key_through_value() {
    let v = Value::regexp("\\d+", "g").unwrap();
    assert_eq!(v.pattern_key(), Some(("\\d+".to_string(), "g".to_string())));
}

#[test]
fn test_construction_errors_are_syntax_errors() {
    assert_eq!(RegExpValue::new("a", "gg").unwrap_err().name(), "SyntaxError");
    assert_eq!(RegExpValue::new("(", "").unwrap_err().name(), "SyntaxError");
}
