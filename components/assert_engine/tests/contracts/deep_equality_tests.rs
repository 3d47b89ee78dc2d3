//! Contract tests for the deep-equality engine

use assert_engine::{loose_deep_equal, strict_deep_equal};
use value_model::{DateValue, SymbolValue, Value};

fn pair_of_objects() -> (Value, Value) {
    let a = Value::object();
    a.set("a", Value::number(1.0));
    a.set("b", Value::number(2.0));
    let b = Value::object();
    b.set("b", Value::number(2.0));
    b.set("a", Value::number(1.0));
    (a, b)
}

#[cfg(test)]
mod primitive_properties {
    use super::*;

    #[test]
    fn test_reflexive_except_nan() {
        for value in [
            Value::undefined(),
            Value::null(),
            Value::boolean(true),
            Value::number(4.0),
            Value::number(0.0),
            Value::string("s"),
            Value::symbol(SymbolValue::new(Some("s"))),
        ] {
            assert!(strict_deep_equal(&value, &value.clone()));
            assert!(loose_deep_equal(&value, &value.clone()));
        }

        let nan = Value::number(f64::NAN);
        assert!(!strict_deep_equal(&nan, &nan.clone()));
        assert!(!loose_deep_equal(&nan, &nan.clone()));
    }

    #[test]
    fn test_coercive_pairs_loose_only() {
        let cases = [
            (Value::number(4.0), Value::string("4")),
            (Value::null(), Value::undefined()),
            (Value::boolean(true), Value::number(1.0)),
            (Value::boolean(false), Value::string("0")),
        ];
        for (a, b) in cases {
            assert!(loose_deep_equal(&a, &b), "{} ~ {}", a, b);
            assert!(!strict_deep_equal(&a, &b), "{} !~ {}", a, b);
        }
    }

    #[test]
    fn test_symmetry() {
        let values = [
            Value::number(4.0),
            Value::string("4"),
            Value::null(),
            Value::undefined(),
            Value::boolean(true),
            Value::array_from(vec![Value::number(4.0)]),
            Value::object(),
        ];
        for a in &values {
            for b in &values {
                assert_eq!(loose_deep_equal(a, b), loose_deep_equal(b, a));
                assert_eq!(strict_deep_equal(a, b), strict_deep_equal(b, a));
            }
        }
    }
}

#[cfg(test)]
mod container_properties {
    use super::*;

    #[test]
    fn test_key_order_independence() {
        let (a, b) = pair_of_objects();
        assert!(loose_deep_equal(&a, &b));
    }

    #[test]
    fn test_value_mismatch_detected() {
        let (a, b) = pair_of_objects();
        b.set("b", Value::number(3.0));
        assert!(!loose_deep_equal(&a, &b));
    }

    #[test]
    fn test_extra_key_detected() {
        let (a, b) = pair_of_objects();
        b.set("c", Value::number(3.0));
        assert!(!loose_deep_equal(&a, &b));
    }

    #[test]
    fn test_array_like_quirk_is_loose_only() {
        let arr = Value::array_from(vec![Value::string("a")]);
        let bag = Value::object();
        bag.set("0", Value::string("a"));
        assert!(loose_deep_equal(&arr, &bag));
        assert!(!strict_deep_equal(&arr, &bag));

        let with_length = Value::object();
        with_length.set("0", Value::number(4.0));
        with_length.set("length", Value::number(1.0));
        assert!(!strict_deep_equal(
            &Value::array_from(vec![Value::number(4.0)]),
            &with_length
        ));
    }

    #[test]
    fn test_nested_arrays() {
        let a = Value::array_from(vec![
            Value::array_from(vec![Value::number(1.0)]),
            Value::array_from(vec![Value::number(2.0)]),
        ]);
        let b = Value::array_from(vec![
            Value::array_from(vec![Value::number(1.0)]),
            Value::array_from(vec![Value::number(2.0)]),
        ]);
        assert!(strict_deep_equal(&a, &b));

        let c = Value::array_from(vec![
            Value::array_from(vec![Value::number(1.0)]),
            Value::array_from(vec![Value::number(3.0)]),
        ]);
        assert!(!loose_deep_equal(&a, &c));
    }

    #[test]
    fn test_empty_containers() {
        assert!(strict_deep_equal(&Value::object(), &Value::object()));
        assert!(strict_deep_equal(&Value::array(), &Value::array()));
        assert!(loose_deep_equal(&Value::array(), &Value::object()));
        assert!(!strict_deep_equal(&Value::array(), &Value::object()));
    }
}

#[cfg(test)]
mod cycle_properties {
    use super::*;

    #[test]
    fn test_self_cycles_compare_equal() {
        let a = Value::object();
        a.set("self", a.clone());
        let b = Value::object();
        b.set("self", b.clone());
        assert!(loose_deep_equal(&a, &b));
    }

    #[test]
    fn test_reflexivity_under_cycles() {
        let a = Value::object();
        a.set("self", a.clone());
        assert!(strict_deep_equal(&a, &a.clone()));
    }

    #[test]
    fn test_cycle_against_acyclic_is_unequal() {
        let cyclic = Value::object();
        cyclic.set("self", cyclic.clone());
        let acyclic = Value::object();
        acyclic.set("self", Value::object());
        assert!(!loose_deep_equal(&cyclic, &acyclic));
    }

    #[test]
    fn test_cycle_through_arrays() {
        let a = Value::array();
        if let Value::Array(cell) = &a {
            cell.borrow_mut().elements.push(a.clone());
        }
        let b = Value::array();
        if let Value::Array(cell) = &b {
            cell.borrow_mut().elements.push(b.clone());
        }
        assert!(strict_deep_equal(&a, &b));
    }
}

#[cfg(test)]
mod special_kind_properties {
    use super::*;

    #[test]
    fn test_dates_compare_by_calendar_fields() {
        let a = Value::date(DateValue::from_components(
            2024,
            2,
            Some(10),
            Some(6),
            None,
            None,
            None,
        ));
        let b = Value::date(DateValue::from_components(
            2024,
            2,
            Some(10),
            Some(6),
            None,
            None,
            None,
        ));
        let later = Value::date(DateValue::from_components(
            2024,
            2,
            Some(10),
            Some(7),
            None,
            None,
            None,
        ));
        assert!(strict_deep_equal(&a, &b));
        assert!(!strict_deep_equal(&a, &later));
    }

    #[test]
    fn test_regexp_flag_semantics() {
        let gim = Value::regexp("a", "gim").unwrap();
        let img = Value::regexp("a", "img").unwrap();
        let im = Value::regexp("a", "im").unwrap();
        assert!(loose_deep_equal(&gim, &img));
        assert!(!loose_deep_equal(&gim, &im));
    }

    #[test]
    fn test_regexp_source_matters() {
        let a = Value::regexp("a", "g").unwrap();
        let b = Value::regexp("b", "g").unwrap();
        assert!(!loose_deep_equal(&a, &b));
    }

    #[test]
    fn test_date_never_equals_regexp() {
        let date = Value::date_from_timestamp(0.0);
        let re = Value::regexp("a", "").unwrap();
        assert!(!loose_deep_equal(&date, &re));
    }

    #[test]
    fn test_wrapper_against_primitive() {
        assert!(loose_deep_equal(
            &Value::boxed_string("a"),
            &Value::string("a")
        ));
        assert!(!strict_deep_equal(
            &Value::boxed_string("a"),
            &Value::string("a")
        ));
        assert!(loose_deep_equal(
            &Value::boxed_string("a"),
            &Value::boxed_string("a")
        ));
    }
}
