//! Deep structural equality
//!
//! The recursive comparator behind `deepEqual` and `deepStrictEqual`.
//! Strategy is selected per kind pair from the classifier; containers
//! are compared by own key sets with a visited-pair cycle guard so that
//! self-referential structures terminate.

use std::collections::{HashMap, HashSet};

use value_model::Value;

use crate::classify::{classify, ComparisonKind};
use crate::coerce;

/// Deep equality with coercive primitive rules and tolerant container
/// rules.
///
/// # Examples
///
/// ```
/// use assert_engine::loose_deep_equal;
/// use value_model::Value;
///
/// let a = Value::array_from(vec![Value::string("a")]);
/// let b = Value::object();
/// b.set("0", Value::string("a"));
///
/// assert!(loose_deep_equal(&a, &b));
/// assert!(loose_deep_equal(&Value::number(4.0), &Value::string("4")));
/// ```
pub fn loose_deep_equal(a: &Value, b: &Value) -> bool {
    let mut visited = VisitedPairSet::new();
    deep_equal(a, b, false, &mut visited)
}

/// Deep equality requiring exact kinds and matching prototype heads
/// throughout; primitives compare without coercion.
///
/// # Examples
///
/// ```
/// use assert_engine::strict_deep_equal;
/// use value_model::Value;
///
/// let a = Value::array_from(vec![Value::number(4.0)]);
/// let b = Value::array_from(vec![Value::number(4.0)]);
///
/// assert!(strict_deep_equal(&a, &b));
/// assert!(!strict_deep_equal(&Value::number(4.0), &Value::string("4")));
/// ```
pub fn strict_deep_equal(a: &Value, b: &Value) -> bool {
    let mut visited = VisitedPairSet::new();
    deep_equal(a, b, true, &mut visited)
}

/// Identity pairs already entered during one top-level comparison.
///
/// A pair is registered before its contents are descended into, which
/// makes equality of an already-visited pair decidable in O(1) and
/// guarantees termination on cyclic inputs. The set lives for a single
/// top-level call and is discarded on return.
struct VisitedPairSet {
    pairs: HashSet<(usize, usize)>,
}

impl VisitedPairSet {
    fn new() -> Self {
        VisitedPairSet {
            pairs: HashSet::new(),
        }
    }

    /// Register a pair; false means the pair was already present.
    fn insert(&mut self, left: usize, right: usize) -> bool {
        self.pairs.insert((left, right))
    }
}

fn deep_equal(a: &Value, b: &Value, strict: bool, visited: &mut VisitedPairSet) -> bool {
    if let (Some(x), Some(y)) = (a.object_identity(), b.object_identity()) {
        if x == y {
            return true;
        }
    }
    if !strict && a.is_nullish() && b.is_nullish() {
        return true;
    }

    use ComparisonKind::*;
    let kind_a = classify(a);
    let kind_b = classify(b);
    match (kind_a, kind_b) {
        (Primitive | PrimitiveWrapper, Primitive | PrimitiveWrapper) => {
            if strict && kind_a != kind_b {
                return false;
            }
            let ua = coerce::unwrapped(a);
            let ub = coerce::unwrapped(b);
            if strict {
                coerce::strict_primitive_eq(&ua, &ub)
            } else {
                coerce::loose_primitive_eq(&ua, &ub)
            }
        }
        // NaN keys (invalid dates) compare unequal
        (Date, Date) => a.timestamp_key() == b.timestamp_key(),
        (RegexLike, RegexLike) => a.pattern_key() == b.pattern_key(),
        (ArrayLike, ArrayLike) | (PlainObject, PlainObject) => {
            containers_equal(a, b, strict, visited)
        }
        // Loose mode tolerates the indexed/property-bag split
        (ArrayLike, PlainObject) | (PlainObject, ArrayLike) if !strict => {
            containers_equal(a, b, strict, visited)
        }
        // Functions and other objects are equal only by reference,
        // which was already checked above
        _ => false,
    }
}

fn containers_equal(a: &Value, b: &Value, strict: bool, visited: &mut VisitedPairSet) -> bool {
    let (Some(left), Some(right)) = (a.object_identity(), b.object_identity()) else {
        return false;
    };
    // Cycle short-circuit: a pair already under comparison counts equal
    if !visited.insert(left, right) {
        return true;
    }

    if strict {
        if !prototype_heads_match(a, b) {
            return false;
        }
    } else if a.is_plain_object()
        && b.is_plain_object()
        && !prototype_heads_match(a, b)
        && a.to_string() != b.to_string()
    {
        // Prototype divergence between plain objects is tolerated only
        // when both sides project to the same text
        return false;
    }

    let left_entries = own_entries(a);
    let right_entries = own_entries(b);
    if left_entries.len() != right_entries.len() {
        return false;
    }
    let right_map: HashMap<&str, &Value> = right_entries
        .iter()
        .map(|(key, value)| (key.as_str(), value))
        .collect();
    for (key, left_value) in &left_entries {
        match right_map.get(key.as_str()) {
            Some(right_value) => {
                if !deep_equal(left_value, right_value, strict, visited) {
                    return false;
                }
            }
            None => return false,
        }
    }
    true
}

/// Own enumerable entries of a container; array indices become decimal
/// keys so the two container shapes share one comparison path.
fn own_entries(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Array(arr) => arr
            .borrow()
            .elements
            .iter()
            .enumerate()
            .map(|(index, element)| (index.to_string(), element.clone()))
            .collect(),
        Value::Object(obj) => obj
            .borrow()
            .properties
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

fn prototype_heads_match(a: &Value, b: &Value) -> bool {
    match (a.get_prototype(), b.get_prototype()) {
        (None, None) => true,
        (Some(p), Some(q)) => match (p.object_identity(), q.object_identity()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        _ => false,
    }
}
