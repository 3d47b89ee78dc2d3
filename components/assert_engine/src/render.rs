//! Diagnostic rendering of values
//!
//! Generated assertion messages embed a JSON-like textual form of each
//! operand. The walk carries its own visited-identity set, separate
//! from the comparison engine's, and substitutes a fixed marker token
//! for reference cycles instead of recursing.

use std::collections::HashSet;

use value_model::Value;

/// Marker token substituted for a reference cycle during rendering.
pub const CIRCULAR_MARKER: &str = "[Circular]";

/// Length cap for rendered forms embedded in generated messages.
const RENDER_CAP: usize = 128;

/// Render a value as a JSON-like string, cycle-safe and length-capped.
///
/// # Examples
///
/// ```
/// use assert_engine::render;
/// use value_model::Value;
///
/// assert_eq!(render(&Value::number(4.0)), "4");
/// assert_eq!(render(&Value::string("4")), "\"4\"");
///
/// let cyclic = Value::object();
/// cyclic.set("self", cyclic.clone());
/// assert_eq!(render(&cyclic), "{\"self\":\"[Circular]\"}");
/// ```
pub fn render(value: &Value) -> String {
    let mut seen = HashSet::new();
    clip(&to_json(value, &mut seen).to_string())
}

fn clip(text: &str) -> String {
    if text.chars().count() <= RENDER_CAP {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(RENDER_CAP).collect();
        format!("{}...", clipped)
    }
}

fn to_json(value: &Value, seen: &mut HashSet<usize>) -> serde_json::Value {
    let identity = value.object_identity();
    if let Some(id) = identity {
        if !seen.insert(id) {
            return serde_json::Value::String(CIRCULAR_MARKER.to_string());
        }
    }

    let rendered = match value {
        Value::Undefined => serde_json::Value::String("undefined".to_string()),
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Symbol(sym) => serde_json::Value::String(sym.to_string()),
        Value::BigInt(n) => serde_json::Value::String(format!("{}n", n)),
        Value::BoxedBoolean(b) => serde_json::Value::Bool(**b),
        Value::BoxedNumber(n) => number_to_json(**n),
        Value::BoxedString(s) => serde_json::Value::String((**s).clone()),
        Value::Array(arr) => serde_json::Value::Array(
            arr.borrow()
                .elements
                .iter()
                .map(|element| to_json(element, seen))
                .collect(),
        ),
        Value::Object(obj) => {
            let mut map = serde_json::Map::new();
            for (key, property) in &obj.borrow().properties {
                map.insert(key.clone(), to_json(property, seen));
            }
            serde_json::Value::Object(map)
        }
        Value::Date(d) => serde_json::Value::String(d.borrow().to_string()),
        Value::RegExp(re) => serde_json::Value::String(re.borrow().to_string()),
        Value::Function(_) => serde_json::Value::String("[Function]".to_string()),
        Value::Error(err) => serde_json::Value::String(err.borrow().to_string()),
    };

    if let Some(id) = identity {
        seen.remove(&id);
    }
    rendered
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.is_nan() {
        serde_json::Value::String("NaN".to_string())
    } else if n.is_infinite() {
        let spelling = if n.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        serde_json::Value::String(spelling.to_string())
    } else if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
        // Integer-valued numbers render without a decimal point
        serde_json::Value::Number((n as i64).into())
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}
