//! Structural equality and hashing for JSON values
//!
//! `serde_json::Value` has no `Hash` impl, and its `PartialEq` treats `1` and
//! `1.0` as different values. Histogram keys and filter comparisons need the
//! looser JSON notion of equality: numbers compare by numeric value, objects
//! compare irrespective of key order.

use serde_json::{Number, Value};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A JSON value usable as a hash map key.
///
/// Any JSON value is accepted, but arrays and objects hash their whole
/// content, so keying on them costs proportionally more than on scalars.
#[derive(Debug, Clone)]
pub struct HistogramKey(Value);

impl HistogramKey {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for HistogramKey {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&Value> for HistogramKey {
    fn from(value: &Value) -> Self {
        Self(value.clone())
    }
}

impl PartialEq for HistogramKey {
    fn eq(&self, other: &Self) -> bool {
        json_eq(&self.0, &other.0)
    }
}

impl Eq for HistogramKey {}

impl Hash for HistogramKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(&self.0, state);
    }
}

/// Renders strings without quotes and everything else as compact JSON.
impl fmt::Display for HistogramKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// Structural equality between two JSON values.
///
/// Values of different types are never equal. Numbers are compared as
/// `f64`, so `200` equals `200.0`.
pub fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_eq(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| json_eq(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| json_eq(x, y)))
        }
        _ => false,
    }
}

fn number_eq(a: &Number, b: &Number) -> bool {
    a.as_f64() == b.as_f64()
}

/// Normalised bit pattern so that `0.0` and `-0.0` hash alike.
fn number_bits(n: &Number) -> u64 {
    match n.as_f64() {
        Some(f) if f == 0.0 => 0,
        Some(f) => f.to_bits(),
        None => 0,
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => state.write_u8(0),
        Value::Bool(b) => {
            state.write_u8(1);
            b.hash(state);
        }
        Value::Number(n) => {
            state.write_u8(2);
            state.write_u64(number_bits(n));
        }
        Value::String(s) => {
            state.write_u8(3);
            s.hash(state);
        }
        Value::Array(items) => {
            state.write_u8(4);
            state.write_usize(items.len());
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            state.write_u8(5);
            state.write_usize(map.len());
            // Order-independent: entries are hashed separately and summed.
            let combined = map.iter().fold(0u64, |acc, (key, item)| {
                let mut entry = DefaultHasher::new();
                key.hash(&mut entry);
                hash_value(item, &mut entry);
                acc.wrapping_add(entry.finish())
            });
            state.write_u64(combined);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hash_of(value: Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        HistogramKey::new(value).hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_numbers_equal_by_value() {
        assert!(json_eq(&json!(200), &json!(200.0)));
        assert!(json_eq(&json!(-0.0), &json!(0)));
        assert!(!json_eq(&json!(1), &json!(2)));
        assert_eq!(hash_of(json!(200)), hash_of(json!(200.0)));
        assert_eq!(hash_of(json!(-0.0)), hash_of(json!(0)));
    }

    #[test]
    fn test_types_never_equal_across_variants() {
        assert!(!json_eq(&json!("1"), &json!(1)));
        assert!(!json_eq(&json!(null), &json!(false)));
        assert!(!json_eq(&json!([]), &json!({})));
    }

    #[test]
    fn test_object_equality_ignores_key_order() {
        let a: Value = serde_json::from_str(r#"{"x":1,"y":[true,null]}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"y":[true,null],"x":1.0}"#).unwrap();
        assert!(json_eq(&a, &b));
        assert_eq!(hash_of(a), hash_of(b));
    }

    #[test]
    fn test_nested_difference_detected() {
        assert!(!json_eq(&json!({"a": {"b": 1}}), &json!({"a": {"b": 2}})));
        assert!(!json_eq(&json!([1, 2]), &json!([1, 2, 3])));
        assert!(!json_eq(&json!({"a": 1}), &json!({"b": 1})));
    }

    #[test]
    fn test_display_renders_strings_raw() {
        assert_eq!(HistogramKey::new(json!("/a")).to_string(), "/a");
        assert_eq!(HistogramKey::new(json!(42)).to_string(), "42");
        assert_eq!(HistogramKey::new(json!(1.5)).to_string(), "1.5");
        assert_eq!(HistogramKey::new(json!(true)).to_string(), "true");
        assert_eq!(HistogramKey::new(json!(null)).to_string(), "null");
        assert_eq!(HistogramKey::new(json!([1, "a"])).to_string(), r#"[1,"a"]"#);
    }
}
