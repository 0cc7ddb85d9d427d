//! Record and list primitives
//!
//! Everything here returns fresh values and leaves its inputs untouched.

use indexmap::IndexMap;
use std::convert::Infallible;

use crate::errors::{Error, Result};
use crate::types::{Record, Value};

/// Own enumerable keys: record keys, array indexes, nothing for primitives
#[must_use]
pub fn keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(record) => record.keys().cloned().collect(),
        Value::Array(items) => (0..items.len()).map(|idx| idx.to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Own enumerable values, in key order
#[must_use]
pub fn values(value: &Value) -> Vec<Value> {
    match value {
        Value::Object(record) => record.values().cloned().collect(),
        Value::Array(items) => items.clone(),
        _ => Vec::new(),
    }
}

/// A record view of any value: records as-is, arrays keyed by index,
/// everything else empty
#[must_use]
pub fn entries(value: &Value) -> Record {
    match value {
        Value::Object(record) => record.clone(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| (idx.to_string(), item.clone()))
            .collect(),
        _ => Record::new(),
    }
}

/// Key/value pairs in iteration order
#[must_use]
pub fn to_pairs(record: &Record) -> Vec<(String, Value)> {
    record
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Build a record from pairs. A repeated key keeps its first position and
/// its last value.
pub fn from_pairs<I>(pairs: I) -> Record
where
    I: IntoIterator<Item = (String, Value)>,
{
    let mut record = Record::new();
    for (key, value) in pairs {
        record.insert(key, value);
    }
    record
}

/// Pair keys with values positionally, stopping at the shorter side
#[must_use]
pub fn zip_obj(keys: &[String], values: &[Value]) -> Record {
    from_pairs(keys.iter().cloned().zip(values.iter().cloned()))
}

/// Shallow merge where keys of `right` win
#[must_use]
pub fn merge(left: &Record, right: &Record) -> Record {
    let mut merged = left.clone();
    for (key, value) in right {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// The listed keys that exist in `record`, in the order they are listed
#[must_use]
pub fn pick(names: &[String], record: &Record) -> Record {
    names
        .iter()
        .filter_map(|name| record.get(name).map(|value| (name.clone(), value.clone())))
        .collect()
}

/// Every listed key read from `value`; absent ones are undefined
pub fn pick_all(names: &[String], value: &Value) -> Result<Record> {
    names
        .iter()
        .map(|name| Ok((name.clone(), value.prop(name)?)))
        .collect()
}

/// Pairs whose value and key satisfy `predicate`
pub fn pick_by<P>(mut predicate: P, record: &Record) -> Record
where
    P: FnMut(&Value, &str) -> bool,
{
    infallible(try_pick_by(|value, key| Ok(predicate(value, key)), record))
}

/// Fallible [`pick_by`]; stops at the first error
pub fn try_pick_by<P, E>(mut predicate: P, record: &Record) -> std::result::Result<Record, E>
where
    P: FnMut(&Value, &str) -> std::result::Result<bool, E>,
{
    let mut picked = Record::new();
    for (key, value) in record {
        if predicate(value, key)? {
            picked.insert(key.clone(), value.clone());
        }
    }
    Ok(picked)
}

/// Group items under the key `key_of` computes; groups appear in the order
/// their first item does
pub fn group_by<F>(mut key_of: F, list: &[Value]) -> IndexMap<String, Vec<Value>>
where
    F: FnMut(&Value) -> String,
{
    infallible(try_group_by(|item| Ok(key_of(item)), list))
}

/// Fallible [`group_by`]; stops at the first error
pub fn try_group_by<F, E>(
    mut key_of: F,
    list: &[Value],
) -> std::result::Result<IndexMap<String, Vec<Value>>, E>
where
    F: FnMut(&Value) -> std::result::Result<String, E>,
{
    let mut groups: IndexMap<String, Vec<Value>> = IndexMap::new();
    for item in list {
        groups.entry(key_of(item)?).or_default().push(item.clone());
    }
    Ok(groups)
}

/// First element, undefined when empty
#[must_use]
pub fn head(list: &[Value]) -> Value {
    list.first().cloned().unwrap_or_default()
}

/// All but the first element
#[must_use]
pub fn tail(list: &[Value]) -> Vec<Value> {
    list.iter().skip(1).cloned().collect()
}

/// Sub-sequence of an array or string between `from` (inclusive) and `to`
/// (exclusive). Negative positions count from the end and both ends clamp
/// to the sequence, so `f64::INFINITY` means "to the end".
pub fn slice(from: f64, to: f64, seq: &Value) -> Result<Value> {
    match seq {
        Value::Array(items) => {
            let (start, end) = slice_bounds(from, to, items.len());
            Ok(Value::Array(items[start..end].to_vec()))
        }
        Value::String(s) => {
            let units: Vec<u16> = s.encode_utf16().collect();
            let (start, end) = slice_bounds(from, to, units.len());
            Ok(Value::String(String::from_utf16_lossy(&units[start..end])))
        }
        Value::Undefined | Value::Null => Err(Error::nil_property("slice", seq.kind())),
        other => Err(Error::invalid_argument(
            "slice",
            format!("expected Array or String, found {}", other.kind()),
        )),
    }
}

fn slice_bounds(from: f64, to: f64, len: usize) -> (usize, usize) {
    let start = relative_index(from, len);
    let end = relative_index(to, len);
    (start, end.max(start))
}

fn relative_index(position: f64, len: usize) -> usize {
    let len_f = len as f64;
    let position = if position.is_nan() { 0.0 } else { position.trunc() };
    if position < 0.0 {
        (len_f + position).max(0.0) as usize
    } else {
        position.min(len_f) as usize
    }
}

/// Join two arrays or two strings
pub fn concat(left: &Value, right: &Value) -> Result<Value> {
    match (left, right) {
        (Value::Array(a), Value::Array(b)) => Ok(Value::Array(a.iter().chain(b).cloned().collect())),
        (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
        _ => Err(Error::invalid_argument(
            "concat",
            format!("cannot concat {} with {}", left.kind(), right.kind()),
        )),
    }
}

/// `value` repeated `n` times
#[must_use]
pub fn repeat(value: &Value, n: usize) -> Vec<Value> {
    vec![value.clone(); n]
}

/// Structural equality where NaN equals NaN
#[must_use]
pub fn equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
        (Value::Date(a), Value::Date(b)) => {
            a.get_time() == b.get_time() || (!a.is_valid() && !b.is_valid())
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equals(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| equals(x, y)))
        }
        _ => left == right,
    }
}

fn infallible<T>(result: std::result::Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    fn rec(json: serde_json::Value) -> Record {
        match Value::from(json) {
            Value::Object(record) => record,
            other => panic!("expected a record, found {other:?}"),
        }
    }

    #[test]
    fn test_keys_and_values() {
        assert_eq!(keys(&v(json!({"b": 1, "a": 2}))), vec!["b", "a"]);
        assert_eq!(keys(&v(json!(["x", "y"]))), vec!["0", "1"]);
        assert!(keys(&v(json!("str"))).is_empty());
        assert!(keys(&Value::Null).is_empty());
        assert_eq!(values(&v(json!({"b": 1, "a": 2}))), vec![Value::from(1), Value::from(2)]);
    }

    #[test]
    fn test_from_pairs_last_write_wins() {
        let record = from_pairs(vec![
            ("a".to_string(), Value::from(1)),
            ("b".to_string(), Value::from(2)),
            ("a".to_string(), Value::from(3)),
        ]);
        assert_eq!(record, rec(json!({"a": 3, "b": 2})));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_merge_right_wins() {
        let merged = merge(&rec(json!({"a": 1, "b": 2})), &rec(json!({"b": 3, "c": 4})));
        assert_eq!(merged, rec(json!({"a": 1, "b": 3, "c": 4})));
    }

    #[test]
    fn test_pick_and_pick_all() {
        let record = rec(json!({"a": 1, "b": 2, "c": 3}));
        let names = vec!["c".to_string(), "a".to_string(), "z".to_string()];

        let picked = pick(&names, &record);
        assert_eq!(picked.keys().collect::<Vec<_>>(), vec!["c", "a"]);

        let all = pick_all(&names, &Value::Object(record)).unwrap();
        assert_eq!(all.get("z"), Some(&Value::Undefined));
        assert_eq!(all.len(), 3);

        assert!(pick_all(&names, &Value::Null).is_err());
    }

    #[test]
    fn test_group_by_keeps_first_seen_order() {
        let list = vec![Value::from(3), Value::from(1), Value::from(4), Value::from(2)];
        let groups = group_by(
            |item| if item.to_number() % 2.0 == 0.0 { "even" } else { "odd" }.to_string(),
            &list,
        );
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["odd", "even"]);
        assert_eq!(groups["odd"], vec![Value::from(3), Value::from(1)]);
    }

    #[test]
    fn test_try_group_by_stops_on_error() {
        let list = vec![Value::from(1), Value::Null];
        let result = try_group_by(|item| item.prop("id").map(|id| id.to_js_string()), &list);
        assert!(result.is_err());
    }

    #[rstest]
    #[case(1.0, f64::INFINITY, json!([2, 3, 4]))]
    #[case(0.0, 2.0, json!([1, 2]))]
    #[case(-2.0, f64::INFINITY, json!([3, 4]))]
    #[case(0.0, -1.0, json!([1, 2, 3]))]
    #[case(3.0, 1.0, json!([]))]
    #[case(10.0, 20.0, json!([]))]
    #[case(-10.0, 1.0, json!([1]))]
    fn test_slice_arrays(#[case] from: f64, #[case] to: f64, #[case] expected: serde_json::Value) {
        let seq = v(json!([1, 2, 3, 4]));
        assert_eq!(slice(from, to, &seq).unwrap(), v(expected));
    }

    #[test]
    fn test_slice_strings_and_errors() {
        assert_eq!(slice(1.0, 3.0, &Value::from("abcd")).unwrap(), Value::from("bc"));
        assert_eq!(slice(-2.0, f64::INFINITY, &Value::from("abcd")).unwrap(), Value::from("cd"));
        assert!(slice(0.0, 1.0, &Value::from(5)).is_err());
        assert!(slice(0.0, 1.0, &Value::Undefined).unwrap_err().is_nil_access());
    }

    #[test]
    fn test_concat() {
        assert_eq!(concat(&v(json!([1])), &v(json!([2]))).unwrap(), v(json!([1, 2])));
        assert_eq!(concat(&Value::from("a"), &Value::from("b")).unwrap(), Value::from("ab"));
        assert!(concat(&Value::from("a"), &v(json!([1]))).is_err());
    }

    #[test]
    fn test_equals() {
        assert!(equals(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(equals(&v(json!({"a": 1, "b": 2})), &v(json!({"b": 2, "a": 1}))));
        assert!(!equals(&v(json!([1, 2])), &v(json!([2, 1]))));
        assert!(!equals(&Value::Null, &Value::Undefined));
    }

    #[test]
    fn test_head_tail_repeat() {
        let list = vec![Value::from(1), Value::from(2)];
        assert_eq!(head(&list), Value::from(1));
        assert_eq!(head(&[]), Value::Undefined);
        assert_eq!(tail(&list), vec![Value::from(2)]);
        assert_eq!(repeat(&Value::Undefined, 2), vec![Value::Undefined, Value::Undefined]);
    }
}
