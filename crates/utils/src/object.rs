//! Record helpers
//!
//! All helpers build new records and leave their inputs alone, except
//! [`assign`], which writes into the record it is given.

use rcb_core::collection::{
    entries, from_pairs, head, merge, pick_by, to_pairs, try_group_by, try_pick_by, zip_obj,
};
use rcb_core::functional::flip;
use rcb_core::{Record, Result, Value};

use crate::predicates::is_function;

/// Call `f` with `obj`
pub fn apply_to<T, R, F>(f: F, obj: T) -> R
where
    F: FnOnce(T) -> R,
{
    f(obj)
}

/// Set `obj[prop] = value` **in place** and hand back the same record.
///
/// This is the one helper that mutates its argument; callers holding the
/// record observe the new property.
pub fn assign<'a>(
    prop: impl Into<String>,
    value: impl Into<Value>,
    obj: &'a mut Record,
) -> &'a mut Record {
    let prop = prop.into();
    tracing::trace!(prop = %prop, "assigning property in place");
    obj.insert(prop, value.into());
    obj
}

/// `obj2` with every key of `obj1` laid over it; `obj1` wins on conflicts
#[must_use]
pub fn defaults(obj1: &Record, obj2: &Record) -> Record {
    flip(merge)(obj1, obj2)
}

/// The pairs of `obj` whose value satisfies `predicate`
pub fn filter_obj<P>(mut predicate: P, obj: &Record) -> Record
where
    P: FnMut(&Value) -> bool,
{
    pick_by(|value, _| predicate(value), obj)
}

/// Fallible [`filter_obj`]; stops at the first error
pub fn try_filter_obj<P, E>(mut predicate: P, obj: &Record) -> std::result::Result<Record, E>
where
    P: FnMut(&Value) -> std::result::Result<bool, E>,
{
    try_pick_by(|value, _| predicate(value), obj)
}

/// Index records by the string form of their `prop` field.
///
/// A record without the field is indexed under `"undefined"`. When several
/// records share a key only one of them is kept; callers must not rely on
/// which (this implementation keeps the first). Null or undefined items fail.
pub fn index_by(prop: &str, list: &[Value]) -> Result<Record> {
    let groups = try_group_by(|item| item.prop(prop).map(|key| key.to_js_string()), list)?;
    Ok(groups
        .into_iter()
        .map(|(key, items)| (key, head(&items)))
        .collect())
}

/// Rename every key through `f`. Colliding new keys resolve to the last
/// value, at the position of the first.
pub fn map_keys<F>(mut f: F, obj: &Record) -> Record
where
    F: FnMut(&str) -> String,
{
    from_pairs(
        to_pairs(obj)
            .into_iter()
            .map(|(key, value)| (f(&key), value)),
    )
}

/// Fallible [`map_keys`]; stops at the first error
pub fn try_map_keys<F, E>(mut f: F, obj: &Record) -> std::result::Result<Record, E>
where
    F: FnMut(&str) -> std::result::Result<String, E>,
{
    let pairs = to_pairs(obj)
        .into_iter()
        .map(|(key, value)| Ok((f(&key)?, value)))
        .collect::<std::result::Result<Vec<_>, E>>()?;
    Ok(from_pairs(pairs))
}

/// Keys whose values are functions, in discovery order
#[must_use]
pub fn method_names(obj: &Value) -> Vec<String> {
    pick_by(|value, _| is_function(value), &entries(obj))
        .into_keys()
        .collect()
}

/// `{key: f(key)}` for every key, in order
pub fn obj_from_keys<F>(f: F, keys: &[String]) -> Record
where
    F: FnMut(&str) -> Value,
{
    let values: Vec<Value> = keys.iter().map(String::as_str).map(f).collect();
    zip_obj(keys, &values)
}

/// Fallible [`obj_from_keys`]; stops at the first error
pub fn try_obj_from_keys<F, E>(f: F, keys: &[String]) -> std::result::Result<Record, E>
where
    F: FnMut(&str) -> std::result::Result<Value, E>,
{
    let values = keys
        .iter()
        .map(String::as_str)
        .map(f)
        .collect::<std::result::Result<Vec<_>, E>>()?;
    Ok(zip_obj(keys, &values))
}

/// Size of a value, checked in this order:
///
/// 1. arrays, records, dates and functions: their key count
/// 2. booleans: `None` for `false`, `1` for `true`
/// 3. numbers: the length of their string form (`123` → 3)
/// 4. null and undefined: 0
/// 5. strings: their length in UTF-16 code units
#[must_use]
pub fn obj_size(x: &Value) -> Option<usize> {
    match x {
        Value::Array(_) | Value::Object(_) | Value::Date(_) | Value::Function(_) => {
            Some(entries(x).len())
        }
        Value::Bool(false) => None,
        Value::Bool(true) => Some(1),
        Value::Number(n) => Value::String(rcb_core::number_to_string(*n)).length(),
        Value::Undefined | Value::Null => Some(0),
        Value::String(_) => x.length(),
    }
}
