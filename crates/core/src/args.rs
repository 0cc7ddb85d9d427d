//! Argument extraction for namespace functions

use crate::constants::MAX_LIST_LENGTH;
use crate::errors::{Error, Result};
use crate::types::{Function, Record, Value};

/// The argument as a function, or a not-callable error naming it
pub fn function<'a>(value: &'a Value) -> Result<&'a Function> {
    value
        .as_function()
        .ok_or_else(|| Error::not_callable(value.to_js_string(), value.kind()))
}

/// Every element of an array argument as a function
pub fn functions(op: &str, value: &Value) -> Result<Vec<Function>> {
    array(op, value)?
        .iter()
        .map(|item| function(item).cloned())
        .collect()
}

/// The argument as an array slice
pub fn array<'a>(op: &str, value: &'a Value) -> Result<&'a [Value]> {
    value
        .as_array()
        .ok_or_else(|| Error::invalid_argument(op, format!("expected Array, found {}", value.kind())))
}

/// The argument as a record
pub fn record<'a>(op: &str, value: &'a Value) -> Result<&'a Record> {
    value
        .as_object()
        .ok_or_else(|| Error::invalid_argument(op, format!("expected Object, found {}", value.kind())))
}

/// An array argument with every element coerced to a string key
pub fn keys(op: &str, value: &Value) -> Result<Vec<String>> {
    Ok(array(op, value)?.iter().map(Value::to_js_string).collect())
}

/// A non-negative integer count no larger than [`MAX_LIST_LENGTH`]
pub fn count(op: &str, value: &Value) -> Result<usize> {
    let n = value.to_number();
    if !(n.is_finite() && n >= 0.0 && n.fract() == 0.0) {
        return Err(Error::invalid_argument(
            op,
            format!("expected a non-negative integer, found {}", value.to_js_string()),
        ));
    }
    if n > MAX_LIST_LENGTH {
        return Err(Error::invalid_argument(
            op,
            format!("count {} exceeds {MAX_LIST_LENGTH}", value.to_js_string()),
        ));
    }
    Ok(n as usize)
}

/// An end position for slicing; undefined means the end of the sequence
pub fn end_position(value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::INFINITY,
        other => other.to_number(),
    }
}
