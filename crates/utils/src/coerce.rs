//! Coercions to boolean, date, number and string

use rcb_core::{Date, Value, FALSY_STRINGS};

use crate::predicates::is_numeric;

/// Boolean coercion with string and number rules.
///
/// Strings are true unless they read `false`, `n` or `no` (any case).
/// Numbers are true only when positive. Everything else follows
/// truthiness.
#[must_use]
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::String(s) => !FALSY_STRINGS.contains(&s.to_lowercase().as_str()),
        Value::Number(n) => *n > 0.0,
        other => other.is_truthy(),
    }
}

/// Date from zero or more arguments.
///
/// - no arguments: now
/// - a date: a copy of it
/// - one numeric argument: a timestamp in milliseconds
/// - one string: parsed with [`Date::parse`]
/// - undefined: the invalid date
/// - two or more: `year, month (0-based), day, hours, minutes, seconds, ms`
#[must_use]
pub fn to_date(args: &[Value]) -> Date {
    match args {
        [] => Date::now(),
        [Value::Date(date)] => *date,
        [value] if is_numeric(value) => Date::from_timestamp(value.to_number()),
        [Value::String(text)] => Date::parse(text),
        [Value::Undefined] => Date::invalid(),
        [other] => Date::parse(&other.to_js_string()),
        parts => Date::from_parts(&parts.iter().map(Value::to_number).collect::<Vec<_>>()),
    }
}

/// Numeric coercion
#[must_use]
pub fn to_number(value: &Value) -> f64 {
    value.to_number()
}

/// String coercion
#[must_use]
pub fn to_string(value: &Value) -> String {
    value.to_js_string()
}
