//! Type predicates and their complements
//!
//! Predicates never fail: anything they cannot classify is simply `false`
//! (or `true` for the `is_not_*` side).

use rcb_core::functional::{both, complement};
use rcb_core::{Kind, Value};

use crate::coerce::to_date;

/// A named predicate, as registered in the namespace
pub type NamedPredicate = (&'static str, fn(&Value) -> bool);

macro_rules! kind_predicates {
    ($($is:ident, $is_not:ident => $kind:expr;)*) => {
        $(
            #[doc = concat!("Whether the value is an instance of `", stringify!($kind), "`")]
            #[must_use]
            pub fn $is(value: &Value) -> bool {
                value.is_a($kind)
            }

            #[doc = concat!("Complement of [`", stringify!($is), "`]")]
            #[must_use]
            pub fn $is_not(value: &Value) -> bool {
                complement($is)(value)
            }
        )*
    };
}

kind_predicates! {
    is_array, is_not_array => Kind::Array;
    is_boolean, is_not_boolean => Kind::Boolean;
    is_date, is_not_date => Kind::Date;
    is_function, is_not_function => Kind::Function;
    is_number, is_not_number => Kind::Number;
    is_object, is_not_object => Kind::Object;
    is_string, is_not_string => Kind::String;
}

/// Whether the value is a number other than NaN, or coerces to one.
///
/// `"42"`, `null`, booleans and `[]` pass through coercion; `"abc"` and
/// undefined do not.
#[must_use]
pub fn is_numeric(value: &Value) -> bool {
    let number = value.as_number().unwrap_or_else(|| value.to_number());
    !number.is_nan()
}

#[must_use]
pub fn is_not_numeric(value: &Value) -> bool {
    complement(is_numeric)(value)
}

/// Object-like but neither an array nor a function. Records and dates both
/// qualify.
#[must_use]
pub fn is_plain_object(value: &Value) -> bool {
    both(is_object, both(is_not_array, is_not_function))(value)
}

#[must_use]
pub fn is_not_plain_object(value: &Value) -> bool {
    complement(is_plain_object)(value)
}

/// Whether the value is, or converts through [`to_date`] to, a date with a
/// numeric time value
#[must_use]
pub fn is_valid_date(value: &Value) -> bool {
    match value {
        Value::Date(date) => date.is_valid(),
        other => to_date(std::slice::from_ref(other)).is_valid(),
    }
}

#[must_use]
pub fn is_not_valid_date(value: &Value) -> bool {
    complement(is_valid_date)(value)
}

/// Whether the value is undefined; null does not count
#[must_use]
pub fn is_undefined(value: &Value) -> bool {
    value.kind() == Kind::Undefined
}

#[must_use]
pub fn is_not_undefined(value: &Value) -> bool {
    complement(is_undefined)(value)
}

/// Every predicate under its namespace name
pub const PREDICATES: &[NamedPredicate] = &[
    ("isArray", is_array),
    ("isNotArray", is_not_array),
    ("isBoolean", is_boolean),
    ("isNotBoolean", is_not_boolean),
    ("isDate", is_date),
    ("isNotDate", is_not_date),
    ("isFunction", is_function),
    ("isNotFunction", is_not_function),
    ("isNumber", is_number),
    ("isNotNumber", is_not_number),
    ("isNumeric", is_numeric),
    ("isNotNumeric", is_not_numeric),
    ("isObject", is_object),
    ("isNotObject", is_not_object),
    ("isPlainObject", is_plain_object),
    ("isNotPlainObject", is_not_plain_object),
    ("isString", is_string),
    ("isNotString", is_not_string),
    ("isValidDate", is_valid_date),
    ("isNotValidDate", is_not_valid_date),
    ("isUndefined", is_undefined),
    ("isNotUndefined", is_not_undefined),
];
