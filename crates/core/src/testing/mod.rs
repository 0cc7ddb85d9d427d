//! Property-based testing generators for dynamic values
//!
//! Compiled for this crate's own tests and, through the `testing` feature,
//! for dependent crates' tests.

use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use crate::types::{Date, Record, Value};
    use proptest::collection::{btree_map, vec};
    use proptest::string::string_regex;

    /// Record keys: short identifiers
    pub fn key() -> impl Strategy<Value = String> {
        string_regex("[a-z][a-z0-9_]{0,7}").expect("key pattern is valid")
    }

    /// Finite numbers, including integers and fractions
    pub fn finite_number() -> impl Strategy<Value = f64> {
        prop_oneof![
            (-1_000_000i64..1_000_000).prop_map(|n| n as f64),
            (-1.0e6f64..1.0e6),
        ]
    }

    /// Strings that coerce to a finite number
    pub fn numeric_string() -> impl Strategy<Value = String> {
        prop_oneof![
            (-100_000i64..100_000).prop_map(|n| n.to_string()),
            (0u32..1000, 1u32..1000).prop_map(|(i, f)| format!("{i}.{f}")),
            (0u32..0xFFFF).prop_map(|n| format!("0x{n:X}")),
        ]
    }

    /// Strings that coerce to NaN
    pub fn non_numeric_string() -> impl Strategy<Value = String> {
        string_regex("[a-z]{1,8}[0-9]{0,3}").expect("word pattern is valid")
    }

    /// Scalar values: every kind except arrays, records and functions
    pub fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Undefined),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            finite_number().prop_map(Value::Number),
            ".{0,12}".prop_map(Value::String),
            (-8.64e15f64..8.64e15).prop_map(|ms| Value::Date(Date::from_timestamp(ms))),
        ]
    }

    /// Records of scalar values
    pub fn record() -> impl Strategy<Value = Record> {
        btree_map(key(), scalar(), 0..8).prop_map(|map| map.into_iter().collect())
    }

    /// Arrays of scalar values
    pub fn array() -> impl Strategy<Value = Vec<Value>> {
        vec(scalar(), 0..10)
    }

    /// Any value, nesting arrays and records up to a few levels deep
    pub fn value() -> impl Strategy<Value = Value> {
        scalar().prop_recursive(3, 32, 6, |inner| {
            prop_oneof![
                vec(inner.clone(), 0..6).prop_map(Value::Array),
                btree_map(key(), inner, 0..6)
                    .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }
}

/// Property-based tests over the base primitives
#[cfg(test)]
mod property_tests {
    use super::generators::*;
    use crate::collection::{entries, equals, from_pairs, keys, merge, slice, to_pairs};
    use crate::functional::complement;
    use crate::types::{parse_number, Value};
    use proptest::prelude::*;

    proptest! {
        /// Test that to_pairs/from_pairs reproduce a record
        #[test]
        fn pairs_rebuild_record(record in record()) {
            let rebuilt = from_pairs(to_pairs(&record));
            prop_assert_eq!(rebuilt.keys().collect::<Vec<_>>(), record.keys().collect::<Vec<_>>());
            prop_assert!(equals(&Value::Object(rebuilt), &Value::Object(record)));
        }

        /// Test that merge never loses keys
        #[test]
        fn merge_contains_both_key_sets(left in record(), right in record()) {
            let merged = merge(&left, &right);
            for key in left.keys().chain(right.keys()) {
                prop_assert!(merged.contains_key(key));
            }
            for (key, value) in &right {
                prop_assert!(equals(&merged[key], value));
            }
        }

        /// Test that keys and entries agree for any value
        #[test]
        fn keys_match_entries(value in value()) {
            let from_entries: Vec<String> = entries(&value).keys().cloned().collect();
            prop_assert_eq!(keys(&value), from_entries);
        }

        /// Test that slicing a prefix from zero is stable
        #[test]
        fn slice_prefix_is_stable(items in array(), end in 0usize..12) {
            let seq = Value::Array(items);
            let prefix = slice(0.0, end as f64, &seq).unwrap();
            let again = slice(0.0, f64::INFINITY, &prefix).unwrap();
            prop_assert!(equals(&prefix, &again));
        }

        /// Test that numeric strings always parse
        #[test]
        fn numeric_strings_parse(text in numeric_string()) {
            prop_assert!(!parse_number(&text).is_nan());
        }

        /// Test that number rendering round-trips through parsing
        #[test]
        fn number_strings_round_trip(n in finite_number()) {
            let rendered = Value::Number(n).to_js_string();
            prop_assert_eq!(parse_number(&rendered), n);
        }

        /// Test that complement is an involution
        #[test]
        fn complement_twice_is_identity(value in value()) {
            let is_nil = |v: &Value| v.is_nil();
            prop_assert_eq!(complement(complement(is_nil))(&value), is_nil(&value));
        }
    }
}
