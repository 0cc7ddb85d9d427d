//! Property-based tests for the utility helpers

use proptest::prelude::*;
use rcb_core::testing::generators::{
    array, finite_number, non_numeric_string, numeric_string, record, value,
};
use rcb_utils::{
    defaults, filter_obj, is_array, is_boolean, is_date, is_function, is_not_numeric, is_number,
    is_numeric, is_string, is_undefined, list_n, map_keys, obj_size, slice_from, slice_to,
    to_boolean, to_string, Kind, NamedPredicate, Value, PREDICATES,
};

/// Every predicate paired with its complement
fn complement_pairs() -> Vec<(NamedPredicate, NamedPredicate)> {
    PREDICATES
        .chunks(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

proptest! {
    /// Property: is_x and is_not_x always disagree
    #[test]
    fn predicates_and_complements_disagree(v in value()) {
        for ((is_name, is), (is_not_name, is_not)) in complement_pairs() {
            prop_assert_ne!(is(&v), is_not(&v), "{} / {} agree on {:?}", is_name, is_not_name, v);
        }
    }

    /// Property: a kind predicate holds exactly when the value has that kind
    #[test]
    fn kind_predicates_follow_kind(v in value()) {
        let by_kind: [(fn(&Value) -> bool, Kind); 7] = [
            (is_array, Kind::Array),
            (is_boolean, Kind::Boolean),
            (is_date, Kind::Date),
            (is_function, Kind::Function),
            (is_number, Kind::Number),
            (is_string, Kind::String),
            (is_undefined, Kind::Undefined),
        ];
        for (predicate, kind) in by_kind {
            prop_assert_eq!(predicate(&v), v.kind() == kind);
        }
    }

    /// Property: numeric strings pass is_numeric, words do not
    #[test]
    fn numeric_strings_are_numeric(text in numeric_string(), word in non_numeric_string()) {
        prop_assert!(is_numeric(&Value::from(text)));
        prop_assert!(is_not_numeric(&Value::from(word)));
    }

    /// Property: obj_size of a record is its key count
    #[test]
    fn obj_size_counts_record_keys(r in record()) {
        let expected = r.len();
        prop_assert_eq!(obj_size(&Value::Object(r)), Some(expected));
    }

    /// Property: obj_size of a number is the length of its string form
    #[test]
    fn obj_size_of_numbers(n in finite_number()) {
        let v = Value::from(n);
        prop_assert_eq!(obj_size(&v), Some(to_string(&v).len()));
    }

    /// Property: slicing from zero after slicing to an end changes nothing
    #[test]
    fn slice_from_zero_after_slice_to(items in array(), end in -12i32..12) {
        let seq = Value::Array(items);
        let prefix = slice_to(f64::from(end), &seq).unwrap();
        prop_assert_eq!(slice_from(0.0, &prefix).unwrap(), prefix);
    }

    /// Property: a prefix and its suffix rebuild the sequence
    #[test]
    fn slice_to_and_from_split(items in array(), at in 0usize..12) {
        let seq = Value::Array(items.clone());
        let head = slice_to(at as f64, &seq).unwrap();
        let tail = slice_from(at as f64, &seq).unwrap();
        let rebuilt: Vec<Value> = head
            .as_array()
            .unwrap()
            .iter()
            .chain(tail.as_array().unwrap())
            .cloned()
            .collect();
        prop_assert_eq!(rebuilt, items);
    }

    /// Property: list_n always yields exactly n items
    #[test]
    fn list_n_has_requested_length(items in array(), n in 0usize..16) {
        let fixed = list_n(n, items.clone());
        prop_assert_eq!(fixed.len(), n);
        for (got, original) in fixed.iter().zip(&items) {
            prop_assert_eq!(got, original);
        }
    }

    /// Property: defaults prefers the first record and keeps every key
    #[test]
    fn defaults_prefers_first_record(obj1 in record(), obj2 in record()) {
        let merged = defaults(&obj1, &obj2);
        for (key, v) in &obj1 {
            prop_assert_eq!(&merged[key], v);
        }
        for key in obj2.keys() {
            prop_assert!(merged.contains_key(key));
        }
    }

    /// Property: map_keys with identity reproduces the record
    #[test]
    fn map_keys_identity(r in record()) {
        prop_assert_eq!(map_keys(str::to_string, &r), r);
    }

    /// Property: filter_obj never adds keys and keeps order
    #[test]
    fn filter_obj_is_a_subsequence(r in record()) {
        let kept = filter_obj(is_number, &r);
        let original_order: Vec<&String> = r.keys().filter(|key| kept.contains_key(*key)).collect();
        prop_assert_eq!(kept.keys().collect::<Vec<_>>(), original_order);
        prop_assert!(kept.values().all(is_number));
    }

    /// Property: to_boolean of a number is its sign
    #[test]
    fn to_boolean_of_numbers(n in finite_number()) {
        prop_assert_eq!(to_boolean(&Value::from(n)), n > 0.0);
    }
}
