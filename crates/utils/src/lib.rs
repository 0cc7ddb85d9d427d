//! Utility functions on top of the `rcb-core` base library
//!
//! Every helper comes in two forms: a typed Rust function taking all of its
//! arguments at once, and a curried [`Function`](rcb_core::Function)
//! registered in [`namespace()`] under its camelCase name.
//!
//! ```
//! use rcb_utils::{namespace, obj_size, Value};
//!
//! assert_eq!(obj_size(&Value::from("abcd")), Some(4));
//!
//! let size = namespace().call("objSize", &[Value::from(123)]).unwrap();
//! assert_eq!(size, Value::from(3));
//! ```
//!
//! ## Modules
//!
//! - **`predicates`**: `is_*` type checks and their `is_not_*` complements
//! - **`object`**: record helpers (`defaults`, `index_by`, `map_keys`, ...)
//! - **`list`**: list construction and slicing
//! - **`coerce`**: boolean, date, number and string coercions
//! - **`logging`**: tracing subscriber setup

pub use rcb_core as base;

pub mod coerce;
pub mod list;
pub mod logging;
pub mod namespace;
pub mod object;
pub mod predicates;

pub use coerce::{to_boolean, to_date, to_number, to_string};
pub use list::{list, list_n, pick_indexes, slice_from, slice_to};
pub use namespace::namespace;
pub use object::{
    apply_to, assign, defaults, filter_obj, index_by, map_keys, method_names, obj_from_keys,
    obj_size, try_filter_obj, try_map_keys, try_obj_from_keys,
};
pub use predicates::*;
pub use rcb_core::{Date, Error, Function, Kind, Namespace, Record, Result, Value};
