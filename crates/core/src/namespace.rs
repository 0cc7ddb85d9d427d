//! Name → curried function registries

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::fmt;

use crate::errors::{Error, Result};
use crate::library;
use crate::types::{Function, Value};

static BASE: Lazy<Namespace> = Lazy::new(|| {
    let namespace = Namespace::from_functions(library::base_functions());
    tracing::debug!(functions = namespace.len(), "built base namespace");
    namespace
});

/// An ordered mapping from names to curried functions
#[derive(Clone, Default)]
pub struct Namespace {
    functions: IndexMap<String, Function>,
}

impl Namespace {
    /// Create an empty namespace
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The base function set, built once
    #[must_use]
    pub fn base() -> &'static Namespace {
        &BASE
    }

    /// Build a namespace keyed by each function's name
    pub fn from_functions(functions: impl IntoIterator<Item = Function>) -> Self {
        let mut namespace = Self::new();
        for function in functions {
            namespace.insert(function);
        }
        namespace
    }

    /// Register `function` under its name, returning any function it replaces
    pub fn insert(&mut self, function: Function) -> Option<Function> {
        self.functions.insert(function.name().to_string(), function)
    }

    /// A copy of this namespace with `functions` added on top; `self` is left
    /// unchanged
    #[must_use]
    pub fn extend_with(&self, functions: impl IntoIterator<Item = Function>) -> Self {
        let mut extended = self.clone();
        for function in functions {
            if let Some(previous) = extended.insert(function) {
                tracing::trace!(name = previous.name(), "namespace entry overridden");
            }
        }
        extended
    }

    /// Look up a function by name
    pub fn get(&self, name: &str) -> Result<&Function> {
        self.functions.get(name).ok_or_else(|| {
            tracing::debug!(name, "namespace lookup miss");
            Error::unknown_function(name)
        })
    }

    /// Look up and invoke a function
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        self.get(name)?.call(args)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Function)> {
        self.functions.iter().map(|(name, f)| (name.as_str(), f))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_base_contents() {
        let base = Namespace::base();
        for name in [
            "identity", "always", "complement", "both", "when", "flip", "pipe", "compose",
            "curry", "curryN", "nAry", "keys", "values", "toPairs", "fromPairs", "zipObj",
            "merge", "pick", "pickAll", "pickBy", "groupBy", "prop", "head", "tail", "slice",
            "concat", "repeat", "length", "map", "filter", "isNil", "equals", "is", "toLower",
        ] {
            assert!(base.contains(name), "missing base function {name}");
        }
    }

    #[test]
    fn test_unknown_function() {
        let err = Namespace::base().call("nope", &[]).unwrap_err();
        assert!(matches!(err, Error::UnknownFunction { .. }));
    }

    #[test]
    fn test_extend_leaves_original_untouched() {
        let base = Namespace::base();
        let extra = Function::variadic("answer", |_| Ok(Value::from(42)));
        let extended = base.extend_with([extra]);

        assert!(extended.contains("answer"));
        assert!(!base.contains("answer"));
        assert_eq!(extended.len(), base.len() + 1);
        assert_eq!(extended.call("answer", &[]).unwrap(), Value::from(42));
    }

    #[test]
    fn test_curried_calls_through_namespace() {
        let base = Namespace::base();
        let Value::Function(prop_id) = base.call("prop", &[Value::from("id")]).unwrap() else {
            panic!("expected a partial application");
        };
        assert_eq!(prop_id.call1(v(json!({"id": 7}))).unwrap(), Value::from(7));
    }

    #[test]
    fn test_group_by_and_map() {
        let base = Namespace::base();
        let to_lower = base.get("toLower").unwrap().clone();
        let grouped = base
            .call("groupBy", &[Value::Function(to_lower), v(json!(["A", "a", "b"]))])
            .unwrap();
        assert_eq!(grouped, v(json!({"a": ["A", "a"], "b": ["b"]})));

        let not = base.get("not").unwrap().clone();
        let mapped = base
            .call("map", &[Value::Function(not), v(json!([0, 1]))])
            .unwrap();
        assert_eq!(mapped, v(json!([true, false])));
    }

    #[test]
    fn test_pipe_of_namespace_functions() {
        let base = Namespace::base();
        let keys = Value::Function(base.get("keys").unwrap().clone());
        let length = Value::Function(base.get("length").unwrap().clone());
        let Value::Function(count_keys) = base.call("pipe", &[keys, length]).unwrap() else {
            panic!("expected a function");
        };
        assert_eq!(count_keys.call1(v(json!({"a": 1, "b": 2}))).unwrap(), Value::from(2));
    }

    #[test]
    fn test_is_by_kind_name() {
        let base = Namespace::base();
        assert_eq!(
            base.call("is", &[Value::from("Object"), v(json!([1]))]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            base.call("is", &[Value::from("Number"), Value::from("1")]).unwrap(),
            Value::Bool(false)
        );
        assert!(base.call("is", &[Value::from("Symbol"), Value::Null]).is_err());
    }
}
