//! Curried function values

use std::fmt;
use std::sync::Arc;

use super::Value;
use crate::errors::Result;

/// The native body behind a [`Function`]
pub type NativeFn = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// A named, curried callable.
///
/// A function declares an arity. Calling it with fewer arguments than it is
/// still missing returns a new `Function` holding the arguments given so
/// far; once enough arguments are collected the body runs with all of them,
/// including any extras. An arity of zero makes the function variadic: every
/// call runs the body.
///
/// Partial applications are independent values. They share the immutable
/// body and nothing else.
#[derive(Clone)]
pub struct Function {
    name: Arc<str>,
    arity: usize,
    bound: Vec<Value>,
    body: Arc<NativeFn>,
}

impl Function {
    /// Create a function curried to `arity` arguments
    pub fn new<F>(name: impl Into<Arc<str>>, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity,
            bound: Vec::new(),
            body: Arc::new(body),
        }
    }

    /// Create a function that runs on every call, whatever the argument count
    pub fn variadic<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(name, 0, body)
    }

    /// Create a one-argument function
    pub fn unary<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(name, 1, move |args| body(&args[0]))
    }

    /// Create a one-argument function returning a boolean
    pub fn predicate<F>(name: impl Into<Arc<str>>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(name, 1, move |args| Ok(Value::Bool(test(&args[0]))))
    }

    /// Create a two-argument function
    pub fn binary<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&Value, &Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(name, 2, move |args| body(&args[0], &args[1]))
    }

    /// Create a three-argument function
    pub fn ternary<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&Value, &Value, &Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(name, 3, move |args| body(&args[0], &args[1], &args[2]))
    }

    /// Wrap this function so it always receives exactly `n` arguments:
    /// extras are dropped and missing ones are undefined. The wrapper is not
    /// curried.
    #[must_use]
    pub fn n_ary(&self, n: usize) -> Self {
        let inner = self.clone();
        Self::variadic(Arc::clone(&self.name), move |args| {
            let mut fixed: Vec<Value> = args.iter().take(n).cloned().collect();
            fixed.resize(n, Value::Undefined);
            inner.call(&fixed)
        })
    }

    /// Same function under another name
    #[must_use]
    pub fn renamed(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Function name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of arguments still missing before the body runs
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity.saturating_sub(self.bound.len())
    }

    /// Arguments captured by partial application
    #[must_use]
    pub fn bound_args(&self) -> &[Value] {
        &self.bound
    }

    /// Invoke with `args`, returning either the result or a partial application
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        let supplied = self.bound.len() + args.len();
        if supplied < self.arity {
            if args.is_empty() {
                return Ok(Value::Function(self.clone()));
            }
            let mut bound = Vec::with_capacity(supplied);
            bound.extend_from_slice(&self.bound);
            bound.extend_from_slice(args);
            return Ok(Value::Function(Self {
                name: Arc::clone(&self.name),
                arity: self.arity,
                bound,
                body: Arc::clone(&self.body),
            }));
        }

        if self.bound.is_empty() {
            return (self.body)(args);
        }
        let mut all = Vec::with_capacity(supplied);
        all.extend_from_slice(&self.bound);
        all.extend_from_slice(args);
        (self.body)(&all)
    }

    /// Invoke with a single argument
    pub fn call1(&self, arg: Value) -> Result<Value> {
        self.call(std::slice::from_ref(&arg))
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .field("bound", &self.bound)
            .finish()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
            && self.arity == other.arity
            && self.bound == other.bound
    }
}
