//! Combinators over curried [`Function`] values
//!
//! Dynamic counterparts of [`operators`](super::composition::operators):
//! they take and return `Function`s so they can be registered in a
//! [`Namespace`](crate::Namespace) and composed at runtime.

use crate::errors::{Error, Result};
use crate::types::{Function, Value};

/// Returns its first argument
#[must_use]
pub fn identity() -> Function {
    Function::new("identity", 1, |args| Ok(args[0].clone()))
}

/// A variadic function always returning `value`
#[must_use]
pub fn always(value: Value) -> Function {
    Function::variadic("always", move |_| Ok(value.clone()))
}

/// Curry `f` to exactly `arity` arguments
#[must_use]
pub fn curry_n(arity: usize, f: Function) -> Function {
    let name = f.name().to_string();
    Function::new(name, arity, move |args| f.call(args))
}

/// Boolean negation of `f`'s result, with the same arity
#[must_use]
pub fn complement(f: Function) -> Function {
    let name = format!("complement({})", f.name());
    Function::new(name, f.arity(), move |args| {
        Ok(Value::Bool(!f.call(args)?.is_truthy()))
    })
}

/// `f(args) && g(args)`, returning the deciding result
#[must_use]
pub fn both(f: Function, g: Function) -> Function {
    let arity = f.arity().max(g.arity());
    Function::new("both", arity, move |args| {
        let first = f.call(args)?;
        if first.is_truthy() {
            g.call(args)
        } else {
            Ok(first)
        }
    })
}

/// Apply `f` to the argument when `predicate` holds for it
#[must_use]
pub fn when(predicate: Function, f: Function) -> Function {
    Function::new("when", 1, move |args| {
        if predicate.call(&args[..1])?.is_truthy() {
            f.call(&args[..1])
        } else {
            Ok(args[0].clone())
        }
    })
}

/// Swap the first two arguments of `f`
#[must_use]
pub fn flip(f: Function) -> Function {
    let name = format!("flip({})", f.name());
    let arity = f.arity().max(2);
    Function::new(name, arity, move |args| {
        let mut swapped = args.to_vec();
        swapped.swap(0, 1);
        f.call(&swapped)
    })
}

/// Left-to-right composition; the first function takes the call's arguments
pub fn pipe(functions: Vec<Function>) -> Result<Function> {
    let mut iter = functions.into_iter();
    let first = iter
        .next()
        .ok_or_else(|| Error::invalid_argument("pipe", "requires at least one function"))?;
    let rest: Vec<Function> = iter.collect();

    let arity = first.arity();
    Ok(Function::new("pipe", arity, move |args| {
        let mut acc = first.call(args)?;
        for f in &rest {
            acc = f.call1(acc)?;
        }
        Ok(acc)
    }))
}

/// Right-to-left composition; the last function takes the call's arguments
pub fn compose(mut functions: Vec<Function>) -> Result<Function> {
    if functions.is_empty() {
        return Err(Error::invalid_argument(
            "compose",
            "requires at least one function",
        ));
    }
    functions.reverse();
    pipe(functions).map(|f| f.renamed("compose"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double() -> Function {
        Function::unary("double", |v| Ok(Value::from(v.to_number() * 2.0)))
    }

    fn increment() -> Function {
        Function::unary("increment", |v| Ok(Value::from(v.to_number() + 1.0)))
    }

    fn is_positive() -> Function {
        Function::predicate("isPositive", |v| v.to_number() > 0.0)
    }

    #[test]
    fn test_pipe_and_compose_order() {
        let piped = pipe(vec![double(), increment()]).unwrap();
        assert_eq!(piped.call1(Value::from(5)).unwrap(), Value::from(11));

        let composed = compose(vec![double(), increment()]).unwrap();
        assert_eq!(composed.call1(Value::from(5)).unwrap(), Value::from(12));
        assert_eq!(composed.name(), "compose");
    }

    #[test]
    fn test_empty_composition_fails() {
        assert!(pipe(vec![]).is_err());
        assert!(compose(vec![]).is_err());
    }

    #[test]
    fn test_complement_and_both() {
        let not_positive = complement(is_positive());
        assert_eq!(not_positive.call1(Value::from(-1)).unwrap(), Value::Bool(true));
        assert_eq!(not_positive.arity(), 1);

        let small = Function::predicate("isSmall", |v| v.to_number() < 10.0);
        let in_range = both(is_positive(), small);
        assert_eq!(in_range.call1(Value::from(5)).unwrap(), Value::Bool(true));
        assert_eq!(in_range.call1(Value::from(50)).unwrap(), Value::Bool(false));
        assert_eq!(in_range.call1(Value::from(-5)).unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_when() {
        let double_positive = when(is_positive(), double());
        assert_eq!(double_positive.call1(Value::from(4)).unwrap(), Value::from(8));
        assert_eq!(double_positive.call1(Value::from(-4)).unwrap(), Value::from(-4));
    }

    #[test]
    fn test_flip_and_curry_n() {
        let minus = Function::binary("minus", |a, b| {
            Ok(Value::from(a.to_number() - b.to_number()))
        });
        let flipped = flip(minus);
        assert_eq!(
            flipped.call(&[Value::from(1), Value::from(10)]).unwrap(),
            Value::from(9)
        );

        let count = Function::variadic("count", |args| Ok(Value::from(args.len())));
        let count2 = curry_n(2, count);
        let Value::Function(partial) = count2.call(&[Value::Null]).unwrap() else {
            panic!("expected a partial application");
        };
        assert_eq!(partial.call(&[Value::Null, Value::Null]).unwrap(), Value::from(3));
    }

    #[test]
    fn test_identity_and_always() {
        assert_eq!(identity().call1(Value::from("x")).unwrap(), Value::from("x"));
        assert_eq!(always(Value::Null).call(&[]).unwrap(), Value::Null);
    }
}
