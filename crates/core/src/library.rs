//! The base function set registered in [`Namespace::base`](crate::Namespace::base)

use crate::args;
use crate::collection;
use crate::functional::combinators;
use crate::types::{Function, Kind, Value};

/// Every base function, curried, under its camelCase name
pub(crate) fn base_functions() -> Vec<Function> {
    let mut functions = combinator_functions();
    functions.extend(collection_functions());
    functions.extend(misc_functions());
    functions
}

fn combinator_functions() -> Vec<Function> {
    vec![
        combinators::identity(),
        Function::unary("always", |value| {
            Ok(Value::Function(combinators::always(value.clone())))
        }),
        Function::variadic("T", |_| Ok(Value::Bool(true))),
        Function::variadic("F", |_| Ok(Value::Bool(false))),
        Function::unary("not", |value| Ok(Value::Bool(!value.is_truthy()))),
        Function::unary("complement", |f| {
            Ok(Value::Function(combinators::complement(args::function(f)?.clone())))
        }),
        Function::binary("both", |f, g| {
            Ok(Value::Function(combinators::both(
                args::function(f)?.clone(),
                args::function(g)?.clone(),
            )))
        }),
        Function::binary("when", |predicate, f| {
            Ok(Value::Function(combinators::when(
                args::function(predicate)?.clone(),
                args::function(f)?.clone(),
            )))
        }),
        Function::unary("flip", |f| {
            Ok(Value::Function(combinators::flip(args::function(f)?.clone())))
        }),
        Function::variadic("pipe", |fs| {
            let fs = fs.iter().map(|f| args::function(f).cloned()).collect::<Result<_, _>>()?;
            combinators::pipe(fs).map(Value::Function)
        }),
        Function::variadic("compose", |fs| {
            let fs = fs.iter().map(|f| args::function(f).cloned()).collect::<Result<_, _>>()?;
            combinators::compose(fs).map(Value::Function)
        }),
        Function::unary("curry", |f| {
            let f = args::function(f)?;
            Ok(Value::Function(combinators::curry_n(f.arity(), f.clone())))
        }),
        Function::binary("curryN", |n, f| {
            let n = args::count("curryN", n)?;
            Ok(Value::Function(combinators::curry_n(n, args::function(f)?.clone())))
        }),
        Function::binary("nAry", |n, f| {
            let n = args::count("nAry", n)?;
            Ok(Value::Function(args::function(f)?.n_ary(n)))
        }),
        Function::binary("applyAll", |fs, value| {
            let results = args::functions("applyAll", fs)?
                .iter()
                .map(|f| f.call1(value.clone()))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Array(results))
        }),
    ]
}

fn collection_functions() -> Vec<Function> {
    vec![
        Function::unary("keys", |value| {
            Ok(collection::keys(value).into_iter().map(Value::from).collect())
        }),
        Function::unary("values", |value| Ok(Value::Array(collection::values(value)))),
        Function::unary("toPairs", |value| {
            Ok(collection::to_pairs(&collection::entries(value))
                .into_iter()
                .map(|(key, value)| Value::Array(vec![Value::String(key), value]))
                .collect())
        }),
        Function::unary("fromPairs", |pairs| {
            let pairs = args::array("fromPairs", pairs)?
                .iter()
                .map(|pair| -> crate::Result<(String, Value)> {
                    Ok((pair.prop("0")?.to_js_string(), pair.prop("1")?))
                })
                .collect::<crate::Result<Vec<_>>>()?;
            Ok(Value::Object(collection::from_pairs(pairs)))
        }),
        Function::binary("zipObj", |keys, values| {
            let keys = args::keys("zipObj", keys)?;
            let values = args::array("zipObj", values)?;
            Ok(Value::Object(collection::zip_obj(&keys, values)))
        }),
        Function::binary("merge", |left, right| {
            Ok(Value::Object(collection::merge(
                &collection::entries(left),
                &collection::entries(right),
            )))
        }),
        Function::binary("pick", |names, value| {
            let names = args::keys("pick", names)?;
            Ok(Value::Object(collection::pick(&names, &collection::entries(value))))
        }),
        Function::binary("pickAll", |names, value| {
            let names = args::keys("pickAll", names)?;
            collection::pick_all(&names, value).map(Value::Object)
        }),
        Function::binary("pickBy", |predicate, value| {
            let predicate = args::function(predicate)?;
            let picked = collection::try_pick_by(
                |item, key| {
                    Ok::<_, crate::Error>(
                        predicate
                            .call(&[item.clone(), Value::from(key)])?
                            .is_truthy(),
                    )
                },
                &collection::entries(value),
            )?;
            Ok(Value::Object(picked))
        }),
        Function::binary("groupBy", |key_of, list| {
            let key_of = args::function(key_of)?;
            let groups = collection::try_group_by(
                |item| Ok::<_, crate::Error>(key_of.call1(item.clone())?.to_js_string()),
                args::array("groupBy", list)?,
            )?;
            Ok(Value::Object(
                groups
                    .into_iter()
                    .map(|(key, items)| (key, Value::Array(items)))
                    .collect(),
            ))
        }),
        Function::binary("prop", |name, value| value.prop(&name.to_js_string())),
        Function::unary("head", |list| match list {
            Value::String(_) => collection::slice(0.0, 1.0, list),
            _ => Ok(collection::head(args::array("head", list)?)),
        }),
        Function::unary("tail", |list| match list {
            Value::String(_) => collection::slice(1.0, f64::INFINITY, list),
            _ => Ok(Value::Array(collection::tail(args::array("tail", list)?))),
        }),
        Function::ternary("slice", |from, to, seq| {
            collection::slice(from.to_number(), args::end_position(to), seq)
        }),
        Function::binary("concat", collection::concat),
        Function::binary("repeat", |value, n| {
            let n = args::count("repeat", n)?;
            Ok(Value::Array(collection::repeat(value, n)))
        }),
        Function::unary("length", |value| {
            Ok(Value::from(value.length().map_or(f64::NAN, |len| len as f64)))
        }),
        Function::binary("map", |f, list| {
            let f = args::function(f)?;
            args::array("map", list)?
                .iter()
                .map(|item| f.call1(item.clone()))
                .collect()
        }),
        Function::binary("filter", |predicate, list| {
            let predicate = args::function(predicate)?;
            let mut kept = Vec::new();
            for item in args::array("filter", list)? {
                if predicate.call1(item.clone())?.is_truthy() {
                    kept.push(item.clone());
                }
            }
            Ok(Value::Array(kept))
        }),
    ]
}

fn misc_functions() -> Vec<Function> {
    vec![
        Function::predicate("isNil", Value::is_nil),
        Function::binary("equals", |left, right| {
            Ok(Value::Bool(collection::equals(left, right)))
        }),
        Function::binary("is", |kind, value| {
            let kind: Kind = kind.to_js_string().parse()?;
            Ok(Value::Bool(value.is_a(kind)))
        }),
        Function::unary("toLower", |value| {
            Ok(Value::String(value.to_js_string().to_lowercase()))
        }),
        Function::unary("toUpper", |value| {
            Ok(Value::String(value.to_js_string().to_uppercase()))
        }),
    ]
}
