//! The base namespace extended with every helper in this crate

use once_cell::sync::Lazy;
use rcb_core::{args, Error, Function, Namespace, Value};

use crate::predicates::PREDICATES;
use crate::{coerce, list, object};

static NAMESPACE: Lazy<Namespace> = Lazy::new(|| {
    let namespace = Namespace::base().extend_with(extension_functions());
    tracing::debug!(functions = namespace.len(), "built extended namespace");
    namespace
});

/// Every base function plus predicates, object, list and coercion helpers,
/// each curried under its camelCase name. The base namespace is left as is.
///
/// Namespace functions receive their arguments by reference, so `assign`
/// here returns an updated copy of the record rather than the caller's own
/// record. Use [`object::assign`] to set a property in place.
#[must_use]
pub fn namespace() -> &'static Namespace {
    &NAMESPACE
}

fn extension_functions() -> Vec<Function> {
    let mut functions: Vec<Function> = PREDICATES
        .iter()
        .map(|(name, test)| Function::predicate(*name, *test))
        .collect();
    functions.extend(object_functions());
    functions.extend(list_functions());
    functions.extend(coercion_functions());
    functions
}

fn object_functions() -> Vec<Function> {
    vec![
        Function::binary("applyTo", |f, obj| args::function(f)?.call1(obj.clone())),
        Function::ternary("assign", |prop, value, obj| {
            let mut record = args::record("assign", obj)?.clone();
            object::assign(prop.to_js_string(), value.clone(), &mut record);
            Ok(Value::Object(record))
        }),
        Function::binary("defaults", |obj1, obj2| {
            Ok(Value::Object(object::defaults(
                args::record("defaults", obj1)?,
                args::record("defaults", obj2)?,
            )))
        }),
        Function::binary("filterObj", |predicate, obj| {
            let predicate = args::function(predicate)?;
            let kept = object::try_filter_obj(
                |value| Ok::<_, Error>(predicate.call1(value.clone())?.is_truthy()),
                args::record("filterObj", obj)?,
            )?;
            Ok(Value::Object(kept))
        }),
        Function::binary("indexBy", |prop, list| {
            let indexed = object::index_by(&prop.to_js_string(), args::array("indexBy", list)?)?;
            Ok(Value::Object(indexed))
        }),
        Function::binary("mapKeys", |f, obj| {
            let f = args::function(f)?;
            let renamed = object::try_map_keys(
                |key| Ok::<_, Error>(f.call1(Value::from(key))?.to_js_string()),
                args::record("mapKeys", obj)?,
            )?;
            Ok(Value::Object(renamed))
        }),
        Function::unary("methodNames", |obj| {
            Ok(object::method_names(obj).into_iter().map(Value::from).collect())
        }),
        Function::binary("objFromKeys", |f, keys| {
            let f = args::function(f)?;
            let keys = args::keys("objFromKeys", keys)?;
            object::try_obj_from_keys(|key| f.call1(Value::from(key)), &keys).map(Value::Object)
        }),
        Function::unary("objSize", |x| {
            Ok(object::obj_size(x).map_or(Value::Null, Value::from))
        }),
    ]
}

fn list_functions() -> Vec<Function> {
    vec![
        Function::variadic("list", |items| Ok(Value::Array(items.to_vec()))),
        Function::new("listN", 2, |items| {
            let n = args::count("listN", &items[0])?;
            Ok(Value::Array(list::list_n(n, items[1..].iter().cloned())))
        }),
        Function::binary("sliceFrom", |index, seq| list::slice_from(index.to_number(), seq)),
        Function::binary("sliceTo", |end, seq| list::slice_to(args::end_position(end), seq)),
        Function::binary("pickIndexes", |indexes, seq| {
            let indexes = args::keys("pickIndexes", indexes)?;
            list::pick_indexes(&indexes, seq).map(Value::Array)
        }),
    ]
}

fn coercion_functions() -> Vec<Function> {
    vec![
        Function::predicate("toBoolean", coerce::to_boolean),
        Function::variadic("toDate", |parts| Ok(Value::Date(coerce::to_date(parts)))),
        Function::unary("toNumber", |value| Ok(Value::Number(coerce::to_number(value)))),
        Function::unary("toString", |value| Ok(Value::String(coerce::to_string(value)))),
    ]
}
