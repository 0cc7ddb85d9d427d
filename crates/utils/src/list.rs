//! List helpers

use rcb_core::collection::{pick_all, slice, values};
use rcb_core::functional::Pipe;
use rcb_core::{Result, Value};

/// Build a `Vec<Value>` from heterogeneous expressions
///
/// ```
/// use rcb_utils::list;
///
/// let items = list![1, "two", true];
/// assert_eq!(items.len(), 3);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        ::std::vec::Vec::<$crate::base::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        vec![$($crate::base::Value::from($item)),+]
    };
}

/// Collect the arguments into a list
pub fn list<I>(items: I) -> Vec<Value>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    items.into_iter().map(Into::into).collect()
}

/// Exactly `n` items: extras are dropped, missing ones are undefined
pub fn list_n<I>(n: usize, items: I) -> Vec<Value>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let mut fixed: Vec<Value> = items.into_iter().take(n).map(Into::into).collect();
    fixed.resize(n, Value::Undefined);
    fixed
}

/// Everything from `index` on; negative indexes count from the end
pub fn slice_from(index: f64, seq: &Value) -> Result<Value> {
    slice(index, f64::INFINITY, seq)
}

/// Everything before `end`; negative ends count from the end
pub fn slice_to(end: f64, seq: &Value) -> Result<Value> {
    slice(0.0, end, seq)
}

/// Items at `indexes`, in the order given. Missing indexes give undefined
/// and a repeated index only counts once.
pub fn pick_indexes<I: ToString>(indexes: &[I], list: &Value) -> Result<Vec<Value>> {
    let names: Vec<String> = indexes.iter().map(ToString::to_string).collect();
    Ok(Pipe::new(list)
        .try_pipe(|list| pick_all(&names, list))?
        .pipe(Value::Object)
        .pipe(|picked| values(&picked))
        .into_inner())
}
