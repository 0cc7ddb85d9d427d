//! Dynamic value model: values, kinds, dates, numbers and curried functions

mod date;
mod function;
mod kind;
pub mod number;
mod value;

pub use date::Date;
pub use function::{Function, NativeFn};
pub use kind::Kind;
pub use number::{number_to_string, parse_number};
pub use value::{Record, Value};
