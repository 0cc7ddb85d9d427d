//! Base library for `rcb`: a dynamic value model and the functional
//! primitives the utility set is composed from.
//!
//! ## Key Components
//!
//! - **`types`**: [`Value`], its runtime [`Kind`], [`Date`] and curried
//!   [`Function`] values, plus the number/string coercion rules.
//! - **`functional`**: composition helpers for typed closures and the
//!   equivalent combinators over `Function` values.
//! - **`collection`**: record and list primitives (`keys`, `merge`, `pick`,
//!   `group_by`, `slice`, ...).
//! - **`namespace`**: name → function registries; [`Namespace::base`] holds
//!   every primitive above, curried.
//! - **`errors`**: the [`Error`] enum and [`Result`] alias.
//! - **`constants`**: shared literals and limits.

pub mod args;
pub mod collection;
pub mod constants;
pub mod errors;
pub mod functional;
mod library;
pub mod namespace;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    namespace::Namespace,
    types::*,
};
