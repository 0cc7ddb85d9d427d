//! Functional programming utilities for rcb
//!
//! Typed composition helpers for Rust closures live in [`composition`];
//! combinators over dynamic [`Function`](crate::Function) values live in
//! [`combinators`].

pub mod combinators;
pub mod composition;

pub use composition::operators::{both, complement, flip};
pub use composition::Pipe;
