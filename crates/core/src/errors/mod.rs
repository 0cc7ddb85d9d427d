//! Error types for rcb operations

mod builders;
mod conversions;
mod types;

pub use types::{Error, Result};
