//! Core error type definitions

use crate::types::Kind;

/// Result type alias for rcb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for rcb operations
///
/// These mirror the failures a caller can trigger by misuse. Predicates never
/// produce them and unparseable dates become invalid dates instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A non-function value was invoked
    #[error("'{name}' is not a function (found {kind})")]
    NotCallable { name: String, kind: Kind },

    /// A property was read from null or undefined
    #[error("cannot read property '{property}' of {target}")]
    NilProperty { property: String, target: Kind },

    /// An argument had the right kind but an unusable value
    #[error("invalid argument for '{function}': {message}")]
    InvalidArgument { function: String, message: String },

    /// A namespace lookup found nothing under the given name
    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
