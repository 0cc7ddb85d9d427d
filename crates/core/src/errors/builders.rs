//! Builder methods for creating errors with context

use super::types::Error;
use crate::types::Kind;

impl Error {
    /// Create an error for invoking a value that is not a function
    #[must_use]
    pub fn not_callable(name: impl Into<String>, kind: Kind) -> Self {
        Error::NotCallable {
            name: name.into(),
            kind,
        }
    }

    /// Create an error for reading a property of null or undefined
    #[must_use]
    pub fn nil_property(property: impl Into<String>, target: Kind) -> Self {
        Error::NilProperty {
            property: property.into(),
            target,
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(function: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            function: function.into(),
            message: message.into(),
        }
    }

    /// Create an unknown function error
    #[must_use]
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Error::UnknownFunction { name: name.into() }
    }

    /// Whether this error comes from touching a nil value
    #[must_use]
    pub fn is_nil_access(&self) -> bool {
        matches!(self, Error::NilProperty { .. })
    }
}
