//! Runtime tags for dynamic values

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::Error;

/// The runtime tag of a [`Value`](super::Value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Date,
    Function,
}

impl Kind {
    /// All kinds, in declaration order
    pub const ALL: [Kind; 9] = [
        Kind::Undefined,
        Kind::Null,
        Kind::Boolean,
        Kind::Number,
        Kind::String,
        Kind::Array,
        Kind::Object,
        Kind::Date,
        Kind::Function,
    ];

    /// The `typeof`-style name of this kind
    #[must_use]
    pub const fn type_of(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Function => "function",
            Kind::Null | Kind::Array | Kind::Object | Kind::Date => "object",
        }
    }

    /// Whether values of this kind are objects rather than primitives
    #[must_use]
    pub const fn is_object_like(self) -> bool {
        matches!(
            self,
            Kind::Array | Kind::Object | Kind::Date | Kind::Function
        )
    }

    /// Whether this is null or undefined
    #[must_use]
    pub const fn is_nil(self) -> bool {
        matches!(self, Kind::Undefined | Kind::Null)
    }

    /// The constructor-style name, as accepted by [`FromStr`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Undefined => "Undefined",
            Kind::Null => "Null",
            Kind::Boolean => "Boolean",
            Kind::Number => "Number",
            Kind::String => "String",
            Kind::Array => "Array",
            Kind::Object => "Object",
            Kind::Date => "Date",
            Kind::Function => "Function",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::invalid_argument("is", format!("unknown kind '{s}'")))
    }
}
