/// Constants used throughout the rcb codebase
// Coercion constants
pub const FALSY_STRINGS: &[&str] = &["false", "n", "no"];
pub const UNDEFINED_TEXT: &str = "undefined";
pub const NULL_TEXT: &str = "null";
pub const OBJECT_TAG: &str = "[object Object]";
pub const INVALID_DATE_TEXT: &str = "Invalid Date";

// Number formatting thresholds, outside of which exponent notation is used
pub const EXPONENT_UPPER_BOUND: f64 = 1e21;
pub const EXPONENT_LOWER_BOUND: f64 = 1e-6;

// Longest list a count argument may ask for
pub const MAX_LIST_LENGTH: f64 = 4_294_967_295.0;

// Largest absolute time value a date can hold, in milliseconds
pub const MAX_TIME_VALUE: f64 = 8.64e15;

// Date strings render in UTC
pub const DATE_DISPLAY_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)";

// Logging
pub const RCB_LOG_VAR: &str = "RCB_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
