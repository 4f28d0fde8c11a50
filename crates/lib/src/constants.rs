//! Constants and constant accessors exposed to script hosts.

use crate::value::Value;

/// Separator between path segments.
pub const DELIMITER: char = '.';

/// Returns the absent value.
///
/// Absence is `None` everywhere in this crate; a host that needs a value to
/// stand for "undefined" receives this.
pub fn undefined_value() -> Option<Value> {
    None
}

/// Returns pi as a number value.
pub fn pi_value() -> Value {
    Value::Number(std::f64::consts::PI)
}

/// Returns the null value.
pub fn null_value() -> Value {
    Value::Null
}
