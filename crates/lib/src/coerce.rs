//! Coercion of stored values into target kinds.
//!
//! Every helper takes `Option<&Value>` so that an absent variable can be
//! coerced as well. None of them fail: a value that cannot be converted turns
//! into the target's empty value (`0`, `""`, `false`, or no object).
//!
//! ```
//! use varstore::coerce::{to_boolean, to_number, to_text};
//! use varstore::value::Value;
//!
//! assert_eq!(to_number(Some(&Value::from("3.14"))), 3.14);
//! assert_eq!(to_number(Some(&Value::from("abc"))), 0.0);
//! assert!(!to_boolean(Some(&Value::from("FALSE"))));
//! assert_eq!(to_text(None), "");
//! ```

use std::{fmt, str::FromStr};

use crate::value::{HostKind, HostObject, Value, ValueError};

/// Target kinds for [`coerce`] and [`Store::get_as`](crate::Store::get_as).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// No coercion
    #[default]
    Any,
    Number,
    Text,
    Boolean,
    Sprite,
    Image,
}

impl Kind {
    /// Returns the canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Any => "any",
            Kind::Number => "number",
            Kind::Text => "text",
            Kind::Boolean => "boolean",
            Kind::Sprite => "sprite",
            Kind::Image => "image",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(Kind::Any),
            "number" => Ok(Kind::Number),
            "text" | "string" => Ok(Kind::Text),
            "boolean" | "bool" => Ok(Kind::Boolean),
            "sprite" => Ok(Kind::Sprite),
            "image" => Ok(Kind::Image),
            _ => Err(ValueError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}

/// Coerces a value to a number.
///
/// Numbers pass through unchanged (NaN included). Text is parsed with
/// [`parse_float`]. Anything else is 0.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => *n,
        Some(Value::Text(s)) => parse_float(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Coerces a value to text.
///
/// Absent and null values are the empty string; everything else uses the
/// value's `Display` form.
pub fn to_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(value) => value.to_string(),
    }
}

/// Coerces a value to a boolean.
pub fn to_boolean(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Text(s)) => {
            if s.eq_ignore_ascii_case("true") {
                true
            } else if s.eq_ignore_ascii_case("false") {
                false
            } else {
                !s.is_empty()
            }
        }
        // NaN is not equal to zero, so it counts as true
        Some(Value::Number(n)) => *n != 0.0,
        Some(Value::Object(_)) | Some(Value::Map(_)) => true,
        None | Some(Value::Null) => false,
    }
}

/// Returns the value as a sprite reference, if it is one.
pub fn to_sprite(value: Option<&Value>) -> Option<HostObject> {
    host_object(value, HostKind::Sprite)
}

/// Returns the value as an image reference, if it is one.
pub fn to_image(value: Option<&Value>) -> Option<HostObject> {
    host_object(value, HostKind::Image)
}

fn host_object(value: Option<&Value>, kind: HostKind) -> Option<HostObject> {
    value
        .and_then(Value::as_object)
        .filter(|object| object.kind() == kind)
        .copied()
}

/// Coerces a value to `kind`.
///
/// [`Kind::Any`] returns the value unchanged, absent included. Every other kind
/// always produces a value; the object kinds produce [`Value::Null`] when the
/// value is not an object of that kind.
pub fn coerce(value: Option<&Value>, kind: Kind) -> Option<Value> {
    let coerced = match kind {
        Kind::Any => return value.cloned(),
        Kind::Number => Value::Number(to_number(value)),
        Kind::Text => Value::Text(to_text(value)),
        Kind::Boolean => Value::Bool(to_boolean(value)),
        Kind::Sprite => to_sprite(value).map_or(Value::Null, Value::Object),
        Kind::Image => to_image(value).map_or(Value::Null, Value::Object),
    };
    Some(coerced)
}

/// Parses the longest floating-point prefix of `s`.
///
/// Leading whitespace is skipped. Accepts an optional sign followed by
/// `Infinity`, or by digits with an optional fraction and exponent. Trailing
/// text after the number is ignored. Returns `None` if no number prefix
/// exists.
///
/// ```
/// # use varstore::coerce::parse_float;
/// assert_eq!(parse_float("  42px"), Some(42.0));
/// assert_eq!(parse_float("-.5e1x"), Some(-5.0));
/// assert_eq!(parse_float("1e"), Some(1.0));
/// assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
/// assert_eq!(parse_float("e5"), None);
/// ```
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        end += "Infinity".len();
        return s[..end].parse::<f64>().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
