//! Coordinate axes and validation of dynamically typed coordinate values
//!
//! Typed construction (`Point::new`) takes `i64` directly. Values arriving
//! as JSON go through [`integer_coordinate`], which accepts only integer-typed
//! numbers: `2` passes, `2.0` and `"2"` do not.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::PointError;

/// One of the two coordinate axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

impl Axis {
    /// Both axes, in serialization order
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// The JSON key for this axis
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }

    /// Look up an axis by its JSON key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.key() == key)
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Validate that `value` is an integer-typed JSON number fitting in `i64`
///
/// The check is on the number's token: `-0` and `7` pass, while `1.0`, `-0.0`
/// and `1e2` are rejected like a string would be.
pub fn integer_coordinate(axis: Axis, value: &Value) -> Result<i64, PointError> {
    let integer = match value {
        Value::Number(n) => integer_token(n),
        _ => None,
    };
    integer.ok_or_else(|| PointError::NotInteger {
        axis,
        found: describe(value),
    })
}

/// The number as `i64` when its text has no fraction or exponent
fn integer_token(n: &Number) -> Option<i64> {
    let text = n.to_string();
    if text.contains(['.', 'e', 'E']) {
        return None;
    }
    text.parse().ok()
}

/// Short human description of a JSON value for error messages
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) if n.to_string().contains(['.', 'e', 'E']) => format!("float {n}"),
        Value::Number(n) => format!("out-of-range integer {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
