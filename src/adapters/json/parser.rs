//! Point JSON decoding
//!
//! Decoding goes through [`serde_json::Value`] so each malformation maps to
//! its own [`PointError`] variant instead of one opaque serde message.

use serde_json::Value;

use crate::core::models::{Axis, Point, PointError, integer_coordinate};

/// Parse point JSON text
pub fn from_str(text: &str) -> Result<Point, PointError> {
    let value: Value = serde_json::from_str(text)
        .inspect_err(|e| log::debug!("point JSON is not valid JSON: {e}"))?;
    from_value(&value)
}

/// Build a point from an already parsed JSON value
///
/// The object must hold exactly the keys `x` and `y`, both integers.
pub fn from_value(value: &Value) -> Result<Point, PointError> {
    let Value::Object(fields) = value else {
        log::debug!("point JSON rejected: top level is {}", type_name(value));
        return Err(PointError::NotAnObject(type_name(value).to_string()));
    };

    if let Some(unknown) = fields.keys().find(|key| Axis::from_key(key).is_none()) {
        return Err(PointError::UnknownField(unknown.clone()));
    }

    let coordinate = |axis: Axis| {
        fields
            .get(axis.key())
            .ok_or(PointError::MissingField(axis))
            .and_then(|v| integer_coordinate(axis, v))
    };

    Ok(Point::new(coordinate(Axis::X)?, coordinate(Axis::Y)?))
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
