//! JSON encoding in a chosen [`JsonStyle`]

use serde::Serialize;
use serde_json::Serializer;

use super::{JsonStyle, SpacedFormatter};

/// Serialize any value in the given style
pub fn to_string<T>(value: &T, style: JsonStyle) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    match style {
        JsonStyle::Compact => serde_json::to_string(value),
        JsonStyle::Pretty => serde_json::to_string_pretty(value),
        JsonStyle::Spaced => {
            let mut buf = Vec::with_capacity(64);
            value.serialize(&mut Serializer::with_formatter(&mut buf, SpacedFormatter))?;
            // serde_json only ever writes valid UTF-8
            Ok(String::from_utf8_lossy(&buf).into_owned())
        },
    }
}
