//! Point error types

use thiserror::Error;

use super::Axis;

/// Errors raised while building, comparing or decoding points
#[derive(Debug, Error)]
pub enum PointError {
    /// A coordinate was not an integer-typed value
    #[error("{axis} should be an integer type, got {found}")]
    NotInteger {
        /// Coordinate that failed validation
        axis: Axis,
        /// Description of the rejected value
        found: String,
    },

    /// Equality was requested against something that is not a point
    #[error("comparison not implemented between Point and {found}")]
    UnsupportedComparison {
        /// Type name of the right-hand operand
        found: &'static str,
    },

    /// Input text was not valid JSON
    #[error("invalid point JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input was valid JSON but not an object
    #[error("point JSON must be an object, got {0}")]
    NotAnObject(String),

    /// A coordinate key was absent
    #[error("point JSON is missing field `{0}`")]
    MissingField(Axis),

    /// A key other than `x` or `y` was present
    #[error("point JSON has unknown field `{0}`")]
    UnknownField(String),

    /// Text did not match any accepted point notation
    #[error("cannot parse point from {input:?}")]
    Parse {
        /// The rejected input
        input: String,
    },

    /// Checked arithmetic left the `i64` range
    #[error("point {op} overflowed")]
    Overflow {
        /// Operation name (add, sub, neg)
        op: &'static str,
    },
}

impl PointError {
    /// Whether the JSON document itself had the wrong shape
    ///
    /// Wrong coordinate types are reported as [`PointError::NotInteger`] and
    /// are not counted here.
    #[must_use]
    pub const fn is_deserialization(&self) -> bool {
        matches!(
            self,
            Self::Json(_) | Self::NotAnObject(_) | Self::MissingField(_) | Self::UnknownField(_)
        )
    }
}
