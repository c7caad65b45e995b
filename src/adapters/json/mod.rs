//! JSON wire codec for points
//!
//! The wire shape is a single object with integer keys `x` and `y`.
//!
//! - [`parser`] - Decode and validate point JSON
//! - [`writer`] - Encode values in one of the [`JsonStyle`]s
//! - [`formatter`] - The spaced `serde_json` formatter behind [`JsonStyle::Spaced`]

pub mod formatter;
pub mod parser;
pub mod writer;

use serde::{Deserialize, Serialize};

pub use formatter::SpacedFormatter;
pub use parser::{from_str, from_value};
pub use writer::to_string;

/// Layout of emitted JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonStyle {
    /// No whitespace: `{"x":1,"y":2}`
    Compact,
    /// One line, space after `:` and `,`: `{"x": 1, "y": 2}`
    #[default]
    Spaced,
    /// Multi-line, two-space indent
    Pretty,
}

impl std::fmt::Display for JsonStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compact => write!(f, "compact"),
            Self::Spaced => write!(f, "spaced"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}

impl std::str::FromStr for JsonStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "spaced" => Ok(Self::Spaced),
            "pretty" => Ok(Self::Pretty),
            _ => Err(format!("Invalid JSON style: {s}. Use: compact, spaced, pretty")),
        }
    }
}
