//! Adapters between points and external representations
//!
//! - `json/` - The `{"x": .., "y": ..}` wire codec
//!
//! Text notation (`Point(1, 2)`) lives on the model itself as `FromStr`.

pub mod json;
