//! Domain models for plib
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Point`] - An integer position or displacement
//! - [`SharedPoint`] - A handle whose in-place additions every holder sees
//! - [`Axis`] - Names one of the two coordinates
//! - [`PointError`] - Everything that can go wrong building or decoding a point

mod coordinate;
mod error;
mod point;
mod shared;

pub use coordinate::{Axis, integer_coordinate};
pub use error::PointError;
pub use point::Point;
pub use shared::SharedPoint;
