//! Core domain logic for plib
//!
//! This module contains the point value types and their validation. Nothing
//! here touches the filesystem or the terminal.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Point, SharedPoint, Axis, PointError)

pub mod models;
