//! Two-dimensional integer point
//!
//! A [`Point`] is a plain `Copy` value: `+`, `-` and unary `-` build new
//! points, `+=` mutates the receiving place only. When several owners must
//! observe an in-place addition, share a [`SharedPoint`] instead.
//!
//! # Overflow
//!
//! The operators behave like `i64` arithmetic: they panic on overflow when
//! overflow checks are on (debug builds) and wrap when they are off (release
//! builds). Use [`Point::checked_add`], [`Point::checked_sub`] and
//! [`Point::checked_neg`] where the result must not depend on the profile.
//!
//! # Examples
//!
//! ```
//! use plib::core::models::Point;
//!
//! let a = Point::new(0, 0);
//! let b = Point::new(3, 4);
//! assert_eq!(a.to(b), 5.0);
//! assert_eq!(b - a, b);
//! assert_eq!(b.to_string(), "Point(3, 4)");
//!
//! let json = b.to_json();
//! assert_eq!(json, r#"{"x": 3, "y": 4}"#);
//! assert_eq!(Point::from_json(&json).unwrap(), b);
//! ```

use std::any::{Any, type_name};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::coordinate::integer_coordinate;
use super::{Axis, PointError, SharedPoint};
use crate::adapters::json::{self, JsonStyle};

/// A position or displacement on the integer plane
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i64,
    /// Vertical coordinate
    pub y: i64,
}

impl Point {
    /// The origin `(0, 0)`
    pub const CENTER: Self = Self::new(0, 0);

    /// Construct a point from integer coordinates
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Construct a point from dynamically typed coordinates
    ///
    /// Each value must be an integer-typed JSON number. Floats (even `1.0`),
    /// strings and every other JSON type are rejected with
    /// [`PointError::NotInteger`].
    pub fn from_values(x: impl Into<Value>, y: impl Into<Value>) -> Result<Self, PointError> {
        let x = integer_coordinate(Axis::X, &x.into())?;
        let y = integer_coordinate(Axis::Y, &y.into())?;
        Ok(Self::new(x, y))
    }

    /// Coordinate on the given axis
    #[must_use]
    pub const fn get(self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Euclidean distance to `other`
    ///
    /// Differences are taken in `i128`, so points at opposite ends of the
    /// `i64` range do not overflow.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to(self, other: Self) -> f64 {
        let dx = i128::from(other.x) - i128::from(self.x);
        let dy = i128::from(other.y) - i128::from(self.y);
        (dx as f64).hypot(dy as f64)
    }

    /// Whether this is the origin
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Addition that returns `None` instead of overflowing
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self.x.checked_add(rhs.x), self.y.checked_add(rhs.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Subtraction that returns `None` instead of overflowing
    #[must_use]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match (self.x.checked_sub(rhs.x), self.y.checked_sub(rhs.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Negation that returns `None` for `i64::MIN` coordinates
    #[must_use]
    pub const fn checked_neg(self) -> Option<Self> {
        match (self.x.checked_neg(), self.y.checked_neg()) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Compare against a value of any type
    ///
    /// `Point` and [`SharedPoint`] operands compare by coordinates. Any other
    /// type is a caller error and yields
    /// [`PointError::UnsupportedComparison`] rather than `false`.
    pub fn try_eq<T: Any>(&self, other: &T) -> Result<bool, PointError> {
        let other: &dyn Any = other;
        if let Some(point) = other.downcast_ref::<Self>() {
            return Ok(self == point);
        }
        if let Some(shared) = other.downcast_ref::<SharedPoint>() {
            return Ok(*self == shared.get());
        }
        Err(PointError::UnsupportedComparison {
            found: type_name::<T>(),
        })
    }

    /// Serialize as `{"x": <x>, "y": <y>}`
    #[must_use]
    pub fn to_json(self) -> String {
        self.to_json_with(JsonStyle::Spaced)
    }

    /// Serialize in the given JSON style
    ///
    /// # Panics
    ///
    /// Never in practice: two integer fields always serialize.
    #[must_use]
    pub fn to_json_with(self, style: JsonStyle) -> String {
        json::to_string(&self, style).expect("Point serializer cannot fail")
    }

    /// Parse a point from JSON text
    ///
    /// The input must be an object holding exactly the integer keys `x` and
    /// `y`; see [`PointError`] for how each malformation is reported.
    pub fn from_json(text: &str) -> Result<Self, PointError> {
        json::from_str(text)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

// Debug renders the Display text, `{:#?}` included
impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Point {
    type Err = PointError;

    /// Parse `Point(x, y)`, `(x, y)` or `x,y`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || PointError::Parse {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let (named, rest) = trimmed
            .strip_prefix("Point")
            .map_or((false, trimmed), |r| (true, r.trim_start()));

        // `Point` must be followed by a parenthesized pair
        let inner = match rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
            Some(inner) => inner,
            None if !named => rest,
            None => return Err(parse_error()),
        };

        let (x, y) = inner.split_once(',').ok_or_else(parse_error)?;
        let x = x.trim().parse().map_err(|_| parse_error())?;
        let y = y.trim().parse().map_err(|_| parse_error())?;
        Ok(Self::new(x, y))
    }
}

/// Componentwise `i64` addition; see the module docs on overflow
impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    fn add(self, rhs: &Point) -> Point {
        *self + *rhs
    }
}

/// Componentwise `i64` addition in place; see the module docs on overflow
impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Componentwise `i64` subtraction; see the module docs on overflow
impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<&Point> for &Point {
    type Output = Point;

    fn sub(self, rhs: &Point) -> Point {
        *self - *rhs
    }
}

/// Componentwise `i64` negation; see the module docs on overflow
impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Conversions between Point and tuples/arrays

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i64; 2]> for Point {
    fn from([x, y]: [i64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point> for [i64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}
