//! Shared point handle with aliasing-visible in-place addition
//!
//! Every clone of a [`SharedPoint`] refers to the same underlying point, so
//! `a += b` through one handle is seen by all of them. Use
//! [`SharedPoint::get`] or [`SharedPoint::detach`] for an unaffected copy.

use std::cell::RefCell;
use std::fmt;
use std::ops::AddAssign;
use std::rc::Rc;

use super::Point;

/// Reference-counted handle to a single mutable [`Point`]
///
/// Single-threaded: the handle is neither `Send` nor `Sync`.
#[derive(Clone, Default)]
pub struct SharedPoint {
    inner: Rc<RefCell<Point>>,
}

impl SharedPoint {
    /// Wrap a point in a new handle
    #[must_use]
    pub fn new(point: Point) -> Self {
        Self {
            inner: Rc::new(RefCell::new(point)),
        }
    }

    /// Copy of the current coordinates
    #[must_use]
    pub fn get(&self) -> Point {
        *self.inner.borrow()
    }

    /// Replace the coordinates seen by every holder
    pub fn set(&self, point: Point) {
        *self.inner.borrow_mut() = point;
    }

    /// Add `rhs` in place and return this same handle
    ///
    /// `rhs` is read before the write borrow is taken, so adding a handle to
    /// one of its own aliases doubles the point.
    pub fn add_in_place(&self, rhs: &Self) -> Self {
        let delta = rhs.get();
        *self.inner.borrow_mut() += delta;
        self.clone()
    }

    /// Whether both handles refer to the same point
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// A new handle holding a copy of the current coordinates
    #[must_use]
    pub fn detach(&self) -> Self {
        Self::new(self.get())
    }

    /// Number of handles sharing this point
    #[must_use]
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl From<Point> for SharedPoint {
    fn from(point: Point) -> Self {
        Self::new(point)
    }
}

impl PartialEq for SharedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for SharedPoint {}

impl PartialEq<Point> for SharedPoint {
    fn eq(&self, other: &Point) -> bool {
        self.get() == *other
    }
}

impl AddAssign<Point> for SharedPoint {
    fn add_assign(&mut self, rhs: Point) {
        *self.inner.borrow_mut() += rhs;
    }
}

impl AddAssign<&SharedPoint> for SharedPoint {
    fn add_assign(&mut self, rhs: &Self) {
        self.add_in_place(rhs);
    }
}

impl fmt::Display for SharedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl fmt::Debug for SharedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}
