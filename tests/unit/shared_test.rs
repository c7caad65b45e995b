//! Tests for SharedPoint
//!
//! A SharedPoint makes in-place addition visible to every holder of the handle.

use plib::{Point, SharedPoint};

#[test]
fn clones_share_state() {
    let a = SharedPoint::new(Point::new(1, 1));
    let b = a.clone();

    a.add_in_place(&SharedPoint::new(Point::new(2, 2)));

    assert_eq!(b.get(), Point::new(3, 3));
    assert_eq!(a.holders(), 2);
}

#[test]
fn add_in_place_returns_same_handle() {
    let a = SharedPoint::new(Point::new(1, 1));
    let rhs = SharedPoint::new(Point::new(2, 2));

    let returned = a.add_in_place(&rhs);

    assert!(returned.ptr_eq(&a));
    assert!(!returned.ptr_eq(&rhs));
    assert_eq!(rhs.get(), Point::new(2, 2));
}

#[test]
fn add_assign_plain_point() {
    let mut a = SharedPoint::from(Point::new(-1, 5));
    let alias = a.clone();

    a += Point::new(1, -5);

    assert!(alias.get().is_center());
}

#[test]
fn get_is_a_copy() {
    let a = SharedPoint::new(Point::new(1, 1));
    let snapshot = a.get();

    a.set(Point::new(0, 0));

    assert_eq!(snapshot, Point::new(1, 1));
    assert_eq!(a, Point::new(0, 0));
}

#[test]
fn equality_is_by_value_not_identity() {
    let a = SharedPoint::new(Point::new(4, 4));
    let b = SharedPoint::new(Point::new(4, 4));
    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));
}

#[test]
fn display_matches_point() {
    let a = SharedPoint::new(Point::new(5, 10));
    assert_eq!(a.to_string(), "Point(5, 10)");
    assert_eq!(format!("{a:?}"), "Point(5, 10)");
}
