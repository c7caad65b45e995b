//! Tests for the Point value type
//!
//! Construction, operators, equality, distance, center check and the text forms.

use plib::{Axis, Point, PointError, SharedPoint};

use crate::common::{assert_approx, points};

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn creation() {
    let p = Point::new(1, 2);
    assert_eq!(p.x, 1);
    assert_eq!(p.y, 2);
    assert_eq!(p.get(Axis::X), 1);
    assert_eq!(p.get(Axis::Y), 2);
}

#[test]
fn creation_rejects_float() {
    let err = Point::from_values(1.5, 2).unwrap_err();
    assert!(err.to_string().contains("should be an integer type"));
}

#[test]
fn creation_rejects_string() {
    let err = Point::from_values(1, "2").unwrap_err();
    assert!(err.to_string().contains("should be an integer type"));
    assert!(matches!(err, PointError::NotInteger { axis: Axis::Y, .. }));
}

#[test]
fn creation_from_integer_values() {
    let p = Point::from_values(-7, 9_i64).unwrap();
    assert_eq!(p, Point::new(-7, 9));
}

#[test]
fn conversions() {
    assert_eq!(Point::from((3, 4)), Point::new(3, 4));
    assert_eq!(Point::from([3, 4]), Point::new(3, 4));
    assert_eq!(<(i64, i64)>::from(Point::new(3, 4)), (3, 4));
    assert_eq!(<[i64; 2]>::from(Point::new(3, 4)), [3, 4]);
}

// =============================================================================
// Operator Tests
// =============================================================================

#[test]
fn add() {
    let (p1, p2) = points();
    let res = p2 + p1;
    assert_eq!(res, Point::new(2, 2));
    assert_eq!(p1.x, 0);
    assert_eq!(p2.x, 2);
}

#[test]
fn add_assign_mutates_receiver_only() {
    let mut p1 = Point::new(1, 1);
    let p2 = Point::new(2, 2);

    p1 += p2;

    assert_eq!(p1.x, 3);
    assert_eq!(p1.y, 3);
    assert_eq!(p2, Point::new(2, 2));
}

#[test]
fn add_assign_keeps_identity() {
    let mut p1 = SharedPoint::new(Point::new(1, 1));
    let original = p1.clone();
    let p2 = SharedPoint::new(Point::new(2, 2));

    p1 += &p2;

    assert_eq!(p1, Point::new(3, 3));
    assert!(p1.ptr_eq(&original));
    assert!(!p1.ptr_eq(&p2));
}

#[test]
fn sub() {
    let (p1, p2) = points();
    assert_eq!(p2 - p1, Point::new(2, 2));
    assert_eq!(p1 - p2, Point::new(-2, -2));
}

#[test]
fn neg() {
    let p = Point::new(3, -4);
    let neg_p = -p;
    assert_eq!(neg_p.x, -3);
    assert_eq!(neg_p.y, 4);
    assert_eq!(p, Point::new(3, -4));
}

// =============================================================================
// Equality Tests
// =============================================================================

#[test]
fn equality() {
    let p1 = Point::new(1, 1);
    let p2 = Point::new(1, 1);
    let p3 = Point::new(1, 2);

    assert_eq!(p1, p2);
    assert_ne!(p1, p3);
}

#[test]
fn equality_against_other_type_is_an_error() {
    let p1 = Point::new(1, 1);

    let err = p1.try_eq(&"String").unwrap_err();
    assert!(matches!(err, PointError::UnsupportedComparison { found } if found == "&str"));
    assert!(p1.try_eq(&(1_i64, 1_i64)).is_err());
}

#[test]
fn try_eq_accepts_points() {
    let p1 = Point::new(1, 1);
    assert!(p1.try_eq(&Point::new(1, 1)).unwrap());
    assert!(!p1.try_eq(&Point::new(1, 2)).unwrap());
    assert!(p1.try_eq(&SharedPoint::new(Point::new(1, 1))).unwrap());
}

// =============================================================================
// Distance Tests
// =============================================================================

#[test]
#[allow(clippy::float_cmp)]
fn distance_to() {
    let p1 = Point::new(0, 0);
    let p2 = Point::new(3, 4);
    assert_eq!(p1.to(p2), 5.0);
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(-5, 12);
    let b = Point::new(7, 3);
    assert_approx(a.to(b), b.to(a), 1e-12);
    assert_approx(a.to(b), 15.0, 1e-12);
}

#[test]
fn distance_to_self_is_zero() {
    let p = Point::new(42, -42);
    assert!(p.to(p).abs() < f64::EPSILON);
}

// =============================================================================
// Formatting Tests
// =============================================================================

#[test]
fn str_and_repr() {
    let p = Point::new(5, 10);
    let expected = "Point(5, 10)";

    assert_eq!(p.to_string(), expected);
    assert_eq!(format!("{p:?}"), expected);
}

#[test]
fn negative_coordinates_display() {
    assert_eq!(Point::new(-1, -20).to_string(), "Point(-1, -20)");
}

#[test]
fn parse_display_form() {
    let p: Point = "Point(5, 10)".parse().unwrap();
    assert_eq!(p, Point::new(5, 10));
}

#[test]
fn parse_rejects_garbage() {
    let err = "five, ten".parse::<Point>().unwrap_err();
    assert!(matches!(err, PointError::Parse { .. }));
    assert!("1,2,3".parse::<Point>().is_err());
    assert!("".parse::<Point>().is_err());
}

// =============================================================================
// Center Tests
// =============================================================================

#[test]
fn is_center() {
    assert!(Point::new(0, 0).is_center());

    assert!(!Point::new(1, 0).is_center());
    assert!(!Point::new(0, 1).is_center());
    assert!(!Point::new(1, 1).is_center());
}
