#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_clone_and_copy() {
    let p = Point::new(1.0, 2.0);
    let q = p;
    let r = p.clone();
    assert_eq!(p, q);
    assert_eq!(p, r);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

#[test]
fn point_serializes_to_json() {
    let p = Point::new(1.5, -2.0);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
}

// =============================================================
// distance_to
// =============================================================

#[test]
fn distance_pythagorean_triple() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!(approx_eq(a.distance_to(b), 5.0));
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(-2.0, 7.0);
    let b = Point::new(5.0, -1.0);
    assert!(approx_eq(a.distance_to(b), b.distance_to(a)));
}

#[test]
fn distance_to_self_is_zero() {
    let p = Point::new(12.3, -45.6);
    assert_eq!(p.distance_to(p), 0.0);
}

// =============================================================
// angle_about
// =============================================================

#[test]
fn angle_about_cardinal_directions() {
    let c = Point::new(100.0, 100.0);
    assert!(approx_eq(Point::new(150.0, 100.0).angle_about(c), 0.0));
    assert!(approx_eq(Point::new(100.0, 150.0).angle_about(c), FRAC_PI_2));
    assert!(approx_eq(Point::new(50.0, 100.0).angle_about(c), PI));
    assert!(approx_eq(Point::new(100.0, 50.0).angle_about(c), -FRAC_PI_2));
}

#[test]
fn angle_about_is_translation_invariant() {
    let c = Point::new(0.0, 0.0);
    let p = Point::new(3.0, 4.0);
    let shift = Point::new(-57.0, 21.5);
    let shifted_c = Point::new(c.x + shift.x, c.y + shift.y);
    let shifted_p = Point::new(p.x + shift.x, p.y + shift.y);
    assert!(approx_eq(p.angle_about(c), shifted_p.angle_about(shifted_c)));
}

// =============================================================
// angular_distance
// =============================================================

#[test]
fn angular_distance_zero_for_equal_angles() {
    assert_eq!(angular_distance(1.25, 1.25), 0.0);
    assert_eq!(angular_distance(0.0, 0.0), 0.0);
}

#[test]
fn angular_distance_simple_gap() {
    assert!(approx_eq(angular_distance(1.0, 0.25), 0.75));
    assert!(approx_eq(angular_distance(0.25, 1.0), 0.75));
}

#[test]
fn angular_distance_wraps_across_pi() {
    // Just past π and just before -π are nearly the same direction.
    assert!(approx_eq(angular_distance(PI - 0.1, -PI + 0.1), 0.2));
}

#[test]
fn angular_distance_opposite_angles_is_pi() {
    assert!(approx_eq(angular_distance(0.0, PI), PI));
    assert!(approx_eq(angular_distance(FRAC_PI_2, -FRAC_PI_2), PI));
}

#[test]
fn angular_distance_never_exceeds_pi() {
    let mut a = -3.0 * TAU;
    while a < 3.0 * TAU {
        let mut b = -3.0 * TAU;
        while b < 3.0 * TAU {
            let d = angular_distance(a, b);
            assert!((0.0..=PI + EPSILON).contains(&d), "d = {d} for a = {a}, b = {b}");
            b += 0.7;
        }
        a += 0.7;
    }
}

#[test]
fn angular_distance_invariant_under_full_turns() {
    assert!(approx_eq(angular_distance(0.3, 0.9), angular_distance(0.3 + TAU, 0.9 - TAU)));
}
