#![allow(clippy::clone_on_copy, clippy::float_cmp, clippy::cast_precision_loss)]

use std::f64::consts::TAU;

use super::*;
use crate::consts::WHEEL_RADIUS;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn circle_points(n: usize, r: f64, cx: f64, cy: f64) -> Vec<Point> {
    (0..n)
        .map(|k| {
            let a = TAU * k as f64 / n as f64;
            Point::new(cx + r * a.cos(), cy + r * a.sin())
        })
        .collect()
}

fn field_for(points: &[Point]) -> RadiusField {
    let profile = ShapeProfile::analyze(points);
    RadiusField::new(points, &profile)
}

// =============================================================
// radius_at: uniform shapes
// =============================================================

#[test]
fn uniform_circle_radius_at_zero() {
    let field = field_for(&circle_points(12, 50.0, 100.0, 100.0));
    assert!(approx_eq(field.radius_at(0.0), 50.0));
}

#[test]
fn uniform_circle_radius_everywhere() {
    // Zero interpolation error on a uniform shape: any blend of two
    // samples of radius 50 is 50.
    let field = field_for(&circle_points(12, 50.0, 100.0, 100.0));
    let mut theta = 0.0;
    while theta < TAU {
        assert!(approx_eq(field.radius_at(theta), 50.0), "theta = {theta}");
        theta += 0.137;
    }
}

#[test]
fn uniform_circle_radius_for_negative_angles() {
    let field = field_for(&circle_points(16, 33.0, 0.0, 0.0));
    assert!(approx_eq(field.radius_at(-1.0), 33.0));
    assert!(approx_eq(field.radius_at(-5.7), 33.0));
}

// =============================================================
// radius_at: exact-angle convergence and ties
// =============================================================

#[test]
fn exact_sample_angle_returns_sample_radius() {
    // Diamond with unequal arms; centroid lands exactly at the origin.
    let points = [
        Point::new(2.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(-2.0, 0.0),
        Point::new(0.0, -1.0),
    ];
    let field = field_for(&points);
    // At an exact sample angle the matching point's weight is 1.
    assert_eq!(field.radius_at(0.0), 2.0);
    assert_eq!(field.radius_at(std::f64::consts::PI), 2.0);
}

#[test]
fn tie_at_zero_distance_returns_first_point() {
    // Two points at angle 0 with different radii; earlier point wins.
    let points = [
        Point::new(1.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(-2.0, 1.0),
        Point::new(-2.0, -1.0),
    ];
    let field = field_for(&points);
    assert_eq!(field.radius_at(0.0), 1.0);
}

#[test]
fn closing_duplicate_does_not_disturb_lookup() {
    // A closed stroke repeats its first point; at that angle the duplicate
    // pair is equidistant (both zero) and the radius comes back directly.
    let mut points = circle_points(12, 50.0, 100.0, 100.0);
    points.push(points[0]);
    let field = field_for(&points);
    let profile = ShapeProfile::analyze(&points);
    let theta = points[0].angle_about(profile.centroid);
    assert!(approx_eq(field.radius_at(theta), points[0].distance_to(profile.centroid)));
}

// =============================================================
// radius_at: varying shapes
// =============================================================

#[test]
fn blend_weights_favor_closer_sample() {
    // Narrow diamond: samples at 0, π/2, π, -π/2 with radii 4, 2, 4, 2.
    let points = [
        Point::new(4.0, 0.0),
        Point::new(0.0, 2.0),
        Point::new(-4.0, 0.0),
        Point::new(0.0, -2.0),
    ];
    let field = field_for(&points);
    // Between the 4-radius sample at angle 0 and the 2-radius sample at
    // π/2: d1 = π/8, d2 = 3π/8 → weights 0.75 / 0.25.
    let got = field.radius_at(std::f64::consts::FRAC_PI_8);
    assert!(approx_eq(got, 0.75 * 4.0 + 0.25 * 2.0));
}

#[test]
fn noisy_shape_is_not_smoothed() {
    // The field reports the lobes as-is; the min and max of the sampled
    // radii survive in the lookups near their angles.
    let points: Vec<Point> = (0..20)
        .map(|k| {
            let a = TAU * k as f64 / 20.0;
            let r = if k % 2 == 0 { 30.0 } else { 70.0 };
            Point::new(r * a.cos(), r * a.sin())
        })
        .collect();
    let field = field_for(&points);
    let profile = ShapeProfile::analyze(&points);
    let lo = points[0].angle_about(profile.centroid);
    let hi = points[1].angle_about(profile.centroid);
    assert!(field.radius_at(lo) < field.radius_at(hi));
}

// =============================================================
// radius_at: under-determined strokes
// =============================================================

#[test]
fn two_points_fall_back_to_default_radius() {
    let field = field_for(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
    assert_eq!(field.radius_at(0.0), WHEEL_RADIUS);
    assert_eq!(field.radius_at(2.5), WHEEL_RADIUS);
}

#[test]
fn empty_points_fall_back_to_default_radius() {
    let field = field_for(&[]);
    assert_eq!(field.radius_at(1.0), WHEEL_RADIUS);
}

// =============================================================
// silhouette
// =============================================================

#[test]
fn silhouette_scales_to_target_radius() {
    let field = field_for(&circle_points(12, 50.0, 100.0, 100.0));
    for p in field.silhouette(20.0) {
        assert!(approx_eq(p.distance_to(Point::new(0.0, 0.0)), 20.0));
    }
}

#[test]
fn silhouette_preserves_angular_proportions() {
    // Shape-preserving scale: every point keeps its polar angle about the
    // centroid, whatever size the user drew at.
    let points = circle_points(9, 140.0, 320.0, 180.0);
    let field = field_for(&points);
    let profile = ShapeProfile::analyze(&points);
    let origin = Point::new(0.0, 0.0);
    for (original, scaled) in points.iter().zip(field.silhouette(20.0)) {
        let want = original.angle_about(profile.centroid);
        assert!(approx_eq(scaled.angle_about(origin), want));
    }
}

#[test]
fn silhouette_of_irregular_shape_keeps_relative_radii() {
    let points = [
        Point::new(4.0, 0.0),
        Point::new(0.0, 2.0),
        Point::new(-4.0, 0.0),
        Point::new(0.0, -2.0),
    ];
    let field = field_for(&points);
    let silhouette = field.silhouette(20.0);
    let origin = Point::new(0.0, 0.0);
    let long = silhouette[0].distance_to(origin);
    let short = silhouette[1].distance_to(origin);
    assert!(approx_eq(long / short, 2.0));
}

#[test]
fn silhouette_of_degenerate_stroke_collapses_to_origin() {
    let points = vec![Point::new(7.0, 7.0); 12];
    let field = field_for(&points);
    for p in field.silhouette(20.0) {
        assert_eq!(p, Point::new(0.0, 0.0));
    }
}

#[test]
fn mean_radius_passes_through() {
    let field = field_for(&circle_points(12, 50.0, 100.0, 100.0));
    assert!(approx_eq(field.mean_radius(), 50.0));
}
