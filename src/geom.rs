//! Shared 2D math: points in canvas pixel space and angular helpers.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Polar angle of this point as seen from `center`, in `(-π, π]`.
    #[must_use]
    pub fn angle_about(self, center: Point) -> f64 {
        (self.y - center.y).atan2(self.x - center.x)
    }
}

/// Shortest angular distance between two angles, normalized into `[0, π]`.
///
/// Both inputs may be arbitrary reals; only their values mod 2π matter.
#[must_use]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    ((a - b + PI).rem_euclid(TAU) - PI).abs()
}
