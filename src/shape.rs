//! Stroke shape analysis: centroid, mean radius, and roundness.
//!
//! The classification drives the whole ride: a clean circle rolls fast with a
//! subtle bob, an irregular blob rolls slower and wobbles visibly.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::Serialize;

use crate::consts::CIRCULARITY_TOLERANCE;
use crate::geom::Point;

/// Summary statistics of a drawn shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeProfile {
    /// Arithmetic mean of all stroke points.
    pub centroid: Point,
    /// Average distance from the centroid to each point.
    pub mean_radius: f64,
    /// Whether the mean radial deviation stays within tolerance of the mean
    /// radius.
    pub is_circular: bool,
}

impl ShapeProfile {
    /// Analyze a point set. Deterministic and translation-invariant.
    ///
    /// A degenerate set (empty, or all points coincident) has zero mean
    /// radius and classifies as irregular; no division by the radius occurs.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn analyze(points: &[Point]) -> Self {
        if points.is_empty() {
            return Self {
                centroid: Point::new(0.0, 0.0),
                mean_radius: 0.0,
                is_circular: false,
            };
        }
        let n = points.len() as f64;

        let centroid = Point::new(
            points.iter().map(|p| p.x).sum::<f64>() / n,
            points.iter().map(|p| p.y).sum::<f64>() / n,
        );

        let mean_radius = points.iter().map(|p| p.distance_to(centroid)).sum::<f64>() / n;

        let mean_deviation = points
            .iter()
            .map(|p| (p.distance_to(centroid) - mean_radius).abs())
            .sum::<f64>()
            / n;

        Self {
            centroid,
            mean_radius,
            is_circular: mean_deviation < mean_radius * CIRCULARITY_TOLERANCE,
        }
    }
}
