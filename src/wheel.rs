//! Wheel geometry: the angle-indexed radius function derived from a stroke.
//!
//! [`RadiusField`] answers "what is the drawn shape's radius at angle θ?" by
//! blending the two stroke points angularly closest to θ. The estimate is
//! deliberately noisy — the irregularity of a hand-drawn shape is what makes
//! the car wobble, so nothing here smooths it away.

#[cfg(test)]
#[path = "wheel_test.rs"]
mod wheel_test;

use crate::consts::WHEEL_RADIUS;
use crate::geom::{Point, angular_distance};
use crate::shape::ShapeProfile;

/// One stroke point in polar form, relative to the stroke centroid.
#[derive(Debug, Clone, Copy)]
struct PolarSample {
    angle: f64,
    radius: f64,
}

/// Angle-to-radius interpolating function for a frozen stroke.
///
/// Built once when a stroke qualifies; both wheels share one field and query
/// it at independent rotation phases.
#[derive(Debug, Clone)]
pub struct RadiusField {
    points: Vec<Point>,
    centroid: Point,
    mean_radius: f64,
    samples: Vec<PolarSample>,
}

impl RadiusField {
    /// Precompute polar samples for every stroke point. The stroke is frozen
    /// after closure, so the centroid and samples never go stale.
    #[must_use]
    pub fn new(points: &[Point], profile: &ShapeProfile) -> Self {
        let centroid = profile.centroid;
        let samples = points
            .iter()
            .map(|p| PolarSample {
                angle: p.angle_about(centroid),
                radius: p.distance_to(centroid),
            })
            .collect();
        Self {
            points: points.to_vec(),
            centroid,
            mean_radius: profile.mean_radius,
            samples,
        }
    }

    /// Estimated radius of the drawn shape at polar angle `theta`.
    ///
    /// Picks the two samples with the smallest angular distance to `theta`
    /// (earlier points win ties) and blends their radii, weighting the closer
    /// sample more. When the nearest samples sit exactly at `theta` the first
    /// one's radius is returned directly. Fewer than 3 points is too
    /// under-determined to interpolate; a fixed default radius is returned.
    #[must_use]
    pub fn radius_at(&self, theta: f64) -> f64 {
        if self.samples.len() < 3 {
            return WHEEL_RADIUS;
        }

        // (angular distance, radius) of the two best samples so far. Strict
        // comparisons keep the first occurrence on ties.
        let mut best = (f64::INFINITY, 0.0);
        let mut second = (f64::INFINITY, 0.0);
        for sample in &self.samples {
            let d = angular_distance(sample.angle, theta);
            if d < best.0 {
                second = best;
                best = (d, sample.radius);
            } else if d < second.0 {
                second = (d, sample.radius);
            }
        }

        // Both best samples sitting exactly at `theta` would zero both
        // weights; return the first one's radius directly.
        let total = best.0 + second.0;
        if total <= 0.0 {
            return best.1;
        }
        let w1 = 1.0 - best.0 / total;
        let w2 = 1.0 - second.0 / total;
        (best.1 * w1 + second.1 * w2) / (w1 + w2)
    }

    /// The stroke points rescaled about the centroid so the shape renders at
    /// `target_radius`, translated to put the centroid at the origin.
    ///
    /// A pure scale about the centroid, so angular proportions are preserved
    /// whatever size the user drew. A degenerate stroke (zero mean radius)
    /// collapses onto the origin.
    #[must_use]
    pub fn silhouette(&self, target_radius: f64) -> Vec<Point> {
        let scale = if self.mean_radius > 0.0 {
            target_radius / self.mean_radius
        } else {
            1.0
        };
        self.points
            .iter()
            .map(|p| Point::new((p.x - self.centroid.x) * scale, (p.y - self.centroid.y) * scale))
            .collect()
    }

    /// Mean radius of the underlying stroke.
    #[must_use]
    pub fn mean_radius(&self) -> f64 {
        self.mean_radius
    }
}
