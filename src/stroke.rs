//! Stroke capture: recording a freehand drawing gesture point by point and
//! closing it into a wheel silhouette on release.
//!
//! A gesture flows through [`StrokeRecorder`]: `begin` on pointer-down,
//! `append` on every pointer-move, `end` on pointer-up. `end` yields a frozen
//! [`Stroke`] only when the gesture recorded enough points to describe a
//! shape; a too-short gesture is discarded silently — a failed attempt is a
//! no-op, not an error.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use crate::consts::MIN_STROKE_POINTS;
use crate::geom::Point;

/// A closed freehand polyline, reused as the wheel's silhouette.
///
/// The first and last points coincide (the recorder appends the first point
/// on close). Immutable once built.
#[derive(Debug, Clone)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Close an open point sequence by appending its first point.
    fn close(mut points: Vec<Point>) -> Self {
        if let Some(&first) = points.first() {
            points.push(first);
        }
        Self { points }
    }

    /// The closed point sequence, in draw order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points, including the closing duplicate.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Accumulates pointer samples for the single active drawing gesture.
///
/// Only one gesture exists at a time; `begin` discards any previous points.
#[derive(Debug, Default)]
pub struct StrokeRecorder {
    points: Vec<Point>,
    active: bool,
}

impl StrokeRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new gesture at `p`, discarding any previous one.
    pub fn begin(&mut self, p: Point) {
        self.points.clear();
        self.points.push(p);
        self.active = true;
    }

    /// Record the next sample. Ignored when no gesture is active.
    pub fn append(&mut self, p: Point) {
        if self.active {
            self.points.push(p);
        }
    }

    /// Finish the gesture.
    ///
    /// Returns the closed stroke when enough points were recorded, otherwise
    /// discards the points and returns `None`.
    pub fn end(&mut self) -> Option<Stroke> {
        if !self.active {
            return None;
        }
        self.active = false;
        if self.points.len() >= MIN_STROKE_POINTS {
            Some(Stroke::close(std::mem::take(&mut self.points)))
        } else {
            self.points.clear();
            None
        }
    }

    /// Drop any in-progress gesture.
    pub fn clear(&mut self) {
        self.points.clear();
        self.active = false;
    }

    /// Whether a gesture is currently being recorded.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Points recorded so far, exposed for live-drawing feedback.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
