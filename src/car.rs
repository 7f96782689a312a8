//! Car kinematics: per-tick tilt, bob, and advance derived from the wheels'
//! instantaneous contact radius.
//!
//! The simulation is pure and frame-driven. A caller-owned scheduler (display
//! refresh callback, fixed-timestep loop, or a test) invokes
//! [`CarSim::tick`] once per frame; the sim itself never mutates — it maps an
//! immutable [`CarState`] to the next one.

#[cfg(test)]
#[path = "car_test.rs"]
mod car_test;

use std::f64::consts::TAU;

use serde::Serialize;

use crate::consts::{
    BASE_SPEED, BOB_GAIN_IRREGULAR, BOB_GAIN_ROUND, PX_PER_RADIAN, ROAD_Y, SPAWN_X,
    SPEED_FACTOR_IRREGULAR, WHEEL_BASE, WHEEL_OFFSET_X,
};
use crate::shape::ShapeProfile;
use crate::wheel::RadiusField;

/// Car pose for one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarState {
    /// Horizontal position of the car origin.
    pub x: f64,
    /// Vertical road-contact level of the car origin; dips below or rises
    /// above [`ROAD_Y`] as the wheels bob.
    pub y: f64,
    /// Body rotation in radians; positive banks the nose up to the right.
    pub tilt: f64,
}

impl CarState {
    /// The off-screen spawn pose at road level.
    #[must_use]
    pub fn spawn() -> Self {
        Self { x: SPAWN_X, y: ROAD_Y, tilt: 0.0 }
    }
}

/// Spin angle in radians of a wheel whose center sits at absolute `x`,
/// wrapped into `[0, 2π)`.
///
/// Spin is derived from absolute position (`x / 20 mod 2π`) rather than
/// integrated angular velocity, so respawning or teleporting the car changes
/// the visual spin phase discontinuously. Known quirk, kept on purpose.
#[must_use]
pub fn wheel_angle(x: f64) -> f64 {
    (x / PX_PER_RADIAN).rem_euclid(TAU)
}

/// Frozen per-run simulation context.
///
/// Built once when a stroke qualifies and never mutated afterwards: the
/// radius field and the stroke statistics. The viewport width is a live
/// quantity and is fed into every [`CarSim::tick`] by the caller.
#[derive(Debug, Clone)]
pub struct CarSim {
    field: RadiusField,
    mean_radius: f64,
    wobbling: bool,
}

impl CarSim {
    #[must_use]
    pub fn new(field: RadiusField, profile: &ShapeProfile) -> Self {
        Self {
            field,
            mean_radius: profile.mean_radius,
            wobbling: !profile.is_circular,
        }
    }

    /// Whether the wheel shape was judged irregular.
    #[must_use]
    pub fn wobbling(&self) -> bool {
        self.wobbling
    }

    /// The shared radius field both wheels roll on.
    #[must_use]
    pub fn field(&self) -> &RadiusField {
        &self.field
    }

    /// Advance the car by one frame.
    ///
    /// Past the right edge of the canvas the car respawns at the off-screen
    /// sentinel and loops again; this is a continuous loop, not a terminal
    /// state. `canvas_width` is sampled fresh each frame, so a viewport
    /// resize mid-run moves the wrap edge immediately. Otherwise the new
    /// pose is derived from the two wheels' instantaneous contact radii:
    /// tilt from their difference, bob from their average, speed from the
    /// shape quality.
    #[must_use]
    pub fn tick(&self, state: CarState, canvas_width: f64) -> CarState {
        if state.x > canvas_width {
            return CarState { x: SPAWN_X, y: ROAD_Y, tilt: state.tilt };
        }

        let left_x = state.x + WHEEL_OFFSET_X;
        let right_x = state.x + WHEEL_BASE + WHEEL_OFFSET_X;

        let left_radius = self.field.radius_at(wheel_angle(left_x));
        let right_radius = self.field.radius_at(wheel_angle(right_x));

        let tilt = (right_radius - left_radius).atan2(WHEEL_BASE);

        let avg_radius = (left_radius + right_radius) / 2.0;
        let bob_gain = if self.wobbling { BOB_GAIN_IRREGULAR } else { BOB_GAIN_ROUND };
        let height_offset = (avg_radius - self.mean_radius) * bob_gain;

        let speed_factor = if self.wobbling { SPEED_FACTOR_IRREGULAR } else { 1.0 };

        CarState {
            x: state.x + BASE_SPEED * speed_factor,
            // Larger wheels lift the body above the road line.
            y: ROAD_Y - height_offset,
            tilt,
        }
    }
}
