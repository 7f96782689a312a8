//! Rendering: draws the road, the live stroke, and the car to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of the
//! engine state and produces pixels — it never mutates simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::car::{CarSim, CarState, wheel_angle};
use crate::consts::{ROAD_Y, WHEEL_BASE, WHEEL_OFFSET_X, WHEEL_RADIUS};
use crate::engine::EngineCore;
use crate::geom::Point;

/// Car body size in pixels.
const BODY_WIDTH: f64 = 120.0;
const BODY_HEIGHT: f64 = 40.0;

/// Body rectangle offset from the car origin; the body sits above the wheels.
const BODY_OFFSET_X: f64 = -40.0;
const BODY_OFFSET_Y: f64 = -80.0;

/// Pivot the body tilts around, relative to the car origin.
const BODY_PIVOT_X: f64 = 20.0;
const BODY_PIVOT_Y: f64 = -60.0;

/// Wheel center height above the car origin.
const WHEEL_OFFSET_Y: f64 = -20.0;

/// Vertical nudge per unit of radius deviation for an irregular wheel.
const WHEEL_WOBBLE_GAIN: f64 = 0.3;

const BACKGROUND_FILL: &str = "#f0f0f0";
const ROAD_STROKE: &str = "#333";
const DRAWING_STROKE: &str = "#000";
const BODY_FILL: &str = "#4a90e2";
const LINE_WIDTH: f64 = 2.0;

/// Draw the full scene: background, road, live stroke, and the car.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let w = core.viewport_width;
    let h = core.viewport_height;

    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND_FILL);
    ctx.fill_rect(0.0, 0.0, w, h);

    draw_road(ctx, w);

    if core.is_animating() {
        if let Some(sim) = core.sim() {
            draw_car(ctx, core.car(), sim)?;
        }
    } else {
        draw_stroke(ctx, core.stroke_points());
    }

    Ok(())
}

// =============================================================
// Scene pieces
// =============================================================

fn draw_road(ctx: &CanvasRenderingContext2d, width: f64) {
    ctx.begin_path();
    ctx.move_to(0.0, ROAD_Y);
    ctx.line_to(width, ROAD_Y);
    ctx.set_stroke_style_str(ROAD_STROKE);
    ctx.set_line_width(LINE_WIDTH);
    ctx.stroke();
}

/// The in-progress gesture as an open polyline.
fn draw_stroke(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    let Some(first) = points.first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in points {
        ctx.line_to(p.x, p.y);
    }
    ctx.set_stroke_style_str(DRAWING_STROKE);
    ctx.set_line_width(LINE_WIDTH);
    ctx.stroke();
}

fn draw_car(ctx: &CanvasRenderingContext2d, car: CarState, sim: &CarSim) -> Result<(), JsValue> {
    // Body, tilted around its pivot.
    ctx.save();
    let pivot_x = car.x + BODY_PIVOT_X;
    let pivot_y = car.y + BODY_PIVOT_Y;
    ctx.translate(pivot_x, pivot_y)?;
    ctx.rotate(car.tilt)?;
    ctx.translate(-pivot_x, -pivot_y)?;
    ctx.set_fill_style_str(BODY_FILL);
    ctx.fill_rect(car.x + BODY_OFFSET_X, car.y + BODY_OFFSET_Y, BODY_WIDTH, BODY_HEIGHT);
    ctx.restore();

    // Two wheels sharing one silhouette, each at its own spin phase.
    draw_wheel(ctx, car.x + WHEEL_OFFSET_X, car.y + WHEEL_OFFSET_Y, sim)?;
    draw_wheel(ctx, car.x + WHEEL_BASE + WHEEL_OFFSET_X, car.y + WHEEL_OFFSET_Y, sim)?;
    Ok(())
}

/// One wheel outline at absolute center `(x, y)`, spun according to its
/// horizontal position and drawn from the scaled stroke silhouette.
fn draw_wheel(ctx: &CanvasRenderingContext2d, x: f64, y: f64, sim: &CarSim) -> Result<(), JsValue> {
    let silhouette = sim.field().silhouette(WHEEL_RADIUS);
    let Some(first) = silhouette.first() else {
        return Ok(());
    };
    if silhouette.len() < 2 {
        return Ok(());
    }

    ctx.save();
    ctx.translate(x, y)?;

    let spin = wheel_angle(x);
    ctx.rotate(spin)?;

    if sim.wobbling() {
        // The wheel shape itself creates the wobble; this just lets the rim
        // ride the current contact radius a little.
        let radius_diff = sim.field().radius_at(spin) - sim.field().mean_radius();
        ctx.translate(0.0, radius_diff * WHEEL_WOBBLE_GAIN)?;
    }

    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in &silhouette {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();
    ctx.set_stroke_style_str(ROAD_STROKE);
    ctx.set_line_width(LINE_WIDTH);
    ctx.stroke();
    ctx.restore();
    Ok(())
}
