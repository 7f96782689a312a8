//! Top-level engine: the Idle → Drawing → Animating state machine and the
//! host-facing boundaries.
//!
//! [`EngineCore`] holds all logic that doesn't depend on the canvas element,
//! so it can be tested without WASM/browser dependencies. [`Engine`] wraps it
//! together with the `HtmlCanvasElement` and owns the render call. The host
//! layer is responsible only for translating DOM events into canvas-local
//! points, scheduling [`EngineCore::step`] per display refresh while the car
//! animates, and calling [`Engine::render`] when an [`Action`] asks for it.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::car::{CarSim, CarState};
use crate::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, WHEEL_RADIUS};
use crate::geom::Point;
use crate::render;
use crate::shape::ShapeProfile;
use crate::stroke::{Stroke, StrokeRecorder};
use crate::wheel::RadiusField;

/// Simulation phase. Drawing and animating never overlap on the same stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No stroke, car off-screen; waiting for a pointer-down.
    #[default]
    Idle,
    /// A stroke is accumulating under the pointer.
    Drawing,
    /// The car is advancing, looping indefinitely via wrap-around.
    Animating,
}

/// Action returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// The visible state changed; repaint.
    RenderNeeded,
    /// A stroke qualified; start scheduling [`EngineCore::step`] per frame.
    AnimationStarted,
}

/// A qualified stroke frozen together with its simulation.
#[derive(Debug, Clone)]
struct Run {
    stroke: Stroke,
    sim: CarSim,
}

/// Read-only view of everything a renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: Phase,
    /// Live gesture points while drawing, the closed stroke while animating.
    pub stroke: Vec<Point>,
    pub car: CarState,
    /// Whether the active wheel shape was judged irregular.
    pub wobbling: bool,
    /// The stroke rescaled to wheel size and centered on the origin; empty
    /// until a stroke qualifies.
    pub wheel_silhouette: Vec<Point>,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
pub struct EngineCore {
    recorder: StrokeRecorder,
    phase: Phase,
    run: Option<Run>,
    car: CarState,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            recorder: StrokeRecorder::new(),
            phase: Phase::Idle,
            run: None,
            car: CarState::spawn(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Viewport ---

    /// Update viewport dimensions in canvas pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    // --- Input events ---

    /// Pointer-down: start a new gesture, discarding any previous stroke.
    /// Ignored while the car is animating.
    pub fn on_pointer_down(&mut self, p: Point) -> Action {
        if self.phase == Phase::Animating {
            return Action::None;
        }
        self.recorder.begin(p);
        self.phase = Phase::Drawing;
        Action::RenderNeeded
    }

    /// Pointer-move: record the next gesture sample. The appended point is
    /// immediately visible through [`Self::stroke_points`] for live feedback.
    pub fn on_pointer_move(&mut self, p: Point) -> Action {
        if self.phase != Phase::Drawing {
            return Action::None;
        }
        self.recorder.append(p);
        Action::RenderNeeded
    }

    /// Pointer-up: close the gesture. A qualifying stroke freezes into a
    /// simulation and the car spawns; a too-short one is discarded silently
    /// and the engine returns to idle.
    pub fn on_pointer_up(&mut self) -> Action {
        if self.phase != Phase::Drawing {
            return Action::None;
        }
        match self.recorder.end() {
            Some(stroke) => {
                let profile = ShapeProfile::analyze(stroke.points());
                let field = RadiusField::new(stroke.points(), &profile);
                let sim = CarSim::new(field, &profile);
                self.run = Some(Run { stroke, sim });
                self.car = CarState::spawn();
                self.phase = Phase::Animating;
                Action::AnimationStarted
            }
            None => {
                self.phase = Phase::Idle;
                Action::RenderNeeded
            }
        }
    }

    // --- Animation ---

    /// Advance the car by one frame. A no-op outside the animating phase, so
    /// a stale scheduler callback after a reset cannot move a discarded car.
    pub fn step(&mut self) -> Action {
        let Some(run) = &self.run else {
            return Action::None;
        };
        if self.phase != Phase::Animating {
            return Action::None;
        }
        self.car = run.sim.tick(self.car, self.viewport_width);
        Action::RenderNeeded
    }

    /// Return to idle: discard the stroke and the in-flight car.
    pub fn reset(&mut self) -> Action {
        self.recorder.clear();
        self.run = None;
        self.car = CarState::spawn();
        self.phase = Phase::Idle;
        Action::RenderNeeded
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Animating
    }

    #[must_use]
    pub fn car(&self) -> CarState {
        self.car
    }

    /// The stroke visible right now: the live gesture while drawing, the
    /// frozen closed stroke while animating.
    #[must_use]
    pub fn stroke_points(&self) -> &[Point] {
        match &self.run {
            Some(run) if self.phase == Phase::Animating => run.stroke.points(),
            _ => self.recorder.points(),
        }
    }

    /// The active simulation, if a stroke has qualified.
    #[must_use]
    pub fn sim(&self) -> Option<&CarSim> {
        self.run.as_ref().map(|run| &run.sim)
    }

    /// Snapshot of the render boundary for hosts that paint themselves.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        let run = self.run.as_ref();
        FrameSnapshot {
            phase: self.phase,
            stroke: self.stroke_points().to_vec(),
            car: self.car,
            wobbling: run.is_some_and(|run| run.sim.wobbling()),
            wheel_silhouette: run
                .map(|run| run.sim.field().silhouette(WHEEL_RADIUS))
                .unwrap_or_default(),
        }
    }

    /// The snapshot as JSON, for JS hosts.
    #[must_use]
    pub fn snapshot_json(&self) -> String {
        // Serializing a plain struct of floats and enums is infallible.
        serde_json::to_string(&self.snapshot()).unwrap_or_default()
    }
}

/// The full game engine. Wraps `EngineCore` and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element, adopting its
    /// current size as the viewport.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let mut core = EngineCore::new();
        core.set_viewport(f64::from(canvas.width()), f64::from(canvas.height()));
        Self { canvas, core }
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, p: Point) -> Action {
        self.core.on_pointer_down(p)
    }

    pub fn on_pointer_move(&mut self, p: Point) -> Action {
        self.core.on_pointer_move(p)
    }

    pub fn on_pointer_up(&mut self) -> Action {
        self.core.on_pointer_up()
    }

    pub fn step(&mut self) -> Action {
        self.core.step()
    }

    pub fn reset(&mut self) -> Action {
        self.core.reset()
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.core.set_viewport(width, height);
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, &self.core)
    }
}
