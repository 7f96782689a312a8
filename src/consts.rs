//! Shared numeric constants for the circlecar crate.

// ── Stroke capture ──────────────────────────────────────────────

/// Minimum number of recorded points for a gesture to count as a wheel
/// drawing. Shorter strokes are discarded on release.
pub const MIN_STROKE_POINTS: usize = 11;

// ── Shape quality ───────────────────────────────────────────────

/// Mean radial deviation, as a fraction of the mean radius, below which a
/// stroke is classified as a clean circle.
pub const CIRCULARITY_TOLERANCE: f64 = 0.2;

// ── Wheels ──────────────────────────────────────────────────────

/// Rendered wheel radius in pixels. Also the fallback radius reported for
/// under-determined strokes (fewer than 3 points).
pub const WHEEL_RADIUS: f64 = 20.0;

/// Horizontal distance between the two wheel centers, in pixels.
pub const WHEEL_BASE: f64 = 80.0;

/// Horizontal offset from the car origin to a wheel center, in pixels.
pub const WHEEL_OFFSET_X: f64 = -20.0;

/// Divisor mapping a wheel's absolute x position to its spin angle in
/// radians: `angle = x / PX_PER_RADIAN mod 2π`.
pub const PX_PER_RADIAN: f64 = 20.0;

// ── Car motion ──────────────────────────────────────────────────

/// Horizontal advance per tick for a clean circular wheel, in pixels.
pub const BASE_SPEED: f64 = 2.0;

/// Speed multiplier for irregular wheels (rolling resistance).
pub const SPEED_FACTOR_IRREGULAR: f64 = 0.7;

/// Vertical bob gain for irregular wheels.
pub const BOB_GAIN_IRREGULAR: f64 = 1.0;

/// Vertical bob gain for clean circles; residual sampling noise still
/// produces a subtle bob.
pub const BOB_GAIN_ROUND: f64 = 0.3;

// ── Scene layout ────────────────────────────────────────────────

/// Vertical position of the road line in canvas pixels.
pub const ROAD_Y: f64 = 500.0;

/// Off-screen x position where the car spawns and respawns.
pub const SPAWN_X: f64 = -100.0;

/// Default viewport width before the host reports a size (the DOM layer
/// clamps the canvas to 800×600).
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;

/// Default viewport height before the host reports a size.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;
