//! Draw-a-wheel car toy: freehand-draw a closed loop and it becomes the
//! procedural shape of both wheels of a car that drives across the screen,
//! tilting and bobbing according to how irregular the drawing is.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but the
//! whole geometry and simulation core is pure Rust with no browser
//! dependency: the host JavaScript layer only translates DOM pointer events
//! into canvas-local points, schedules one [`engine::EngineCore::step`] per
//! display refresh while the car animates, and asks [`engine::Engine`] to
//! repaint.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Phase machine, host boundaries, and testable [`engine::EngineCore`] |
//! | [`stroke`] | Gesture recording and the frozen closed [`stroke::Stroke`] |
//! | [`shape`] | Centroid, mean radius, and roundness classification |
//! | [`wheel`] | Angle-indexed [`wheel::RadiusField`] over the stroke |
//! | [`car`] | Per-frame car kinematics: tilt, bob, advance, wrap-around |
//! | [`render`] | Scene painting onto the 2D canvas context |
//! | [`geom`] | Points and angular distance |
//! | [`consts`] | Shared numeric constants (sizes, speeds, tolerances) |

pub mod car;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod render;
pub mod shape;
pub mod stroke;
pub mod wheel;
