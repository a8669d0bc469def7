//! Raysweep - a 2D sphere-tracing sweep visualizer
//!
//! Core modules:
//! - `sim`: Deterministic marching core (distance field, marcher, sweep controller)
//! - `config`: Scene/tuning configuration with construction-time validation
//!
//! The crate owns no rendering: each [`sim::tick()`] returns the geometry for
//! that angle step (hits, debug waypoints, ray endpoint) and the host draws
//! it however it likes.

pub mod config;
pub mod sim;

pub use config::{ConfigError, SceneConfig};
pub use sim::{Hit, SceneState, Shape, TickOutput, TraceMode};

use glam::Vec2;

/// Default tuning constants, matching the reference scene
pub mod consts {
    /// Canvas extent the random scene is generated within
    pub const CANVAS_WIDTH: f32 = 1000.0;
    pub const CANVAS_HEIGHT: f32 = 700.0;

    /// Camera placement
    pub const CAMERA_POS_X: f32 = 300.0;
    pub const CAMERA_POS_Y: f32 = 150.0;
    pub const CAMERA_RADIUS: f32 = 10.0;

    /// Shapes generated per kind (circles and rectangles) on reset
    pub const SHAPE_COUNT_PER_KIND: u32 = 30;
    pub const CIRCLE_RADIUS: f32 = 50.0;
    pub const RECT_MIN_SIZE: f32 = 10.0;
    pub const RECT_MAX_SIZE: f32 = 310.0;

    /// Ray length / distance-field ceiling
    pub const MAX_VISION_DISTANCE: f32 = 1000.0;
    /// Marching iteration budget per trace
    pub const MAX_DEPTH_SEARCH: u32 = 20;
    /// Above this clearance a step counts as open space
    pub const MAX_TOLERANCE: f32 = 400.0;
    /// Below this clearance a step counts as a surface hit
    pub const MIN_TOLERANCE: f32 = 0.05;

    /// Sweep start angle and per-tick increment, in degrees
    pub const ANGLE_START: f32 = 45.0;
    pub const ANGLE_INCREMENT: f32 = 1.0;
}

/// Point at a polar offset from `origin`: `angle_deg` degrees, `length` out
#[inline]
pub fn point_at_angle_deg(origin: Vec2, angle_deg: f32, length: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    origin + Vec2::new(rad.cos(), rad.sin()) * length
}

/// Angle from `a` to `b` in degrees (atan2 of the delta)
#[inline]
pub fn angle_to_deg(a: Vec2, b: Vec2) -> f32 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Step `length` units from `from` toward `toward`.
///
/// A degenerate direction (`from == toward`) cannot be normalized; the step
/// becomes a no-op and returns `from` unchanged.
#[inline]
pub fn extend(from: Vec2, toward: Vec2, length: f32) -> Vec2 {
    let dir = (toward - from).normalize_or_zero();
    from + dir * length
}
