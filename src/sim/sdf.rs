//! Distance field over the scene
//!
//! Cheap analytic distances, good enough for sphere tracing with a safety
//! tolerance: circles are true signed distances, rectangles are unsigned
//! clamp-to-box distances (interior reads 0, never negative depth).

use glam::Vec2;

use super::shape::Shape;

/// Signed distance to a circle (negative inside)
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Unsigned distance to an axis-aligned box with top-left `origin`.
///
/// The query point is clamped into the box and the distance to the clamped
/// point returned, so any interior point reads exactly 0.
#[inline]
pub fn sd_rect(p: Vec2, origin: Vec2, width: f32, height: f32) -> f32 {
    let clamped = p.clamp(origin, origin + Vec2::new(width, height));
    (p - clamped).length()
}

/// Distance from `p` to the nearest shape boundary in the scene.
///
/// Starts at the `max_vision` ceiling, so an empty scene (or one with every
/// shape further than the ceiling) reads exactly `max_vision`. The caller
/// never learns which shape produced the minimum.
pub fn scene_distance(shapes: &[Shape], p: Vec2, max_vision: f32) -> f32 {
    let mut dist = max_vision;
    for shape in shapes {
        dist = dist.min(shape.outer_distance(p));
    }
    dist
}
