//! Scene obstacles
//!
//! The shape set is fixed and small, so it is a closed enum rather than a
//! trait object; distance dispatch is a plain `match`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sdf::{sd_circle, sd_rect};

/// A scene obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Disk obstacle; `radius >= 0`
    Circle { center: Vec2, radius: f32 },
    /// Axis-aligned box; `origin` is the top-left corner, `width`/`height > 0`
    Rect { origin: Vec2, width: f32, height: f32 },
}

impl Shape {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Shape::Circle { center, radius }
    }

    pub fn rect(origin: Vec2, width: f32, height: f32) -> Self {
        Shape::Rect { origin, width, height }
    }

    /// Distance from `p` to this shape's outer boundary, measured toward the
    /// shape. The marcher uses it as a lower bound on how far a ray may
    /// advance without crossing the surface.
    ///
    /// Circles report negative depth inside; rectangles read 0 anywhere
    /// inside (clamp-to-box distance is unsigned).
    #[inline]
    pub fn outer_distance(&self, p: Vec2) -> f32 {
        match *self {
            Shape::Circle { center, radius } => sd_circle(p, center, radius),
            Shape::Rect { origin, width, height } => sd_rect(p, origin, width, height),
        }
    }

    /// Geometric center, used only for the distance-to-camera layering sort
    pub fn center(&self) -> Vec2 {
        match *self {
            Shape::Circle { center, .. } => center,
            Shape::Rect { origin, width, height } => origin + Vec2::new(width, height) / 2.0,
        }
    }

    /// Reference point the layering sort measures from (shape origin, as the
    /// reference scene sorts by origin rather than center)
    pub fn origin(&self) -> Vec2 {
        match *self {
            Shape::Circle { center, .. } => center,
            Shape::Rect { origin, .. } => origin,
        }
    }
}
