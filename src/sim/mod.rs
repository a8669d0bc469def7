//! Deterministic marching core
//!
//! All algorithmic content lives here. This module must be pure and
//! deterministic:
//! - Seeded RNG only (scene regeneration)
//! - Stable shape iteration order (generation order after the layering sort)
//! - No rendering or platform dependencies

pub mod march;
pub mod sdf;
pub mod shape;
pub mod state;
pub mod tick;

pub use march::{Hit, MarchParams, Trace, TraceMode, Waypoint, trace};
pub use sdf::{scene_distance, sd_circle, sd_rect};
pub use shape::Shape;
pub use state::{Camera, SceneState};
pub use tick::{TickOutput, tick};
