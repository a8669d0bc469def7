//! Sphere-tracing marcher
//!
//! Converts (camera, angle, scene) into a hit or a miss by repeatedly
//! stepping along the ray by the current clearance reported by the scene
//! distance field. No closed-form intersection math anywhere.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sdf::scene_distance;
use super::shape::Shape;
use crate::config::SceneConfig;
use crate::{extend, point_at_angle_deg};

/// How faithfully to reproduce the reference marcher.
///
/// The reference driver has two quirks: it re-runs the whole scene-wide
/// trace once per shape in the list, and an open-space step
/// (`dist > max_tolerance`) does not advance the march origin. `Parity`
/// keeps both; `Corrected` traces once per angle and always advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TraceMode {
    #[default]
    Parity,
    Corrected,
}

/// Marcher tuning for a single trace
#[derive(Debug, Clone, Copy)]
pub struct MarchParams {
    /// Ray length and distance-field ceiling
    pub max_vision_distance: f32,
    /// Iteration budget; bounds worst-case per-tick cost
    pub max_depth_search: u32,
    /// Clearance above which a step reads as open space
    pub max_tolerance: f32,
    /// Clearance below which a step reads as a surface hit
    pub min_tolerance: f32,
    pub mode: TraceMode,
}

impl MarchParams {
    pub fn from_config(cfg: &SceneConfig) -> Self {
        Self {
            max_vision_distance: cfg.max_vision_distance,
            max_depth_search: cfg.max_depth_search,
            max_tolerance: cfg.max_tolerance,
            min_tolerance: cfg.min_tolerance,
            mode: cfg.trace_mode,
        }
    }
}

/// A point where the marcher judged the ray to have reached a surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub position: Vec2,
    /// Clearance at the hit point; always below `min_tolerance`
    pub achieved_distance: f32,
}

/// Debug geometry for one marching step (a clearance circle)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub point: Vec2,
    pub radius: f32,
}

/// Outcome of a single trace attempt
#[derive(Debug, Clone)]
pub struct Trace {
    /// `None` is a miss: the iteration budget ran out without a surface
    pub hit: Option<Hit>,
    /// Clearance circles for visualization, initial clearance included
    pub waypoints: Vec<Waypoint>,
    /// Far end of the ray at `max_vision_distance`
    pub ray_end: Vec2,
}

/// March one ray from `camera_pos` toward `angle_deg`.
///
/// Runs up to `max_depth_search` step-and-refine iterations against the
/// scene-wide minimum distance. Exhausting the budget is a silent miss,
/// never an error.
pub fn trace(camera_pos: Vec2, angle_deg: f32, shapes: &[Shape], params: &MarchParams) -> Trace {
    let ray_end = point_at_angle_deg(camera_pos, angle_deg, params.max_vision_distance);

    let mut origin = camera_pos;
    let mut dist = scene_distance(shapes, origin, params.max_vision_distance);

    // the reference draws the initial clearance circle before stepping
    let mut waypoints = vec![Waypoint { point: origin, radius: dist }];

    for _ in 0..params.max_depth_search {
        // step forward by the last known clearance
        let point = extend(origin, ray_end, dist);
        dist = scene_distance(shapes, point, params.max_vision_distance);

        if dist > params.max_tolerance {
            // open space: in parity mode the origin is retained, so the next
            // iteration re-steps from the same place with the new clearance
            if params.mode == TraceMode::Corrected {
                origin = point;
                if origin.distance(camera_pos) >= params.max_vision_distance {
                    break;
                }
            }
            continue;
        }

        if dist < params.min_tolerance {
            return Trace {
                hit: Some(Hit { position: point, achieved_distance: dist }),
                waypoints,
                ray_end,
            };
        }

        waypoints.push(Waypoint { point, radius: dist });
        origin = point;

        if params.mode == TraceMode::Corrected
            && origin.distance(camera_pos) >= params.max_vision_distance
        {
            break;
        }
    }

    Trace { hit: None, waypoints, ray_end }
}
