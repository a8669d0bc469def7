//! Sweep / reset controller
//!
//! One `tick` = one angle step. The controller owns the revolution counter
//! and the two transitions out of normal sweeping: revolution complete and
//! camera embedded in an obstacle. Both regenerate the scene; neither is an
//! error. Pacing belongs to the host - stop calling `tick` to stop.

use glam::Vec2;

use super::march::{Hit, MarchParams, TraceMode, Waypoint, trace};
use super::state::SceneState;
use crate::point_at_angle_deg;

/// Geometry produced by one tick, for the host to render and discard
#[derive(Debug, Clone)]
pub struct TickOutput {
    /// Snapshot of the full hit accumulator (the renderer redraws every
    /// retained hit each frame)
    pub hits: Vec<Hit>,
    /// Clearance circles from this tick's marching only
    pub waypoints: Vec<Waypoint>,
    /// Far end of this tick's ray
    pub ray_endpoint: Vec2,
    /// True when this tick regenerated the scene instead of marching
    pub did_reset: bool,
}

/// Advance the sweep by exactly one angle step.
///
/// A tick either marches the current angle (appending any hits to the
/// accumulator and advancing the angle) or performs a reset - when the
/// sweep has covered a full revolution, or when the camera sits within
/// `min_tolerance` of any shape.
pub fn tick(state: &mut SceneState) -> TickOutput {
    // revolution complete: the reset transition stands alone, no marching
    if state.current_angle >= state.config.angle_start + 360.0 {
        state.reset();
        return reset_output(state);
    }

    // camera embedded in an obstacle is fatal for this scene instance
    let embedded = state
        .shapes
        .iter()
        .any(|s| s.outer_distance(state.camera.pos) <= state.config.min_tolerance);
    if embedded {
        log::info!("camera embedded in obstacle, regenerating scene");
        state.reset();
        return reset_output(state);
    }

    let params = MarchParams::from_config(&state.config);
    let angle = state.current_angle;
    let ray_endpoint = point_at_angle_deg(state.camera.pos, angle, params.max_vision_distance);

    // parity mode reproduces the reference driver: one full scene-wide trace
    // per shape in the list, each free to append its own hit for this ray
    let runs = match params.mode {
        TraceMode::Parity => state.shapes.len(),
        TraceMode::Corrected => 1,
    };

    let mut waypoints = Vec::new();
    for _ in 0..runs {
        let out = trace(state.camera.pos, angle, &state.shapes, &params);
        waypoints.extend(out.waypoints);
        if let Some(hit) = out.hit {
            log::debug!(
                "hit at ({:.1}, {:.1}), clearance {:.4}, angle {:.1}",
                hit.position.x,
                hit.position.y,
                hit.achieved_distance,
                angle
            );
            state.hits.push(hit);
        }
    }

    state.current_angle += state.config.angle_increment;

    TickOutput {
        hits: state.hits.clone(),
        waypoints,
        ray_endpoint,
        did_reset: false,
    }
}

fn reset_output(state: &SceneState) -> TickOutput {
    TickOutput {
        hits: Vec::new(),
        waypoints: Vec::new(),
        ray_endpoint: point_at_angle_deg(
            state.camera.pos,
            state.current_angle,
            state.config.max_vision_distance,
        ),
        did_reset: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::sim::shape::Shape;

    fn fixed_state(shapes: Vec<Shape>, camera: Vec2, angle_start: f32) -> SceneState {
        let config = SceneConfig {
            camera_pos: camera,
            angle_start,
            ..Default::default()
        };
        SceneState::with_shapes(config, shapes).unwrap()
    }

    #[test]
    fn test_full_revolution_then_reset() {
        // empty fixed scene: nothing to hit, nothing to embed in
        let mut state = fixed_state(Vec::new(), Vec2::new(300.0, 150.0), 45.0);

        for i in 0..360 {
            let out = tick(&mut state);
            assert!(!out.did_reset, "tick {i} reset early");
        }
        assert_eq!(state.current_angle, 45.0 + 360.0);

        // the 361st tick is the reset transition: no march, empty accumulator
        let out = tick(&mut state);
        assert!(out.did_reset);
        assert!(out.hits.is_empty());
        assert!(out.waypoints.is_empty());
        assert!(state.hits.is_empty());
        assert_eq!(state.current_angle, 45.0);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_embedded_camera_forces_reset() {
        let shapes = vec![Shape::circle(Vec2::new(300.0, 150.0), 20.0)];
        let mut state = fixed_state(shapes, Vec2::new(300.0, 150.0), 45.0);

        let out = tick(&mut state);
        assert!(out.did_reset);
        assert_eq!(state.generation, 1);
        // reset swapped in a regenerated scene
        assert_eq!(state.shapes.len(), 60);
        assert_eq!(state.current_angle, 45.0);
    }

    #[test]
    fn test_parity_appends_one_hit_per_shape() {
        // two circles, both far enough apart that the ray at 0 degrees only
        // strikes the first; parity still runs one trace per shape
        let shapes = vec![
            Shape::circle(Vec2::new(400.0, 0.0), 50.0),
            Shape::circle(Vec2::new(0.0, -400.0), 50.0),
        ];
        let mut state = fixed_state(shapes, Vec2::ZERO, 0.0);

        let out = tick(&mut state);
        assert!(!out.did_reset);
        assert_eq!(out.hits.len(), 2);
        assert_eq!(out.hits[0].position, out.hits[1].position);
        assert!((out.hits[0].position.x - 350.0).abs() < 0.5);
    }

    #[test]
    fn test_corrected_traces_once_per_angle() {
        let shapes = vec![
            Shape::circle(Vec2::new(400.0, 0.0), 50.0),
            Shape::circle(Vec2::new(0.0, -400.0), 50.0),
        ];
        let config = SceneConfig {
            camera_pos: Vec2::ZERO,
            angle_start: 0.0,
            trace_mode: TraceMode::Corrected,
            ..Default::default()
        };
        let mut state = SceneState::with_shapes(config, shapes).unwrap();

        let out = tick(&mut state);
        assert_eq!(out.hits.len(), 1);
        assert!((out.hits[0].position.x - 350.0).abs() < 0.5);
    }

    #[test]
    fn test_hits_accumulate_in_discovery_order() {
        // the circle subtends ~7 degrees from the camera, so the first few
        // angles all land hits
        let shapes = vec![Shape::circle(Vec2::new(400.0, 0.0), 50.0)];
        let mut state = fixed_state(shapes, Vec2::ZERO, 0.0);

        let first = tick(&mut state);
        let second = tick(&mut state);
        assert_eq!(first.hits.len(), 1);
        assert_eq!(second.hits.len(), 2);
        // earlier hit keeps its slot in the snapshot
        assert_eq!(second.hits[0], first.hits[0]);
    }

    #[test]
    fn test_clear_hits_leaves_sweep_alone() {
        let shapes = vec![Shape::circle(Vec2::new(400.0, 0.0), 50.0)];
        let mut state = fixed_state(shapes, Vec2::ZERO, 0.0);

        tick(&mut state);
        tick(&mut state);
        assert!(!state.hits.is_empty());
        let angle = state.current_angle;

        state.clear_hits();
        assert!(state.hits.is_empty());
        assert_eq!(state.current_angle, angle);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_ray_endpoint_is_on_the_ray() {
        let mut state = fixed_state(Vec::new(), Vec2::ZERO, 0.0);
        let out = tick(&mut state);
        // angle 0, vision 1000
        assert!((out.ray_endpoint - Vec2::new(1000.0, 0.0)).length() < 1e-2);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let mut a = SceneState::new(SceneConfig::default(), 424242).unwrap();
        let mut b = SceneState::new(SceneConfig::default(), 424242).unwrap();

        for _ in 0..400 {
            let oa = tick(&mut a);
            let ob = tick(&mut b);
            assert_eq!(oa.did_reset, ob.did_reset);
            assert_eq!(oa.hits.len(), ob.hits.len());
        }
        assert_eq!(a.current_angle, b.current_angle);
        assert_eq!(a.shapes, b.shapes);
        assert_eq!(a.hits, b.hits);
    }
}
