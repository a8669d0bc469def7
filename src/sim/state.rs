//! Sweep state and scene generation
//!
//! All state for one controller instance lives in [`SceneState`]: no
//! process-wide singletons, one exclusive owner, serializable throughout.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::march::Hit;
use super::shape::Shape;
use crate::config::{ConfigError, SceneConfig};

/// The fixed viewpoint rays sweep from. Never part of the shape list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pos: Vec2,
    pub radius: f32,
}

/// Complete sweep state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneState {
    pub config: SceneConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Bumped on every regeneration; keys the per-scene RNG stream
    pub generation: u32,
    pub camera: Camera,
    /// Current obstacles, sorted by origin distance to camera (draw layering
    /// only; order never changes hit positions)
    pub shapes: Vec<Shape>,
    /// Hits discovered during the current revolution, in discovery order
    pub hits: Vec<Hit>,
    /// Sweep angle in degrees
    pub current_angle: f32,
}

impl SceneState {
    /// Validate the config, place the camera and generate the first scene
    pub fn new(config: SceneConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let camera = Camera { pos: config.camera_pos, radius: config.camera_radius };
        let mut state = Self {
            seed,
            generation: 0,
            camera,
            shapes: generate_scene(&config, seed, 0),
            hits: Vec::new(),
            current_angle: config.angle_start,
            config,
        };
        sort_by_camera_distance(&mut state.shapes, camera.pos);
        Ok(state)
    }

    /// Fixed-scene constructor: skips random generation entirely, for
    /// deterministic tests and hosts that author their own scenes
    pub fn with_shapes(config: SceneConfig, shapes: Vec<Shape>) -> Result<Self, ConfigError> {
        config.validate()?;
        let camera = Camera { pos: config.camera_pos, radius: config.camera_radius };
        Ok(Self {
            seed: 0,
            generation: 0,
            camera,
            shapes,
            hits: Vec::new(),
            current_angle: config.angle_start,
            config,
        })
    }

    /// External "clear" event (e.g. a pointer click): empties the hit
    /// accumulator without disturbing the sweep
    pub fn clear_hits(&mut self) {
        self.hits.clear();
    }

    /// Regenerate in place: fresh shapes, cleared hits, angle back to start
    pub(crate) fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.hits.clear();
        self.shapes = generate_scene(&self.config, self.seed, self.generation);
        sort_by_camera_distance(&mut self.shapes, self.camera.pos);
        self.current_angle = self.config.angle_start;
        log::info!(
            "scene reset: generation {}, {} shapes",
            self.generation,
            self.shapes.len()
        );
    }
}

/// Generate `shape_count_per_kind` circles of fixed radius plus the same
/// count of rectangles with randomized sides, origins uniform over the
/// canvas. Deterministic per (seed, generation).
fn generate_scene(config: &SceneConfig, seed: u64, generation: u32) -> Vec<Shape> {
    // decorrelate generations while keeping determinism within a run
    let gen_seed = (generation as u64)
        .wrapping_mul(2654435761)
        .wrapping_add(seed);
    let mut rng = Pcg32::seed_from_u64(gen_seed);

    let count = config.shape_count_per_kind as usize;
    let mut shapes = Vec::with_capacity(count * 2);

    for _ in 0..count {
        let x = rng.random_range(0.0..config.canvas_width).floor();
        let y = rng.random_range(0.0..config.canvas_height).floor();
        shapes.push(Shape::circle(Vec2::new(x, y), config.circle_radius));
    }

    for _ in 0..count {
        let x = rng.random_range(0.0..config.canvas_width).floor();
        let y = rng.random_range(0.0..config.canvas_height).floor();
        let w = rng.random_range(config.rect_min_size..=config.rect_max_size).floor();
        let h = rng.random_range(config.rect_min_size..=config.rect_max_size).floor();
        shapes.push(Shape::rect(Vec2::new(x, y), w, h));
    }

    shapes
}

/// Sort shapes by origin distance to `target`, nearest first. Stable, so
/// equal distances keep generation order.
fn sort_by_camera_distance(shapes: &mut [Shape], target: Vec2) {
    shapes.sort_by(|a, b| {
        let da = a.origin().distance_squared(target);
        let db = b.origin().distance_squared(target);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_both_kinds() {
        let state = SceneState::new(SceneConfig::default(), 42).unwrap();
        let circles = state
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Circle { .. }))
            .count();
        let rects = state.shapes.len() - circles;
        assert_eq!(circles, 30);
        assert_eq!(rects, 30);
        assert!(state.hits.is_empty());
        assert_eq!(state.current_angle, state.config.angle_start);
    }

    #[test]
    fn test_shapes_inside_canvas() {
        let state = SceneState::new(SceneConfig::default(), 7).unwrap();
        for shape in &state.shapes {
            let o = shape.origin();
            assert!(o.x >= 0.0 && o.x < state.config.canvas_width);
            assert!(o.y >= 0.0 && o.y < state.config.canvas_height);
            if let Shape::Rect { width, height, .. } = shape {
                assert!(*width >= state.config.rect_min_size);
                assert!(*height >= state.config.rect_min_size);
                assert!(*width <= state.config.rect_max_size);
                assert!(*height <= state.config.rect_max_size);
            }
        }
    }

    #[test]
    fn test_same_seed_same_scene() {
        let a = SceneState::new(SceneConfig::default(), 99999).unwrap();
        let b = SceneState::new(SceneConfig::default(), 99999).unwrap();
        assert_eq!(a.shapes, b.shapes);

        let c = SceneState::new(SceneConfig::default(), 1).unwrap();
        assert_ne!(a.shapes, c.shapes);
    }

    #[test]
    fn test_shapes_sorted_by_camera_distance() {
        let state = SceneState::new(SceneConfig::default(), 3).unwrap();
        let cam = state.camera.pos;
        let dists: Vec<f32> = state
            .shapes
            .iter()
            .map(|s| s.origin().distance(cam))
            .collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_reset_regenerates_and_clears() {
        let mut state = SceneState::new(SceneConfig::default(), 5).unwrap();
        let before = state.shapes.clone();
        state.hits.push(Hit {
            position: Vec2::ZERO,
            achieved_distance: 0.0,
        });
        state.current_angle = 200.0;

        state.reset();
        assert_eq!(state.generation, 1);
        assert!(state.hits.is_empty());
        assert_eq!(state.current_angle, state.config.angle_start);
        assert_ne!(state.shapes, before);
    }

    #[test]
    fn test_with_shapes_is_fixed() {
        let shapes = vec![Shape::circle(Vec2::new(400.0, 150.0), 50.0)];
        let state = SceneState::with_shapes(SceneConfig::default(), shapes.clone()).unwrap();
        assert_eq!(state.shapes, shapes);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let cfg = SceneConfig {
            shape_count_per_kind: 0,
            ..Default::default()
        };
        assert!(SceneState::new(cfg, 0).is_err());
    }
}
