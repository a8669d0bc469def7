//! Scene and tuning configuration
//!
//! Everything overridable lives here; `Default` reproduces the reference
//! scene. Invalid combinations are rejected at construction time via
//! [`SceneConfig::validate`] - there is no runtime error taxonomy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::sim::TraceMode;

/// Full configuration for one scene instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    // === Scene generation ===
    /// Extent the random shape origins are drawn from
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// How many circles and how many rectangles each reset generates
    pub shape_count_per_kind: u32,
    /// Radius shared by all generated circles
    pub circle_radius: f32,
    /// Rectangle side lengths are drawn from `[rect_min_size, rect_max_size)`
    pub rect_min_size: f32,
    pub rect_max_size: f32,

    // === Camera ===
    pub camera_pos: Vec2,
    pub camera_radius: f32,

    // === Marcher tuning ===
    /// Ray length and distance-field ceiling
    pub max_vision_distance: f32,
    /// Iteration budget per trace
    pub max_depth_search: u32,
    /// Clearance above which a step reads as open space
    pub max_tolerance: f32,
    /// Clearance below which a step reads as a surface hit
    pub min_tolerance: f32,
    /// Parity reproduces the reference quirks, Corrected traces once per angle
    pub trace_mode: TraceMode,

    // === Sweep ===
    /// Start angle in degrees
    pub angle_start: f32,
    /// Degrees advanced per tick
    pub angle_increment: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_width: consts::CANVAS_WIDTH,
            canvas_height: consts::CANVAS_HEIGHT,
            shape_count_per_kind: consts::SHAPE_COUNT_PER_KIND,
            circle_radius: consts::CIRCLE_RADIUS,
            rect_min_size: consts::RECT_MIN_SIZE,
            rect_max_size: consts::RECT_MAX_SIZE,
            camera_pos: Vec2::new(consts::CAMERA_POS_X, consts::CAMERA_POS_Y),
            camera_radius: consts::CAMERA_RADIUS,
            max_vision_distance: consts::MAX_VISION_DISTANCE,
            max_depth_search: consts::MAX_DEPTH_SEARCH,
            max_tolerance: consts::MAX_TOLERANCE,
            min_tolerance: consts::MIN_TOLERANCE,
            trace_mode: TraceMode::Parity,
            angle_start: consts::ANGLE_START,
            angle_increment: consts::ANGLE_INCREMENT,
        }
    }
}

impl SceneConfig {
    /// Check every construction-time contract; called by `SceneState::new`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(ConfigError::NonPositiveCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.shape_count_per_kind == 0 {
            // a permanently-empty scene never produces a hit
            return Err(ConfigError::EmptyScene);
        }
        if self.circle_radius < 0.0 {
            return Err(ConfigError::NegativeRadius(self.circle_radius));
        }
        if self.camera_radius < 0.0 {
            return Err(ConfigError::NegativeRadius(self.camera_radius));
        }
        if self.rect_min_size <= 0.0 || self.rect_max_size < self.rect_min_size {
            return Err(ConfigError::BadRectSizes {
                min: self.rect_min_size,
                max: self.rect_max_size,
            });
        }
        if self.max_vision_distance <= 0.0 {
            return Err(ConfigError::NonPositiveVision(self.max_vision_distance));
        }
        if self.max_depth_search == 0 {
            return Err(ConfigError::ZeroDepthBudget);
        }
        if self.min_tolerance <= 0.0 || self.max_tolerance <= self.min_tolerance {
            return Err(ConfigError::BadTolerances {
                min: self.min_tolerance,
                max: self.max_tolerance,
            });
        }
        if self.angle_increment <= 0.0 {
            return Err(ConfigError::NonPositiveIncrement(self.angle_increment));
        }
        Ok(())
    }
}

/// Rejected configuration, reported at `SceneState` construction
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveCanvas { width: f32, height: f32 },
    EmptyScene,
    NegativeRadius(f32),
    BadRectSizes { min: f32, max: f32 },
    NonPositiveVision(f32),
    ZeroDepthBudget,
    BadTolerances { min: f32, max: f32 },
    NonPositiveIncrement(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveCanvas { width, height } => {
                write!(f, "canvas dimensions must be positive, got {width}x{height}")
            }
            ConfigError::EmptyScene => {
                write!(f, "shape_count_per_kind must be at least 1")
            }
            ConfigError::NegativeRadius(r) => {
                write!(f, "radius must be non-negative, got {r}")
            }
            ConfigError::BadRectSizes { min, max } => {
                write!(f, "rectangle sizes must satisfy 0 < min <= max, got {min}..{max}")
            }
            ConfigError::NonPositiveVision(d) => {
                write!(f, "max_vision_distance must be positive, got {d}")
            }
            ConfigError::ZeroDepthBudget => {
                write!(f, "max_depth_search must be at least 1")
            }
            ConfigError::BadTolerances { min, max } => {
                write!(f, "tolerances must satisfy 0 < min < max, got {min}..{max}")
            }
            ConfigError::NonPositiveIncrement(i) => {
                write!(f, "angle_increment must be positive, got {i}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
