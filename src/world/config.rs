//! Fixed parameters of one viewing session.
//!
//! * [`WorldConfig`] – the room box and its grid.
//! * [`CameraParams`] – pinhole camera constants (no rotation is modelled).
//! * [`LabelStyle`] – knobs for the grid-line annotation heuristics.
//! * [`Viewport`] – output surface size; replaced wholesale on resize.

use glam::{Vec2, vec2};
use thiserror::Error;

/// Extra distance past the near plane used whenever geometry has to be cut
/// at the camera (room polygons, near ends of width-axis grid lines).
pub const CLIP_EPSILON: f32 = 0.01;

/// The single axis-aligned room and its integer grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldConfig {
    /// Cells per axis; valid grid coordinates are `0 ..= size-1`.
    pub size: u32,
    pub room_height: f32,
    pub floor_level: f32,
    /// Minimum distance the viewpoint keeps from every wall.
    pub margin: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 11,
            room_height: 2.5,
            floor_level: 0.0,
            margin: 0.5,
        }
    }
}

impl WorldConfig {
    /// Largest grid coordinate (`size - 1`) as a world distance.
    #[inline]
    pub fn max_coord(&self) -> f32 {
        (self.size - 1) as f32
    }

    #[inline]
    pub fn ceiling_level(&self) -> f32 {
        self.floor_level + self.room_height
    }

    /// Grid center, where a fresh session puts the viewer.
    #[inline]
    pub fn center(&self) -> Vec2 {
        let c = self.max_coord() * 0.5;
        vec2(c, c)
    }

    /// Inclusive `[lo, hi]` range the viewpoint may occupy on either axis.
    #[inline]
    pub fn walkable(&self) -> (f32, f32) {
        (self.margin, self.max_coord() - self.margin)
    }
}

/// Pinhole camera looking along the world depth axis, towards depth 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
    /// Pixels per world unit at depth 1 (smaller = wider field of view).
    pub focal_length: f32,
    /// Eye height above the floor.
    pub eye_height: f32,
    /// Points at or closer than this depth-from-camera are not projected.
    pub near_clip: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            focal_length: 270.0,
            eye_height: 1.25,
            near_clip: 0.2,
        }
    }
}

/// Grid-label sizing and placement knobs (pixels unless noted).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    pub base_font: f32,
    pub min_font: f32,
    pub max_font: f32,
    /// Interior depth-axis lines are only labelled at or above this size.
    pub legible_font: f32,
    /// Depth (world units) at which a depth-axis label gets `base_font`.
    pub reference_depth: f32,
    /// Inset of the safe rectangle from every viewport edge.
    pub safe_inset: f32,
    /// Width-axis label size as a fraction of `base_font`.
    pub lateral_fraction: f32,
    /// Width-axis lines within this many cells of the viewer get labels.
    pub lateral_radius: f32,
    /// Horizontal gap between a depth-axis line end and its label.
    pub gap: f32,
    /// Vertical offset of width-axis labels, as a multiple of their size.
    pub drop: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            base_font: 14.0,
            min_font: 9.0,
            max_font: 22.0,
            legible_font: 10.0,
            reference_depth: 3.0,
            safe_inset: 8.0,
            lateral_fraction: 0.85,
            lateral_radius: 2.0,
            gap: 6.0,
            drop: 1.2,
        }
    }
}

/// Output surface dimensions and the derived screen center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
    pub center: Vec2,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            center: vec2(width as f32 * 0.5, height as f32 * 0.5),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        vec2(self.width as f32, self.height as f32)
    }

    /// True if `p` lies inside the viewport shrunk by `inset` on every side.
    pub fn contains_inset(&self, p: Vec2, inset: f32) -> bool {
        let max = self.size() - Vec2::splat(inset);
        p.x >= inset && p.y >= inset && p.x <= max.x && p.y <= max.y
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Everything a [`Session`](crate::sim::Session) needs to start.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Config {
    pub world: WorldConfig,
    pub camera: CameraParams,
    pub labels: LabelStyle,
    pub viewport: Viewport,
}

/// Reasons a [`Config`] is refused.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid size {0} must be an odd number of at least 3")]
    GridSize(u32),

    #[error("room height must be positive, got {0}")]
    RoomHeight(f32),

    #[error("wall margin {margin} must lie in [0, {limit}]")]
    Margin { margin: f32, limit: f32 },

    #[error("focal length must be positive, got {0}")]
    FocalLength(f32),

    #[error("near clip distance must be positive, got {0}")]
    NearClip(f32),

    #[error("viewport {0}x{1} has no area")]
    EmptyViewport(usize, usize),

    #[error("font clamp [{min}, {max}] is empty")]
    FontClamp { min: f32, max: f32 },
}

impl Config {
    /// Check the data-model invariants before any geometry is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.world;
        if w.size < 3 || w.size % 2 == 0 {
            return Err(ConfigError::GridSize(w.size));
        }
        if !(w.room_height > 0.0) {
            return Err(ConfigError::RoomHeight(w.room_height));
        }
        // keeps the walkable square non-empty, hence inside the walls
        let limit = w.max_coord() * 0.5;
        if !(w.margin >= 0.0 && w.margin <= limit) {
            return Err(ConfigError::Margin {
                margin: w.margin,
                limit,
            });
        }
        if !(self.camera.focal_length > 0.0) {
            return Err(ConfigError::FocalLength(self.camera.focal_length));
        }
        if !(self.camera.near_clip > 0.0) {
            return Err(ConfigError::NearClip(self.camera.near_clip));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::EmptyViewport(
                self.viewport.width,
                self.viewport.height,
            ));
        }
        let l = &self.labels;
        if !(l.min_font > 0.0 && l.min_font <= l.max_font) {
            return Err(ConfigError::FontClamp {
                min: l.min_font,
                max: l.max_font,
            });
        }
        Ok(())
    }
}
