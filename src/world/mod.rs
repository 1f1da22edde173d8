pub mod camera;
pub mod config;
pub mod geometry;

pub use camera::{Camera, ScreenPoint};
pub use config::{
    CLIP_EPSILON, CameraParams, Config, ConfigError, LabelStyle, Viewport, WorldConfig,
};
pub use geometry::{
    Corners, GridLine, Orientation, PolyPoints, Polygon, RoomSnapshot, Surface, WallSide,
};
