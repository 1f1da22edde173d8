use glam::{Vec2, Vec3, vec2, vec3};

use crate::world::config::{CameraParams, Viewport};

/// A world point after projection.
///
/// `depth` is the camera-relative distance along the depth axis; it only
/// feeds draw ordering and label sizing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub pos: Vec2,
    pub depth: f32,
}

/// Pinhole camera fixed to look along the world depth axis.
///
/// * World points are `Vec3(x = lateral, y = height, z = depth)`.
/// * The viewer faces towards *decreasing* depth, so a point is in front of
///   the camera when `viewpoint.y - z > 0`.
/// * There is no yaw: the optical axis never rotates.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    params: CameraParams,
    viewpoint: Vec2, // x = lateral, y = depth position
    center: Vec2,    // screen-space center of the viewport
}

impl Camera {
    pub fn new(params: CameraParams, viewpoint: Vec2, viewport: &Viewport) -> Self {
        Self {
            params,
            viewpoint,
            center: viewport.center,
        }
    }

    #[inline]
    pub fn viewpoint(&self) -> Vec2 {
        self.viewpoint
    }

    #[inline(always)]
    pub fn near(&self) -> f32 {
        self.params.near_clip
    }

    /// Translate `p` into camera-local coords:
    ///  .x = lateral offset (+ right)
    ///  .y = vertical offset above the eye
    ///  .z = depth-from-camera (+ in front)
    #[inline]
    pub fn to_cam(&self, p: Vec3) -> Vec3 {
        vec3(
            p.x - self.viewpoint.x,
            p.y - self.params.eye_height,
            self.viewpoint.y - p.z,
        )
    }

    /// Depth-from-camera of a world depth coordinate.
    #[inline]
    pub fn depth_of(&self, world_z: f32) -> f32 {
        self.viewpoint.y - world_z
    }

    /// Pixels per world unit at depth-from-camera `depth`.
    ///
    /// ```text
    /// scale = focal / depth
    /// ```
    #[inline]
    pub fn scale(&self, depth: f32) -> f32 {
        self.params.focal_length / depth
    }

    /// Project a world point, or `None` when it is at or behind the near plane.
    pub fn project(&self, p: Vec3) -> Option<ScreenPoint> {
        let c = self.to_cam(p);
        if c.z <= self.params.near_clip {
            return None;
        }
        let s = self.scale(c.z);
        // screen Y grows downward, world height grows upward
        Some(ScreenPoint {
            pos: vec2(self.center.x + c.x * s, self.center.y - c.y * s),
            depth: c.z,
        })
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn centered() -> Camera {
        Camera::new(CameraParams::default(), vec2(5.0, 5.0), &Viewport::default())
    }

    #[test]
    fn point_at_feet_is_clipped() {
        assert!(centered().project(vec3(5.0, 0.0, 5.0)).is_none());
    }

    #[test]
    fn near_clip_boundary_is_exclusive() {
        let cam = centered();
        // exactly at the near plane
        assert!(cam.project(vec3(5.0, 0.0, 4.8)).is_none());
        // behind the viewer
        assert!(cam.project(vec3(1.0, 2.0, 9.0)).is_none());
        assert!(cam.project(vec3(5.0, 0.0, 4.7)).is_some());
    }

    #[test]
    fn far_left_corner_projects_left_of_center() {
        let cam = centered();
        let p = cam.project(Vec3::ZERO).unwrap();
        assert!((p.depth - 5.0).abs() < 1e-5);
        assert!(p.pos.x < 400.0);
        // lateral -5 at depth 5 with focal 270 → 270 px left
        assert!((p.pos.x - 130.0).abs() < 1e-3);
        // floor is below the eye → below the screen center
        assert!(p.pos.y > 300.0);
    }

    #[test]
    fn farther_points_shrink() {
        let cam = centered();
        let mut last = f32::INFINITY;
        for z in [4.5, 4.0, 3.0, 1.0, 0.0] {
            let p = cam.project(vec3(0.0, 0.0, z)).unwrap();
            let s = cam.scale(p.depth).abs();
            assert!(s < last);
            last = s;
        }
    }

    #[test]
    fn to_cam_axes_align() {
        let cam = centered();
        let c = cam.to_cam(vec3(7.0, 2.25, 1.0));
        assert!((c - vec3(2.0, 1.0, 4.0)).length() < 1e-5);
    }
}
