//! Model-space to camera-space vertex transform.

use crate::config::FrameConfig;
use crate::math::vec3::Vec3;

/// Rotates a vertex by the frame's effective angles (X, then Y, then Z) and
/// pushes it away from the camera by the zoom distance.
///
/// Pure: safe to apply to every vertex of every face in any order.
pub fn transform_vertex(v: Vec3, cfg: &FrameConfig) -> Vec3 {
    v.rotate_xyz(cfg.angle_x, cfg.angle_y, cfg.angle_z)
        .translate_z(cfg.zoom)
}
