//! Perspective projection and screen mapping.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Camera-space z at or below which geometry must not be projected.
///
/// Callers clip against this before calling [`project`]; the divide itself
/// performs no check.
pub const NEAR_PLANE: f32 = 0.1;

/// Perspective divide: maps a camera-space point onto the z=1 plane.
///
/// Precondition: `v.z > NEAR_PLANE`. Near-zero or negative z produces
/// visually invalid coordinates rather than a fault, which is why the clip
/// rule lives with the callers.
pub fn project(v: Vec3) -> Vec2 {
    Vec2::new(v.x / v.z, v.y / v.z)
}

/// Maps a projected point from [-1, 1] space to pixel coordinates.
///
/// X maps to [0, width]; y is flipped because screen y grows downward while
/// model y grows upward.
pub fn to_screen(p: Vec2, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        (p.x + 1.0) / 2.0 * width as f32,
        (1.0 - (p.y + 1.0) / 2.0) * height as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn project_divides_by_depth() {
        let p = project(Vec3::new(2.0, -4.0, 2.0));
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, -2.0);
    }

    #[test]
    fn origin_maps_to_surface_center() {
        let p = to_screen(Vec2::ZERO, 800, 600);
        assert_relative_eq!(p.x, 400.0);
        assert_relative_eq!(p.y, 300.0);
    }

    #[test]
    fn positive_y_maps_upward_on_screen() {
        // Model-space up (+1) lands at the top of the surface (y = 0).
        let top = to_screen(Vec2::new(0.0, 1.0), 800, 600);
        assert_relative_eq!(top.y, 0.0);
        let bottom = to_screen(Vec2::new(0.0, -1.0), 800, 600);
        assert_relative_eq!(bottom.y, 600.0);
    }

    #[test]
    fn horizontal_extremes_map_to_edges() {
        assert_relative_eq!(to_screen(Vec2::new(-1.0, 0.0), 800, 600).x, 0.0);
        assert_relative_eq!(to_screen(Vec2::new(1.0, 0.0), 800, 600).x, 800.0);
    }
}
