//! Per-face lighting: orientation intensity, depth falloff, contrast curve.

use crate::color::Rgb;
use crate::math::vec3::Vec3;

/// Unit normal of the polygon spanned by its first three vertices.
///
/// The cross product of edges (v1-v0) and (v2-v0), normalized. The sign
/// follows the mesh's authored winding order; no attempt is made to detect
/// or correct it. Collinear vertices yield the zero vector, which the
/// shading below treats as zero intensity.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).normalize()
}

/// Raw brightness of a face from its normal, centroid depth, and the
/// contrast setting.
///
/// Intensity is `|normal.z|`: a camera-facing polygon gets 1.0, an edge-on
/// one ~0.0. The absolute value means back faces are lit exactly like front
/// faces; there is no back-face culling in this pipeline. Depth contributes
/// a `2/depth` falloff clamped to [0.3, 1.0]. Contrast shifts light from
/// the ambient term into the directional term:
///
/// ```text
/// base        = 0.4 - 0.35 * (contrast/100)   (0.4 down to 0.05)
/// directional = 0.6 + 0.4  * (contrast/100)   (0.6 up to 1.0)
/// ```
pub fn shade(normal: Vec3, depth: f32, contrast: f32) -> f32 {
    let intensity = normal.z.abs();
    let depth_brightness = (2.0 / depth).clamp(0.3, 1.0);

    let contrast_factor = contrast / 100.0;
    let base = 0.4 - contrast_factor * 0.35;
    let directional = 0.6 + contrast_factor * 0.4;

    base + intensity * directional * depth_brightness
}

/// Maps a raw brightness onto the base color.
///
/// Brightness is clamped to [0, 1], raised to a contrast-dependent power
/// (1 at contrast 0, 5 at contrast 100) to widen the separation between dim
/// and bright faces, then remapped into an output band whose low end shrinks
/// toward 0 and whose high end grows toward 1 as contrast increases.
pub fn shade_color(brightness: f32, base_color: Rgb, contrast: f32) -> Rgb {
    let brightness = brightness.clamp(0.0, 1.0);

    let contrast_factor = contrast / 100.0;
    let power = 1.0 + contrast_factor * 4.0;
    let curved = brightness.powf(power);

    let min_brightness = (0.3 - contrast_factor * 0.3).max(0.0);
    let max_brightness = 0.7 + contrast_factor * 0.3;
    let mapped = min_brightness + curved * (max_brightness - min_brightness);

    base_color.scaled(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn camera_facing_beats_edge_on() {
        let facing = shade(Vec3::new(0.0, 0.0, 1.0), 2.0, 0.0);
        let edge_on = shade(Vec3::new(1.0, 0.0, 0.0), 2.0, 0.0);
        assert!(facing > edge_on);
        // At depth 2 and contrast 0: 0.4 + 1.0 * 0.6 * 1.0
        assert_relative_eq!(facing, 1.0, epsilon = 1e-6);
        assert_relative_eq!(edge_on, 0.4, epsilon = 1e-6);
    }

    #[test]
    fn back_faces_are_lit_like_front_faces() {
        let front = shade(Vec3::new(0.0, 0.0, 1.0), 3.0, 50.0);
        let back = shade(Vec3::new(0.0, 0.0, -1.0), 3.0, 50.0);
        assert_relative_eq!(front, back);
    }

    #[test]
    fn depth_brightness_is_clamped() {
        // Very close: 2/z would exceed 1, clamps to 1
        let near = shade(Vec3::new(0.0, 0.0, 1.0), 0.5, 0.0);
        assert_relative_eq!(near, 1.0, epsilon = 1e-6);
        // Very far: 2/z would drop below 0.3, clamps to 0.3
        let far = shade(Vec3::new(0.0, 0.0, 1.0), 100.0, 0.0);
        assert_relative_eq!(far, 0.4 + 0.6 * 0.3, epsilon = 1e-6);
    }

    #[test]
    fn zero_normal_gets_minimum_brightness() {
        // Degenerate faces shade as if edge-on, never fail
        let degenerate = face_normal(
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(1.0, 0.0, 2.0),
            Vec3::new(2.0, 0.0, 2.0),
        );
        assert_eq!(degenerate, Vec3::ZERO);
        assert_relative_eq!(shade(degenerate, 2.0, 0.0), 0.4, epsilon = 1e-6);
    }

    #[test]
    fn contrast_widens_brightness_separation() {
        // The gap between a face-on polygon and an edge-on one must not
        // shrink as contrast rises.
        let separation = |contrast: f32| {
            shade(Vec3::new(0.0, 0.0, 1.0), 2.0, contrast)
                - shade(Vec3::new(1.0, 0.0, 0.0), 2.0, contrast)
        };
        let mut previous = separation(0.0);
        for contrast in [25.0, 50.0, 75.0, 100.0] {
            let current = separation(contrast);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn full_brightness_white_at_zero_contrast() {
        // Output band at contrast 0 is [0.3, 0.7]; full brightness hits the
        // top of it.
        let c = shade_color(1.0, Rgb::new(255, 255, 255), 0.0);
        assert_eq!(c.r, 178); // floor(255 * 0.7)
        assert!(c.r >= 76 && c.r <= 178);
        assert_eq!(c.g, c.r);
        assert_eq!(c.b, c.r);
    }

    #[test]
    fn overbright_input_is_clamped() {
        let clamped = shade_color(7.5, Rgb::new(200, 100, 50), 30.0);
        let unit = shade_color(1.0, Rgb::new(200, 100, 50), 30.0);
        assert_eq!(clamped, unit);
    }

    #[test]
    fn max_contrast_uses_full_band() {
        assert_eq!(shade_color(1.0, Rgb::new(255, 255, 255), 100.0).r, 255);
        assert_eq!(shade_color(0.0, Rgb::new(255, 255, 255), 100.0).r, 0);
    }

    #[test]
    fn face_normal_follows_winding() {
        let ccw = face_normal(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_relative_eq!(ccw.z, 1.0, epsilon = 1e-6);
        let cw = face_normal(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert_relative_eq!(cw.z, -1.0, epsilon = 1e-6);
    }
}
