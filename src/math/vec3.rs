use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 3D point or direction.
///
/// Serves both as a model-space vertex and as a camera-space point inside the
/// pipeline. Every transform returns a new value; nothing mutates in place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotation around the X axis (pitch).
    pub fn rotate_x(&self, angle: f32) -> Self {
        let sin = angle.sin();
        let cos = angle.cos();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }

    /// Rotation around the Y axis (yaw).
    pub fn rotate_y(&self, angle: f32) -> Self {
        let sin = angle.sin();
        let cos = angle.cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// Rotation around the Z axis (roll).
    pub fn rotate_z(&self, angle: f32) -> Self {
        let sin = angle.sin();
        let cos = angle.cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
            z: self.z,
        }
    }

    /// Applies all three axis rotations in the fixed order X, then Y, then Z.
    ///
    /// Euler rotations do not commute; mouse-drag and slider input both rely
    /// on this composition order staying fixed.
    pub fn rotate_xyz(&self, angle_x: f32, angle_y: f32, angle_z: f32) -> Self {
        self.rotate_x(angle_x).rotate_y(angle_y).rotate_z(angle_z)
    }

    /// Offsets the z coordinate only, leaving x and y untouched.
    pub fn translate_z(&self, dz: f32) -> Self {
        Self {
            x: self.x,
            y: self.y,
            z: self.z + dz,
        }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Returns the unit vector in the same direction.
    ///
    /// A zero-length vector is returned unchanged, so degenerate geometry
    /// (collinear face vertices) yields a zero normal instead of NaN.
    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude <= f32::EPSILON {
            return Self::ZERO;
        }
        Self {
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
        }
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

/// Arithmetic mean of a set of points, per axis.
///
/// Callers must pass at least one point; the solid render path only reaches
/// this with full polygons.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    debug_assert!(!points.is_empty(), "centroid of an empty point set");
    let mut sum = Vec3::ZERO;
    for p in points {
        sum = sum + *p;
    }
    sum / points.len() as f32
}

/// Component-wise addition of two vectors.
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

/// Scalar division of a vector.
impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

/// Negation of a vector.
impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn zero_angle_rotations_are_identity() {
        let v = Vec3::new(1.5, -2.0, 3.0);
        assert_vec3_eq(v.rotate_xyz(0.0, 0.0, 0.0), v);
    }

    #[test]
    fn rotate_x_quarter_turn() {
        // +Y rotates into +Z
        let v = Vec3::new(0.0, 1.0, 0.0).rotate_x(FRAC_PI_2);
        assert_vec3_eq(v, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn rotation_order_is_not_commutative() {
        // Y then Z must differ from Z then Y for the same input
        let v = Vec3::new(1.0, 0.0, 0.0);
        let y_then_z = v.rotate_y(FRAC_PI_2).rotate_z(FRAC_PI_2);
        let z_then_y = v.rotate_z(FRAC_PI_2).rotate_y(FRAC_PI_2);
        assert!((y_then_z - z_then_y).magnitude() > 0.5);
        // and rotate_xyz composes as X then Y then Z
        assert_vec3_eq(v.rotate_xyz(0.0, FRAC_PI_2, FRAC_PI_2), y_then_z);
    }

    #[test]
    fn translate_z_leaves_xy_alone() {
        let v = Vec3::new(1.0, 2.0, 3.0).translate_z(2.5);
        assert_vec3_eq(v, Vec3::new(1.0, 2.0, 5.5));
    }

    #[test]
    fn normalize_zero_vector_stays_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn normalize_produces_unit_length() {
        let v = Vec3::new(3.0, 4.0, 0.0).normalize();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn cross_of_axes() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_vec3_eq(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn centroid_averages_per_axis() {
        let points = [
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(1.0, 0.0, 3.0),
            Vec3::new(0.0, 1.0, 3.0),
        ];
        let c = centroid(&points);
        assert_vec3_eq(c, Vec3::new(1.0 / 3.0, 1.0 / 3.0, 3.0));
    }
}
