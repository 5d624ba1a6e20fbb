//! Rotation quaternions.

use std::ops::Mul;

use super::mat4::Mat4;
use super::vec3::Vec3;
use crate::error::Result;

/// A quaternion `w + xi + yj + zk`. Rotations use unit quaternions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// Fails if `axis` is zero.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Result<Self> {
        let axis = axis.normalize()?;
        let (sin, cos) = (angle / 2.0).sin_cos();
        Ok(Self::new(cos, axis.x * sin, axis.y * sin, axis.z * sin))
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    pub fn magnitude(&self) -> f32 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Rotates `v` by this (unit) quaternion: `q v q*`.
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        let p = Quaternion::new(0.0, v.x, v.y, v.z);
        let r = *self * p * self.conjugate();
        Vec3::new(r.x, r.y, r.z)
    }

    /// Rotation matrix equivalent to [`Quaternion::rotate_vector`].
    pub fn to_matrix(&self) -> Mat4 {
        let Self { w, x, y, z } = *self;
        Mat4::new([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - w * z),
                2.0 * (x * z + w * y),
                0.0,
            ],
            [
                2.0 * (x * y + w * z),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - w * x),
                0.0,
            ],
            [
                2.0 * (x * z - w * y),
                2.0 * (y * z + w * x),
                1.0 - 2.0 * (x * x + y * y),
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

/// Hamilton product. `a * b` rotates by `b` first, then `a`.
impl Mul<Quaternion> for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Self::Output {
        Quaternion::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }
}
