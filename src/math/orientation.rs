//! Orthonormal forward/up/right frames.

use super::mat4::Mat4;
use super::quaternion::Quaternion;
use super::vec3::Vec3;
use crate::error::{Error, Result};

/// Tolerance for the zero and perpendicularity checks on constructor input.
const ORIENTATION_EPSILON: f32 = 1e-4;

/// The direction an entity faces, as a validated orthonormal basis.
///
/// In model space every entity faces +z with +y up and +x to its right;
/// the orientation says where those three axes point in the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    forward: Vec3,
    up: Vec3,
    right: Vec3,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            forward: Vec3::FORWARD,
            up: Vec3::UP,
            right: Vec3::RIGHT,
        }
    }
}

impl Orientation {
    /// Builds an orientation from forward and up directions.
    ///
    /// # Errors
    /// [`Error::ZeroVector`] if either direction is zero, [`Error::NotOrthogonal`]
    /// if they are not perpendicular.
    pub fn forward_up(forward: Vec3, up: Vec3) -> Result<Self> {
        let (forward, up) = validate_pair(forward, "forward", up, "up")?;
        Ok(Self {
            forward,
            up,
            right: up.cross(forward),
        })
    }

    pub fn up_right(up: Vec3, right: Vec3) -> Result<Self> {
        let (up, right) = validate_pair(up, "up", right, "right")?;
        Ok(Self {
            forward: right.cross(up),
            up,
            right,
        })
    }

    pub fn right_forward(right: Vec3, forward: Vec3) -> Result<Self> {
        let (right, forward) = validate_pair(right, "right", forward, "forward")?;
        Ok(Self {
            forward,
            up: forward.cross(right),
            right,
        })
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Rotation taking model axes onto this orientation's directions.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_basis(self.right, self.up, self.forward)
    }

    /// Returns this orientation rotated by `rotation`.
    pub fn rotated(&self, rotation: Quaternion) -> Result<Self> {
        Self::forward_up(
            rotation.rotate_vector(self.forward),
            rotation.rotate_vector(self.up),
        )
    }
}

fn validate_pair(
    a: Vec3,
    a_name: &'static str,
    b: Vec3,
    b_name: &'static str,
) -> Result<(Vec3, Vec3)> {
    if a.approx_eq(Vec3::ZERO, ORIENTATION_EPSILON) {
        return Err(Error::ZeroVector(a_name));
    }
    if b.approx_eq(Vec3::ZERO, ORIENTATION_EPSILON) {
        return Err(Error::ZeroVector(b_name));
    }
    let a = a.normalize().map_err(|_| Error::ZeroVector(a_name))?;
    let b = b.normalize().map_err(|_| Error::ZeroVector(b_name))?;
    if a.dot(b).abs() > ORIENTATION_EPSILON {
        return Err(Error::NotOrthogonal);
    }
    Ok((a, b))
}
