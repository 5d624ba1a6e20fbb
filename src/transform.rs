//! Placement of an entity in the world.
//!
//! Provides a [`Transform`] struct with a fluent API for managing position,
//! orientation and scale.

use crate::error::Result;
use crate::math::{Mat4, Orientation, Quaternion, Vec3};

/// A 3D transform with position, orientation, and scale.
///
/// Provides a fluent API where mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position_xyz(5.0, 2.0, 0.0)
///     .set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    orientation: Orientation,
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Orientation::default(),
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with default values (position=0, facing +z, scale=1).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    // ============ Position ============

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    // ============ Orientation ============

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.orientation = orientation;
        self
    }

    /// Rotate the orientation by a quaternion.
    pub fn rotate(&mut self, rotation: Quaternion) -> Result<&mut Self> {
        self.orientation = self.orientation.rotated(rotation)?;
        Ok(self)
    }

    // ============ Scale ============

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn set_scale_uniform(&mut self, scale: f32) -> &mut Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    // ============ Matrix Generation ============

    /// Model-to-world matrix.
    ///
    /// Order: Translation * Rotation * Scale
    /// (Scale applied first, then orientation, then translation)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            * self.orientation.to_matrix()
            * Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
    }
}
