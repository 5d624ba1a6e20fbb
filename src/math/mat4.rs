//! 4x4 transformation matrix using column-vector convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec4`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! # Example
//! ```ignore
//! let world_to_view = camera.world_to_view();
//! let model_to_view = world_to_view * mesh.model_to_world(); // model -> world -> view
//! let p = model_to_view * Vec4::point(1.0, 0.0, 0.0);
//! ```

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation whose columns are the given basis directions.
    ///
    /// Maps model axes onto world directions: +x to `right`, +y to `up`,
    /// +z to `forward`. The basis is expected to be orthonormal.
    pub fn from_basis(right: Vec3, up: Vec3, forward: Vec3) -> Self {
        Mat4::new([
            [right.x, up.x, forward.x, 0.0],
            [right.y, up.y, forward.y, 0.0],
            [right.z, up.z, forward.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Perspective projection for a view volume whose near plane is
    /// `view_width x view_height` at distance `z_near` along +z.
    ///
    /// Depth maps `z_near -> -1` and `z_far -> 1` after the divide by `w = z`.
    pub fn perspective(view_width: f32, view_height: f32, z_near: f32, z_far: f32) -> Self {
        let depth = z_far - z_near;
        Mat4::new([
            [2.0 * z_near / view_width, 0.0, 0.0, 0.0],
            [0.0, 2.0 * z_near / view_height, 0.0, 0.0],
            [0.0, 0.0, (z_far + z_near) / depth, -2.0 * z_far * z_near / depth],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }

    /// Orthogonal projection of a `view_width x view_height` box between
    /// `z_near` and `z_far` onto the canonical cube. `w` stays 1.
    pub fn orthographic(view_width: f32, view_height: f32, z_near: f32, z_far: f32) -> Self {
        let depth = z_far - z_near;
        Mat4::new([
            [2.0 / view_width, 0.0, 0.0, 0.0],
            [0.0, 2.0 / view_height, 0.0, 0.0],
            [0.0, 0.0, 2.0 / depth, -(z_far + z_near) / depth],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Maps the canonical screen cube onto buffer pixel coordinates:
    /// x in [-1, 1] to [0, width - 1], y likewise, z untouched.
    pub fn screen_to_window(width: u32, height: u32) -> Self {
        let half_width = (width.saturating_sub(1)) as f32 / 2.0;
        let half_height = (height.saturating_sub(1)) as f32 / 2.0;
        Mat4::scaling(half_width, half_height, 1.0) * Mat4::translation(1.0, 1.0, 0.0)
    }

    pub fn transpose(&self) -> Self {
        let mut data = [[0.0f32; 4]; 4];
        for (row, values) in data.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.data[col][row];
            }
        }
        Mat4::new(data)
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = (0..4).map(|k| self.data[row][k] * rhs.data[k][col]).sum();
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| {
            self.data[r][0] * v.x + self.data[r][1] * v.y + self.data[r][2] * v.z + self.data[r][3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn translation_moves_points_not_directions() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        assert_eq!(m * Vec4::point(0.0, 0.0, 0.0), Vec4::point(1.0, 2.0, 3.0));
        assert_eq!(
            m * Vec4::direction(1.0, 0.0, 0.0),
            Vec4::direction(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn multiplication_applies_right_to_left() {
        let scale = Mat4::scaling(2.0, 2.0, 2.0);
        let translate = Mat4::translation(1.0, 0.0, 0.0);
        let p = Vec4::point(1.0, 0.0, 0.0);
        // Scale first, then translate.
        assert_eq!((translate * scale) * p, Vec4::point(3.0, 0.0, 0.0));
        // Translate first, then scale.
        assert_eq!((scale * translate) * p, Vec4::point(4.0, 0.0, 0.0));
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let m = Mat4::perspective(2.0, 2.0, 1.0, 10.0);
        let near = (m * Vec4::point(0.0, 0.0, 1.0)).perspective_divide();
        let far = (m * Vec4::point(0.0, 0.0, 10.0)).perspective_divide();
        assert_relative_eq!(near.z, -1.0, epsilon = 1e-5);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-5);

        let corner = (m * Vec4::point(1.0, 1.0, 1.0)).perspective_divide();
        assert_relative_eq!(corner.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(corner.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn orthographic_keeps_w_at_one() {
        let m = Mat4::orthographic(4.0, 2.0, 1.0, 11.0);
        let p = m * Vec4::point(2.0, -1.0, 11.0);
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, -1.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.w, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn screen_to_window_spans_buffer() {
        let m = Mat4::screen_to_window(8, 6);
        let low = m * Vec4::point(-1.0, -1.0, 0.25);
        let high = m * Vec4::point(1.0, 1.0, 0.25);
        assert_relative_eq!(low.x, 0.0);
        assert_relative_eq!(low.y, 0.0);
        assert_relative_eq!(high.x, 7.0);
        assert_relative_eq!(high.y, 5.0);
        assert_relative_eq!(high.z, 0.25);
    }
}
