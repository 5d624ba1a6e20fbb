//! Half-space clipping planes.

use crate::error::{Error, Result};
use crate::math::{Vec3, Vec4};

/// A plane defined by a point on the plane and its normal vector.
/// The normal points toward the "inside" (kept) half-space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClippingPlane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl ClippingPlane {
    /// Creates a plane, normalising `normal`.
    ///
    /// # Errors
    /// [`Error::ZeroVector`] if `normal` has no direction.
    pub fn new(point: Vec3, normal: Vec3) -> Result<Self> {
        let normal = normal.normalize().map_err(|_| Error::ZeroVector("normal"))?;
        Ok(Self { point, normal })
    }

    /// A plane whose normal is already unit length.
    const fn axis_aligned(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Returns the signed distance from a point to this plane.
    /// Positive = inside (same side as normal), Negative = outside.
    ///
    /// Only the xyz part of `position` is used.
    #[inline]
    pub fn signed_distance(&self, position: Vec4) -> f32 {
        (position.to_vec3() - self.point).dot(self.normal)
    }

    #[inline]
    pub fn contains(&self, position: Vec4) -> bool {
        self.signed_distance(position) >= 0.0
    }

    /// Where the line through `from` and `to` crosses this plane. The result has `w = 1`.
    ///
    /// Callers only ask for crossings between points on opposite sides, so the
    /// two distances never match.
    pub fn intersection(&self, from: Vec4, to: Vec4) -> Vec4 {
        let d1 = self.signed_distance(from);
        let d2 = self.signed_distance(to);
        let t = d1 / (d1 - d2);
        Vec4::from_vec3(from.to_vec3().lerp(to.to_vec3(), t), 1.0)
    }
}

/// Planes of the canonical screen cube `[-1, 1]^3`, ordered left, bottom,
/// near, right, top, far.
pub fn screen_clipping_planes() -> [ClippingPlane; 6] {
    let min = Vec3::new(-1.0, -1.0, -1.0);
    let max = Vec3::ONE;
    [
        ClippingPlane::axis_aligned(min, Vec3::RIGHT),
        ClippingPlane::axis_aligned(min, Vec3::UP),
        ClippingPlane::axis_aligned(min, Vec3::FORWARD),
        ClippingPlane::axis_aligned(max, Vec3::LEFT),
        ClippingPlane::axis_aligned(max, Vec3::DOWN),
        ClippingPlane::axis_aligned(max, Vec3::BACK),
    ]
}

/// View-space planes of a frustum whose near rectangle is
/// `view_width x view_height` at `z_near`, with the apex at the origin.
///
/// # Errors
/// [`Error::ZeroVector`] when a side plane collapses, which happens for a
/// zero `z_near` together with a zero view width or height.
pub fn perspective_clipping_planes(
    view_width: f32,
    view_height: f32,
    z_near: f32,
    z_far: f32,
) -> Result<[ClippingPlane; 6]> {
    let semi_width = view_width / 2.0;
    let semi_height = view_height / 2.0;
    let origin = Vec3::ZERO;
    Ok([
        // The side planes contain the origin; each normal is perpendicular to
        // the near-plane edge it passes through and leans into the frustum.
        ClippingPlane::new(origin, Vec3::new(z_near, 0.0, semi_width))?,
        ClippingPlane::new(origin, Vec3::new(0.0, z_near, semi_height))?,
        ClippingPlane::axis_aligned(Vec3::new(0.0, 0.0, z_near), Vec3::FORWARD),
        ClippingPlane::new(origin, Vec3::new(-z_near, 0.0, semi_width))?,
        ClippingPlane::new(origin, Vec3::new(0.0, -z_near, semi_height))?,
        ClippingPlane::axis_aligned(Vec3::new(0.0, 0.0, z_far), Vec3::BACK),
    ])
}

/// View-space planes of the box `[-w/2, w/2] x [-h/2, h/2] x [z_near, z_far]`.
pub fn orthogonal_clipping_planes(
    view_width: f32,
    view_height: f32,
    z_near: f32,
    z_far: f32,
) -> [ClippingPlane; 6] {
    let near_bottom_left = Vec3::new(-view_width / 2.0, -view_height / 2.0, z_near);
    let far_top_right = Vec3::new(view_width / 2.0, view_height / 2.0, z_far);
    [
        ClippingPlane::axis_aligned(near_bottom_left, Vec3::RIGHT),
        ClippingPlane::axis_aligned(near_bottom_left, Vec3::UP),
        ClippingPlane::axis_aligned(near_bottom_left, Vec3::FORWARD),
        ClippingPlane::axis_aligned(far_top_right, Vec3::LEFT),
        ClippingPlane::axis_aligned(far_top_right, Vec3::DOWN),
        ClippingPlane::axis_aligned(far_top_right, Vec3::BACK),
    ]
}
