//! Cameras.
//!
//! # Coordinate System
//!
//! Uses a **left-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! In view space the camera sits at the origin looking along +z. Its view
//! volume starts at `z_near` with a `view_width x view_height` rectangle and
//! ends at `z_far`. A perspective camera's volume widens with distance, an
//! orthogonal camera's stays a box.

use crate::clipper::{orthogonal_clipping_planes, perspective_clipping_planes, ClippingPlane};
use crate::error::Result;
use crate::math::{Mat4, Orientation, Quaternion, Vec3};
use crate::update::{RenderUpdate, Tracked};

/// How a camera maps view space onto the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProjectionKind {
    #[default]
    Perspective,
    Orthogonal,
}

impl ProjectionKind {
    /// Whether projected points need dividing by `w`.
    pub fn divides_by_w(self) -> bool {
        matches!(self, Self::Perspective)
    }
}

#[derive(Clone, Debug)]
pub struct Camera {
    projection: ProjectionKind,
    position: Vec3,
    orientation: Orientation,
    view_width: f32,
    view_height: f32,
    z_near: f32,
    z_far: f32,
    pending: RenderUpdate,
}

impl Default for Camera {
    fn default() -> Self {
        Self::perspective(Vec3::ZERO, Orientation::default(), 20.0, 10.0, 10.0, 100.0)
    }
}

impl Camera {
    pub fn new(
        projection: ProjectionKind,
        position: Vec3,
        orientation: Orientation,
        view_width: f32,
        view_height: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        Self {
            projection,
            position,
            orientation,
            view_width,
            view_height,
            z_near,
            z_far,
            pending: RenderUpdate::GEOMETRY,
        }
    }

    pub fn perspective(
        position: Vec3,
        orientation: Orientation,
        view_width: f32,
        view_height: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        Self::new(
            ProjectionKind::Perspective,
            position,
            orientation,
            view_width,
            view_height,
            z_near,
            z_far,
        )
    }

    pub fn orthogonal(
        position: Vec3,
        orientation: Orientation,
        view_width: f32,
        view_height: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        Self::new(
            ProjectionKind::Orthogonal,
            position,
            orientation,
            view_width,
            view_height,
            z_near,
            z_far,
        )
    }

    fn touch(&mut self) {
        self.pending |= RenderUpdate::GEOMETRY;
    }

    // =========================================================================
    // View Volume
    // =========================================================================

    pub fn projection(&self) -> ProjectionKind {
        self.projection
    }

    pub fn set_projection(&mut self, projection: ProjectionKind) {
        self.projection = projection;
        self.touch();
    }

    pub fn view_width(&self) -> f32 {
        self.view_width
    }

    pub fn set_view_width(&mut self, view_width: f32) {
        self.view_width = view_width;
        self.touch();
    }

    pub fn view_height(&self) -> f32 {
        self.view_height
    }

    pub fn set_view_height(&mut self, view_height: f32) {
        self.view_height = view_height;
        self.touch();
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn set_z_near(&mut self, z_near: f32) {
        self.z_near = z_near;
        self.touch();
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    pub fn set_z_far(&mut self, z_far: f32) {
        self.z_far = z_far;
        self.touch();
    }

    // =========================================================================
    // Placement
    // =========================================================================

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.touch();
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.touch();
    }

    fn pan(&mut self, delta: Vec3) {
        self.position = self.position + delta;
        self.touch();
    }

    pub fn pan_forward(&mut self, distance: f32) {
        self.pan(self.orientation.forward() * distance);
    }

    pub fn pan_backward(&mut self, distance: f32) {
        self.pan_forward(-distance);
    }

    pub fn pan_right(&mut self, distance: f32) {
        self.pan(self.orientation.right() * distance);
    }

    pub fn pan_left(&mut self, distance: f32) {
        self.pan_right(-distance);
    }

    pub fn pan_up(&mut self, distance: f32) {
        self.pan(self.orientation.up() * distance);
    }

    pub fn pan_down(&mut self, distance: f32) {
        self.pan_up(-distance);
    }

    /// Turns the camera about one of its own axes.
    fn turn(&mut self, axis: Vec3, angle: f32) -> Result<()> {
        let rotation = Quaternion::from_axis_angle(axis, angle)?;
        self.orientation = self.orientation.rotated(rotation)?;
        self.touch();
        Ok(())
    }

    /// Tilts the view upwards by `angle` radians.
    pub fn rotate_up(&mut self, angle: f32) -> Result<()> {
        self.turn(self.orientation.right(), -angle)
    }

    pub fn rotate_down(&mut self, angle: f32) -> Result<()> {
        self.rotate_up(-angle)
    }

    /// Turns the view towards the camera's right by `angle` radians.
    pub fn rotate_right(&mut self, angle: f32) -> Result<()> {
        self.turn(self.orientation.up(), angle)
    }

    pub fn rotate_left(&mut self, angle: f32) -> Result<()> {
        self.rotate_right(-angle)
    }

    /// Rolls the camera clockwise as seen from behind it, tipping up towards right.
    pub fn roll_right(&mut self, angle: f32) -> Result<()> {
        self.turn(self.orientation.forward(), -angle)
    }

    pub fn roll_left(&mut self, angle: f32) -> Result<()> {
        self.roll_right(-angle)
    }

    // =========================================================================
    // Matrix Generation
    // =========================================================================

    /// Inverse of the camera's placement.
    ///
    /// For a camera with rotation R and position P:
    ///   World transform = T(P) * R
    ///   View = R^T * T(-P)
    pub fn world_to_view(&self) -> Mat4 {
        let p = self.position;
        self.orientation.to_matrix().transpose() * Mat4::translation(-p.x, -p.y, -p.z)
    }

    /// Projection from view space onto the screen cube.
    pub fn view_to_screen(&self) -> Mat4 {
        let (w, h, n, f) = (self.view_width, self.view_height, self.z_near, self.z_far);
        match self.projection {
            ProjectionKind::Perspective => Mat4::perspective(w, h, n, f),
            ProjectionKind::Orthogonal => Mat4::orthographic(w, h, n, f),
        }
    }

    /// The six view-space planes bounding what the camera sees.
    ///
    /// # Errors
    /// [`Error::ZeroVector`](crate::error::Error::ZeroVector) for a perspective frustum that collapses to a line.
    pub fn view_clipping_planes(&self) -> Result<[ClippingPlane; 6]> {
        let (w, h, n, f) = (self.view_width, self.view_height, self.z_near, self.z_far);
        match self.projection {
            ProjectionKind::Perspective => perspective_clipping_planes(w, h, n, f),
            ProjectionKind::Orthogonal => Ok(orthogonal_clipping_planes(w, h, n, f)),
        }
    }
}

impl Tracked for Camera {
    fn pending_updates(&self) -> RenderUpdate {
        self.pending
    }

    fn clear_updates(&mut self) {
        self.pending = RenderUpdate::empty();
    }
}

// =============================================================================
// Tests
// =============================================================================
