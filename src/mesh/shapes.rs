//! Named shapes.
//!
//! Each shape is a small parameter struct that builds a [`Mesh`]. Shapes of
//! the same kind share one unit-sized [`MeshStructure`] and get their size
//! from the mesh's scale.

use std::sync::{Arc, OnceLock};

use super::{Dimension, Mesh};
use crate::error::Result;
use crate::geometry::MeshStructure;
use crate::math::Vec3;
use crate::transform::Transform;

fn unit_cube() -> Arc<MeshStructure> {
    static CUBE: OnceLock<Arc<MeshStructure>> = OnceLock::new();
    Arc::clone(CUBE.get_or_init(|| Arc::new(MeshStructure::cube())))
}

fn unit_plane() -> Arc<MeshStructure> {
    static PLANE: OnceLock<Arc<MeshStructure>> = OnceLock::new();
    Arc::clone(PLANE.get_or_init(|| Arc::new(MeshStructure::plane())))
}

fn scaled(structure: impl Into<Arc<MeshStructure>>, dimension: Dimension, scale: Vec3) -> Mesh {
    let mut transform = Transform::new();
    transform.set_scale(scale);
    Mesh::new(structure, dimension).with_transform(transform)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    pub side_length: f32,
}

impl Cube {
    pub fn new(side_length: f32) -> Self {
        Self { side_length }
    }

    pub fn mesh(&self) -> Mesh {
        let s = self.side_length;
        scaled(unit_cube(), Dimension::Three, Vec3::new(s, s, s))
    }
}

/// Box with independent length (x), width (z) and height (y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    pub length: f32,
    pub width: f32,
    pub height: f32,
}

impl Cuboid {
    pub fn new(length: f32, width: f32, height: f32) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// The largest cube that fits inside, i.e. with the smallest side.
    pub fn to_cube(&self) -> Cube {
        Cube::new(self.length.min(self.width).min(self.height))
    }

    pub fn mesh(&self) -> Mesh {
        scaled(
            unit_cube(),
            Dimension::Three,
            Vec3::new(self.length, self.height, self.width),
        )
    }
}

impl From<Cube> for Cuboid {
    fn from(cube: Cube) -> Self {
        let s = cube.side_length;
        Self::new(s, s, s)
    }
}

/// Rectangle in the model xy-plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub length: f32,
    pub height: f32,
}

impl Plane {
    pub fn new(length: f32, height: f32) -> Self {
        Self { length, height }
    }

    pub fn mesh(&self) -> Mesh {
        scaled(
            unit_plane(),
            Dimension::Two,
            Vec3::new(self.length, self.height, 1.0),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub side_length: f32,
}

impl Square {
    pub fn new(side_length: f32) -> Self {
        Self { side_length }
    }

    pub fn to_plane(&self) -> Plane {
        Plane::new(self.side_length, self.side_length)
    }

    pub fn mesh(&self) -> Mesh {
        self.to_plane().mesh()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub radius: f32,
    pub resolution: usize,
}

impl Circle {
    pub fn new(radius: f32, resolution: usize) -> Self {
        Self { radius, resolution }
    }

    pub fn mesh(&self) -> Result<Mesh> {
        let r = self.radius;
        Ok(scaled(
            MeshStructure::circle(self.resolution)?,
            Dimension::Two,
            Vec3::new(r, r, 1.0),
        ))
    }
}

/// Flat annulus. Radii are built into the structure, the mesh is unscaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub resolution: usize,
}

impl Ring {
    pub fn new(inner_radius: f32, outer_radius: f32, resolution: usize) -> Self {
        Self {
            inner_radius,
            outer_radius,
            resolution,
        }
    }

    pub fn mesh(&self) -> Result<Mesh> {
        let structure =
            MeshStructure::ring(self.resolution, self.inner_radius, self.outer_radius)?;
        Ok(Mesh::new(structure, Dimension::Two))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    pub radius: f32,
    pub height: f32,
    pub resolution: usize,
}

impl Cylinder {
    pub fn new(radius: f32, height: f32, resolution: usize) -> Self {
        Self {
            radius,
            height,
            resolution,
        }
    }

    pub fn mesh(&self) -> Result<Mesh> {
        let r = self.radius;
        Ok(scaled(
            MeshStructure::cylinder(self.resolution)?,
            Dimension::Three,
            Vec3::new(r, r, self.height),
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cone {
    pub radius: f32,
    pub height: f32,
    pub resolution: usize,
}

impl Cone {
    pub fn new(radius: f32, height: f32, resolution: usize) -> Self {
        Self {
            radius,
            height,
            resolution,
        }
    }

    pub fn mesh(&self) -> Result<Mesh> {
        let r = self.radius;
        Ok(scaled(
            MeshStructure::cone(self.resolution)?,
            Dimension::Three,
            Vec3::new(r, r, self.height),
        ))
    }
}

/// A single drawn segment between two model-space points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Vec3,
    pub end: Vec3,
}

impl Line {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    pub fn mesh(&self) -> Mesh {
        Mesh::new(MeshStructure::line(self.start, self.end), Dimension::One)
            .with_draw_edges(true)
    }
}
