//! Mesh topology and the generated shapes.
//!
//! Every generator builds its shape at unit size around the model origin;
//! the owning mesh's scale gives it real dimensions. 2-D shapes lie in the
//! xy-plane with their front side facing -z, 3-D shapes are wound so every
//! front side faces out of the solid.

use std::collections::HashSet;
use std::f32::consts::TAU;

use super::primitives::{Edge, Triangle, Vertex};
use super::style::{EdgeStyle, FaceStyle};
use crate::error::{Error, Result};
use crate::math::Vec3;

/// Smallest number of segments a round shape can be built from.
pub const MIN_RESOLUTION: usize = 3;

/// Vertices plus the edges and triangles that reference them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshStructure {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub triangles: Vec<Triangle>,
}

// Corners of the unit cube. Faces below are 0-based into this table.
const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(-0.5, -0.5, 0.5),
];

const CUBE_FACES: [[usize; 3]; 12] = [
    // Front
    [0, 1, 2],
    [0, 2, 3],
    // Right
    [3, 2, 4],
    [3, 4, 5],
    // Back
    [5, 4, 6],
    [5, 6, 7],
    // Left
    [7, 6, 1],
    [7, 1, 0],
    // Top
    [1, 6, 4],
    [1, 4, 2],
    // Bottom
    [5, 7, 0],
    [5, 0, 3],
];

const CUBE_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [7, 6],
    [6, 4],
    [4, 5],
    [5, 7],
    [0, 7],
    [1, 6],
    [2, 4],
    [3, 5],
];

impl MeshStructure {
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            edges,
            triangles,
        }
    }

    /// Builds a structure from positions and triangle indices, deriving one
    /// edge per distinct triangle side.
    pub fn from_triangles(positions: Vec<Vec3>, faces: &[[usize; 3]]) -> Self {
        let vertices = positions.into_iter().map(Vertex::new).collect();
        let triangles = faces.iter().map(|&[a, b, c]| Triangle::new(a, b, c)).collect();

        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for &[a, b, c] in faces {
            for (p, q) in [(a, b), (b, c), (c, a)] {
                if seen.insert((p.min(q), p.max(q))) {
                    edges.push(Edge::new(p, q));
                }
            }
        }

        Self::new(vertices, edges, triangles)
    }

    /// Checks that every edge and triangle refers to an existing vertex.
    pub fn validate(&self) -> Result<()> {
        let vertices = self.vertices.len();
        let mut indices = self
            .edges
            .iter()
            .flat_map(|e| e.vertices)
            .chain(self.triangles.iter().flat_map(|t| t.vertices));
        match indices.find(|&index| index >= vertices) {
            Some(index) => Err(Error::InvalidIndex { index, vertices }),
            None => Ok(()),
        }
    }

    /// Unit cube centred on the origin.
    pub fn cube() -> Self {
        Self::new(
            CUBE_VERTICES.iter().copied().map(Vertex::new).collect(),
            CUBE_EDGES.iter().map(|&[a, b]| Edge::new(a, b)).collect(),
            CUBE_FACES
                .iter()
                .map(|&[a, b, c]| Triangle::new(a, b, c))
                .collect(),
        )
    }

    /// Unit square in the xy-plane centred on the origin.
    pub fn plane() -> Self {
        let vertices = [(-0.5, -0.5), (-0.5, 0.5), (0.5, 0.5), (0.5, -0.5)]
            .into_iter()
            .map(|(x, y)| Vertex::new(Vec3::new(x, y, 0.0)))
            .collect();
        let edges = vec![
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(3, 0),
        ];
        let triangles = vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)];
        Self::new(vertices, edges, triangles)
    }

    /// Unit-radius disc as a fan of `resolution` triangles.
    pub fn circle(resolution: usize) -> Result<Self> {
        check_resolution(resolution)?;
        let mut vertices = vec![Vertex::new(Vec3::ZERO)];
        vertices.extend(unit_ring(resolution, 0.0, 1.0));

        let rim = |i: usize| 1 + i % resolution;
        let edges = (0..resolution).map(|i| Edge::new(rim(i), rim(i + 1))).collect();
        let triangles = (0..resolution)
            .map(|i| Triangle::new(0, rim(i + 1), rim(i)))
            .collect();
        Ok(Self::new(vertices, edges, triangles))
    }

    /// Flat annulus between `inner_radius` and `outer_radius`.
    pub fn ring(resolution: usize, inner_radius: f32, outer_radius: f32) -> Result<Self> {
        check_resolution(resolution)?;
        if !(0.0..outer_radius).contains(&inner_radius) {
            return Err(Error::InvalidRadii {
                inner: inner_radius,
                outer: outer_radius,
            });
        }
        let mut vertices: Vec<Vertex> = unit_ring(resolution, 0.0, inner_radius).collect();
        vertices.extend(unit_ring(resolution, 0.0, outer_radius));

        let inner = |i: usize| i % resolution;
        let outer = |i: usize| resolution + i % resolution;

        let mut edges = Vec::with_capacity(2 * resolution);
        let mut triangles = Vec::with_capacity(2 * resolution);
        for i in 0..resolution {
            edges.push(Edge::new(inner(i), inner(i + 1)));
            edges.push(Edge::new(outer(i), outer(i + 1)));
            triangles.push(Triangle::new(inner(i), inner(i + 1), outer(i + 1)));
            triangles.push(Triangle::new(inner(i), outer(i + 1), outer(i)));
        }
        Ok(Self::new(vertices, edges, triangles))
    }

    /// Unit-radius, unit-height cylinder along z, capped at both ends.
    pub fn cylinder(resolution: usize) -> Result<Self> {
        check_resolution(resolution)?;
        let mut vertices = vec![
            Vertex::new(Vec3::new(0.0, 0.0, -0.5)),
            Vertex::new(Vec3::new(0.0, 0.0, 0.5)),
        ];
        vertices.extend(unit_ring(resolution, -0.5, 1.0));
        vertices.extend(unit_ring(resolution, 0.5, 1.0));

        let bottom = |i: usize| 2 + i % resolution;
        let top = |i: usize| 2 + resolution + i % resolution;

        let mut edges = Vec::with_capacity(3 * resolution);
        let mut triangles = Vec::with_capacity(4 * resolution);
        for i in 0..resolution {
            edges.push(Edge::new(bottom(i), bottom(i + 1)));
            edges.push(Edge::new(top(i), top(i + 1)));
            edges.push(Edge::new(bottom(i), top(i)));

            triangles.push(Triangle::new(0, bottom(i + 1), bottom(i)));
            triangles.push(Triangle::new(1, top(i), top(i + 1)));
            triangles.push(Triangle::new(bottom(i), bottom(i + 1), top(i)));
            triangles.push(Triangle::new(bottom(i + 1), top(i + 1), top(i)));
        }
        Ok(Self::new(vertices, edges, triangles))
    }

    /// Unit-radius, unit-height cone along z with its apex at +z.
    pub fn cone(resolution: usize) -> Result<Self> {
        check_resolution(resolution)?;
        let mut vertices = vec![
            Vertex::new(Vec3::new(0.0, 0.0, -0.5)),
            Vertex::new(Vec3::new(0.0, 0.0, 0.5)),
        ];
        vertices.extend(unit_ring(resolution, -0.5, 1.0));

        let base = |i: usize| 2 + i % resolution;

        let mut edges = Vec::with_capacity(2 * resolution);
        let mut triangles = Vec::with_capacity(2 * resolution);
        for i in 0..resolution {
            edges.push(Edge::new(base(i), base(i + 1)));
            edges.push(Edge::new(base(i), 1));

            triangles.push(Triangle::new(0, base(i + 1), base(i)));
            triangles.push(Triangle::new(base(i), base(i + 1), 1));
        }
        Ok(Self::new(vertices, edges, triangles))
    }

    /// A single segment from `start` to `end`.
    pub fn line(start: Vec3, end: Vec3) -> Self {
        Self::new(
            vec![Vertex::new(start), Vertex::new(end)],
            vec![Edge::new(0, 1)],
            Vec::new(),
        )
    }

    pub fn set_edge_style(&mut self, style: EdgeStyle) {
        for edge in &mut self.edges {
            edge.style = style;
        }
    }

    pub fn set_face_styles(&mut self, front: FaceStyle, back: FaceStyle) {
        for triangle in &mut self.triangles {
            triangle.front_style = front;
            triangle.back_style = back;
        }
    }
}

fn check_resolution(resolution: usize) -> Result<()> {
    if resolution < MIN_RESOLUTION {
        return Err(Error::InvalidResolution(resolution));
    }
    Ok(())
}

/// `resolution` points on a circle of `radius` in the plane `z`, counter-clockwise from +x.
fn unit_ring(resolution: usize, z: f32, radius: f32) -> impl Iterator<Item = Vertex> {
    (0..resolution).map(move |i| {
        let (sin, cos) = (TAU * i as f32 / resolution as f32).sin_cos();
        Vertex::new(Vec3::new(radius * cos, radius * sin, z))
    })
}
