//! Vertices, edges and triangles.
//!
//! Edges and triangles refer to vertices by index into the owning
//! [`MeshStructure`](super::MeshStructure), so a vertex shared by several
//! primitives is stored once.

use super::style::{EdgeStyle, FaceStyle};
use crate::math::Vec3;

/// A corner of a mesh, in model space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
}

impl Vertex {
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }
}

/// A line segment between two vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub vertices: [usize; 2],
    pub style: EdgeStyle,
}

impl Edge {
    pub fn new(v1: usize, v2: usize) -> Self {
        Self {
            vertices: [v1, v2],
            style: EdgeStyle::default(),
        }
    }
}

/// A triangle over three vertices.
///
/// The corner order fixes which side is the front: with
/// `n = (p2 - p1) x (p3 - p1)`, the front side is the one `n` points to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [usize; 3],
    pub front_style: FaceStyle,
    pub back_style: FaceStyle,
}

impl Triangle {
    pub fn new(p1: usize, p2: usize, p3: usize) -> Self {
        Self {
            vertices: [p1, p2, p3],
            front_style: FaceStyle::default(),
            back_style: FaceStyle::default(),
        }
    }
}
