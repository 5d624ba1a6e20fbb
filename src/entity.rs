//! Scene entities and their capabilities.
//!
//! Entities form a closed set. The rasteriser matches on [`Entity`] and
//! drives anything with geometry through the pipeline via the
//! [`HasGeometry`] and [`Renderable`] traits.

use crate::camera::Camera;
use crate::geometry::MeshStructure;
use crate::math::Mat4;
use crate::mesh::{Dimension, Mesh};
use crate::update::{RenderUpdate, Tracked};

/// Something with vertices, edges and triangles placed in the world.
pub trait HasGeometry {
    fn structure(&self) -> &MeshStructure;

    fn model_to_world(&self) -> Mat4;

    fn dimension(&self) -> Dimension;

    /// Whether triangles facing away from the camera can be skipped.
    fn cull_back_faces(&self) -> bool {
        self.dimension() == Dimension::Three
    }
}

/// Drawing switches for something that shows up in a frame.
pub trait Renderable {
    fn visible(&self) -> bool;

    fn draw_edges(&self) -> bool;

    fn draw_faces(&self) -> bool;
}

impl HasGeometry for Mesh {
    fn structure(&self) -> &MeshStructure {
        Mesh::structure(self)
    }

    fn model_to_world(&self) -> Mat4 {
        Mesh::model_to_world(self)
    }

    fn dimension(&self) -> Dimension {
        Mesh::dimension(self)
    }
}

impl Renderable for Mesh {
    fn visible(&self) -> bool {
        Mesh::visible(self)
    }

    fn draw_edges(&self) -> bool {
        Mesh::draw_edges(self)
    }

    fn draw_faces(&self) -> bool {
        Mesh::draw_faces(self)
    }
}

#[derive(Clone, Debug)]
pub enum Entity {
    Mesh(Mesh),
    /// A camera placed in the scene. Cameras are not drawn.
    Camera(Camera),
}

impl Entity {
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            Entity::Mesh(mesh) => Some(mesh),
            Entity::Camera(_) => None,
        }
    }

    pub fn as_mesh_mut(&mut self) -> Option<&mut Mesh> {
        match self {
            Entity::Mesh(mesh) => Some(mesh),
            Entity::Camera(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Entity::Mesh(_) => "mesh",
            Entity::Camera(_) => "camera",
        }
    }
}

impl From<Mesh> for Entity {
    fn from(mesh: Mesh) -> Self {
        Entity::Mesh(mesh)
    }
}

impl From<Camera> for Entity {
    fn from(camera: Camera) -> Self {
        Entity::Camera(camera)
    }
}

impl Tracked for Entity {
    fn pending_updates(&self) -> RenderUpdate {
        match self {
            Entity::Mesh(mesh) => mesh.pending_updates(),
            Entity::Camera(camera) => camera.pending_updates(),
        }
    }

    fn clear_updates(&mut self) {
        match self {
            Entity::Mesh(mesh) => mesh.clear_updates(),
            Entity::Camera(camera) => camera.clear_updates(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_solids_cull_back_faces() {
        let cube = Mesh::new(MeshStructure::cube(), Dimension::Three);
        let plane = Mesh::new(MeshStructure::plane(), Dimension::Two);
        assert!(cube.cull_back_faces());
        assert!(!plane.cull_back_faces());
    }

    #[test]
    fn entity_forwards_update_tracking() {
        let mut entity = Entity::from(Camera::default());
        assert!(entity.needs_render());
        entity.clear_updates();
        assert!(!entity.needs_render());
        assert!(entity.as_mesh().is_none());
        assert_eq!(entity.kind(), "camera");
    }
}
