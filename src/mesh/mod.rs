//! Renderable meshes.
//!
//! A [`Mesh`] pairs a shared [`MeshStructure`] with its own placement and
//! drawing flags. Several meshes may share one structure; per-frame data
//! computed while rendering never lives on the mesh.

pub mod shapes;

use std::sync::Arc;

use crate::colour::Colour;
use crate::geometry::{EdgeStyle, FaceStyle, MeshStructure};
use crate::math::{Mat4, Orientation, Vec3};
use crate::transform::Transform;
use crate::update::{RenderUpdate, Tracked};

/// How many dimensions a mesh spans.
///
/// Only solid meshes are back-face culled; flat ones can be seen from both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    One,
    Two,
    Three,
}

#[derive(Clone, Debug)]
pub struct Mesh {
    transform: Transform,
    structure: Arc<MeshStructure>,
    dimension: Dimension,
    draw_edges: bool,
    draw_faces: bool,
    visible: bool,
    pending: RenderUpdate,
}

impl Mesh {
    pub fn new(structure: impl Into<Arc<MeshStructure>>, dimension: Dimension) -> Self {
        Self {
            transform: Transform::default(),
            structure: structure.into(),
            dimension,
            draw_edges: false,
            draw_faces: dimension != Dimension::One,
            visible: true,
            pending: RenderUpdate::GEOMETRY,
        }
    }

    /// Sets the initial placement. Builder-style counterpart of the setters.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_draw_edges(mut self, draw_edges: bool) -> Self {
        self.draw_edges = draw_edges;
        self
    }

    pub fn with_draw_faces(mut self, draw_faces: bool) -> Self {
        self.draw_faces = draw_faces;
        self
    }

    fn touch(&mut self) {
        self.pending |= RenderUpdate::GEOMETRY;
    }

    // ============ Geometry ============

    pub fn structure(&self) -> &MeshStructure {
        &self.structure
    }

    /// Mutable access to the structure. Copies it first if it is shared.
    pub fn structure_mut(&mut self) -> &mut MeshStructure {
        self.touch();
        Arc::make_mut(&mut self.structure)
    }

    pub fn set_structure(&mut self, structure: impl Into<Arc<MeshStructure>>) {
        self.structure = structure.into();
        self.touch();
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn colour_all_faces(&mut self, colour: Colour) {
        self.structure_mut()
            .set_face_styles(FaceStyle::Solid(colour), FaceStyle::Solid(colour));
    }

    pub fn colour_all_edges(&mut self, colour: Colour) {
        self.structure_mut().set_edge_style(EdgeStyle::Solid(colour));
    }

    // ============ Placement ============

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        self.touch();
        &mut self.transform
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.transform_mut().set_position(position);
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.transform_mut().set_orientation(orientation);
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform_mut().set_scale(scale);
    }

    pub fn model_to_world(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    // ============ Drawing flags ============

    pub fn draw_edges(&self) -> bool {
        self.draw_edges
    }

    pub fn set_draw_edges(&mut self, draw_edges: bool) {
        if self.draw_edges != draw_edges {
            self.draw_edges = draw_edges;
            self.touch();
        }
    }

    pub fn draw_faces(&self) -> bool {
        self.draw_faces
    }

    pub fn set_draw_faces(&mut self, draw_faces: bool) {
        if self.draw_faces != draw_faces {
            self.draw_faces = draw_faces;
            self.touch();
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.touch();
        }
    }
}

impl Tracked for Mesh {
    fn pending_updates(&self) -> RenderUpdate {
        self.pending
    }

    fn clear_updates(&mut self) {
        self.pending = RenderUpdate::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mesh_needs_a_render() {
        let mesh = Mesh::new(MeshStructure::cube(), Dimension::Three);
        assert!(mesh.needs_render());
    }

    #[test]
    fn every_mutation_requests_render_and_shadow_map() {
        let mut mesh = Mesh::new(MeshStructure::plane(), Dimension::Two);

        let mutations: [fn(&mut Mesh); 5] = [
            |m| m.set_position(Vec3::ONE),
            |m| m.set_scale(Vec3::new(2.0, 2.0, 1.0)),
            |m| m.set_draw_edges(true),
            |m| m.set_visible(false),
            |m| m.colour_all_faces(Colour::RED),
        ];
        for mutate in mutations {
            mesh.clear_updates();
            mutate(&mut mesh);
            assert_eq!(mesh.pending_updates(), RenderUpdate::GEOMETRY);
        }
    }

    #[test]
    fn unchanged_flag_does_not_dirty() {
        let mut mesh = Mesh::new(MeshStructure::plane(), Dimension::Two);
        mesh.clear_updates();
        mesh.set_draw_faces(true);
        assert!(!mesh.needs_render());
    }

    #[test]
    fn recolouring_does_not_touch_shared_structure() {
        let shared = Arc::new(MeshStructure::cube());
        let mut a = Mesh::new(Arc::clone(&shared), Dimension::Three);
        let b = Mesh::new(Arc::clone(&shared), Dimension::Three);

        a.colour_all_faces(Colour::RED);

        assert_eq!(
            a.structure().triangles[0].front_style,
            FaceStyle::Solid(Colour::RED)
        );
        assert_eq!(b.structure(), shared.as_ref());
    }
}
