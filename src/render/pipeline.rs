//! Per-primitive transform pipeline.
//!
//! Every edge and triangle of a mesh goes through the same stages:
//!
//! ```text
//! model --(world_to_view * model_to_world)--> view
//!       --> back-face cull (triangles of solid meshes)
//!       --> clip against the camera's view volume
//!       --(view_to_screen, then divide by w for perspective)--> screen
//!       --> clip against the screen cube [-1, 1]^3
//!       --(screen_to_window)--> window --> rasterize
//! ```
//!
//! Transformed positions live in a [`Scratch`] arena that is refilled for
//! every mesh, so the shared mesh data is only ever read.

use crate::camera::Camera;
use crate::clipper::{
    clip_edges, clip_triangles, screen_clipping_planes, ClipEdge, ClipTriangle, ClippingPlane,
};
use crate::entity::{HasGeometry, Renderable};
use crate::error::Result;
use crate::math::{Mat4, Vec3, Vec4};
use crate::options::RenderingOptions;
use crate::render::framebuffer::FrameBuffer;
use crate::render::rasterizer::Rasterizer;

/// Reusable per-frame working memory.
#[derive(Debug, Default)]
pub struct Scratch {
    /// View-space position of every vertex of the current mesh, by vertex index.
    view_vertices: Vec<Vec4>,
    edges: Vec<ClipEdge>,
    spare_edges: Vec<ClipEdge>,
    triangles: Vec<ClipTriangle>,
    spare_triangles: Vec<ClipTriangle>,
}

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What happened to one mesh's primitives during a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    pub edges_drawn: usize,
    pub triangles_drawn: usize,
    /// Triangles of solid meshes facing away from the camera.
    pub culled: usize,
    /// Primitives entirely outside the view volume or the screen cube.
    pub clipped_away: usize,
    /// Primitives with a style that has nothing to rasterize.
    pub unstyled: usize,
}

/// The camera and output matrices of one frame.
#[derive(Clone, Debug)]
pub struct Pipeline {
    world_to_view: Mat4,
    view_to_screen: Mat4,
    screen_to_window: Mat4,
    view_planes: [ClippingPlane; 6],
    screen_planes: [ClippingPlane; 6],
    perspective_divide: bool,
}

impl Pipeline {
    /// # Errors
    /// Fails when the camera's view volume is degenerate, see
    /// [`Camera::view_clipping_planes`].
    pub fn new(camera: &Camera, options: &RenderingOptions) -> Result<Self> {
        Ok(Self {
            world_to_view: camera.world_to_view(),
            view_to_screen: camera.view_to_screen(),
            screen_to_window: options.screen_to_window(),
            view_planes: camera.view_clipping_planes()?,
            screen_planes: screen_clipping_planes(),
            perspective_divide: camera.projection().divides_by_w(),
        })
    }

    /// View space to screen space, dividing by `w` for perspective cameras.
    #[inline]
    fn project(&self, view: Vec4) -> Vec4 {
        let screen = self.view_to_screen * view;
        if self.perspective_divide {
            screen.perspective_divide()
        } else {
            screen
        }
    }

    #[inline]
    fn to_window(&self, screen: Vec4) -> Vec3 {
        (self.screen_to_window * screen).to_vec3()
    }

    /// Draws every edge and triangle of `mesh` that the flags ask for, edges first.
    ///
    /// # Errors
    /// [`Error::InvalidIndex`](crate::error::Error::InvalidIndex) if the mesh
    /// structure refers to a missing vertex. Nothing is drawn in that case.
    pub fn draw_mesh<M, R>(
        &self,
        mesh: &M,
        rasterizer: &R,
        scratch: &mut Scratch,
        buffer: &mut FrameBuffer,
    ) -> Result<MeshStats>
    where
        M: HasGeometry + Renderable,
        R: Rasterizer,
    {
        let mut stats = MeshStats::default();
        if !mesh.visible() || !(mesh.draw_edges() || mesh.draw_faces()) {
            return Ok(stats);
        }

        let structure = mesh.structure();
        structure.validate()?;
        let model_to_view = self.world_to_view * mesh.model_to_world();

        scratch.view_vertices.clear();
        scratch.view_vertices.extend(
            structure
                .vertices
                .iter()
                .map(|v| model_to_view * Vec4::from_vec3(v.position, 1.0)),
        );

        if mesh.draw_edges() {
            for edge in &structure.edges {
                let Some(colour) = edge.style.solid_colour() else {
                    stats.unstyled += 1;
                    continue;
                };
                let [a, b] = edge.vertices;
                scratch.edges.clear();
                scratch
                    .edges
                    .push([scratch.view_vertices[a], scratch.view_vertices[b]]);

                self.clip_edge_queue(scratch);
                if scratch.edges.is_empty() {
                    stats.clipped_away += 1;
                    continue;
                }
                for &[p1, p2] in &scratch.edges {
                    rasterizer.draw_edge(self.to_window(p1), self.to_window(p2), colour, buffer);
                    stats.edges_drawn += 1;
                }
            }
        }

        if mesh.draw_faces() {
            let cull = mesh.cull_back_faces();
            for triangle in &structure.triangles {
                let corners = triangle.vertices.map(|i| scratch.view_vertices[i]);

                let facing_away = faces_away(corners);
                if facing_away && cull {
                    stats.culled += 1;
                    continue;
                }
                let style = if facing_away {
                    triangle.back_style
                } else {
                    triangle.front_style
                };
                let Some(colour) = style.solid_colour() else {
                    stats.unstyled += 1;
                    continue;
                };

                scratch.triangles.clear();
                scratch.triangles.push(corners);

                self.clip_triangle_queue(scratch);
                if scratch.triangles.is_empty() {
                    stats.clipped_away += 1;
                    continue;
                }
                for clipped in &scratch.triangles {
                    rasterizer.fill_triangle(clipped.map(|p| self.to_window(p)), colour, buffer);
                    stats.triangles_drawn += 1;
                }
            }
        }

        Ok(stats)
    }

    /// View clip, project, screen clip. Survivors are left in `scratch.edges`.
    fn clip_edge_queue(&self, scratch: &mut Scratch) {
        clip_edges(&mut scratch.edges, &mut scratch.spare_edges, &self.view_planes);
        for edge in scratch.edges.iter_mut() {
            *edge = edge.map(|p| self.project(p));
        }
        clip_edges(&mut scratch.edges, &mut scratch.spare_edges, &self.screen_planes);
    }

    /// View clip, project, screen clip. Survivors are left in `scratch.triangles`.
    fn clip_triangle_queue(&self, scratch: &mut Scratch) {
        clip_triangles(
            &mut scratch.triangles,
            &mut scratch.spare_triangles,
            &self.view_planes,
        );
        for triangle in scratch.triangles.iter_mut() {
            *triangle = triangle.map(|p| self.project(p));
        }
        clip_triangles(
            &mut scratch.triangles,
            &mut scratch.spare_triangles,
            &self.screen_planes,
        );
    }
}

/// Whether a view-space triangle shows its back to the camera at the origin.
///
/// With `n = (p2 - p1) x (p3 - p1)` the front side is the one `n` points to;
/// it faces away when `n` points along the line of sight to `p1`.
pub fn faces_away([p1, p2, p3]: ClipTriangle) -> bool {
    let (p1, p2, p3) = (p1.to_vec3(), p2.to_vec3(), p3.to_vec3());
    let normal = (p2 - p1).cross(p3 - p1);
    normal.dot(p1) >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use crate::error::Error;
    use crate::geometry::{Edge, FaceStyle, MeshStructure};
    use crate::math::Orientation;
    use crate::mesh::{Dimension, Mesh};
    use crate::render::rasterizer::ScanlineRasterizer;
    use crate::update::Tracked;

    fn setup(camera: Camera) -> (Pipeline, FrameBuffer, Scratch) {
        let options = RenderingOptions::new().with_size(32, 32);
        (
            Pipeline::new(&camera, &options).unwrap(),
            FrameBuffer::new(32, 32, Colour::WHITE),
            Scratch::new(),
        )
    }

    fn ortho_camera() -> Camera {
        Camera::orthogonal(
            Vec3::new(0.0, 0.0, -5.0),
            Orientation::default(),
            4.0,
            4.0,
            1.0,
            10.0,
        )
    }

    #[test]
    fn triangle_facing_camera_is_not_culled() {
        // Seen from the origin looking along +z, this winding faces the camera.
        let towards = [
            Vec4::point(0.0, 0.0, 5.0),
            Vec4::point(0.0, 1.0, 5.0),
            Vec4::point(1.0, 0.0, 5.0),
        ];
        assert!(!faces_away(towards));
        let [a, b, c] = towards;
        assert!(faces_away([a, c, b]));
    }

    #[test]
    fn cube_seen_head_on_shows_only_its_front_face() {
        let (pipeline, mut buffer, mut scratch) = setup(ortho_camera());
        let cube = Mesh::new(MeshStructure::cube(), Dimension::Three);

        let stats = pipeline
            .draw_mesh(&cube, &ScanlineRasterizer, &mut scratch, &mut buffer)
            .unwrap();
        // The camera sits on the -z axis, so every other face points away from it.
        assert_eq!(stats.culled, 10);
        assert_eq!(stats.triangles_drawn, 2);
        assert_eq!(stats.clipped_away, 0);
    }

    #[test]
    fn flat_mesh_back_uses_back_style() {
        let (pipeline, mut buffer, mut scratch) = setup(ortho_camera());
        let mut plane = Mesh::new(MeshStructure::plane(), Dimension::Two);
        plane.structure_mut().set_face_styles(FaceStyle::Hidden, FaceStyle::Solid(Colour::RED));
        // Turn the plane round so its back faces the camera.
        plane.set_orientation(Orientation::forward_up(Vec3::BACK, Vec3::UP).unwrap());
        plane.clear_updates();

        let stats = pipeline
            .draw_mesh(&plane, &ScanlineRasterizer, &mut scratch, &mut buffer)
            .unwrap();
        assert_eq!(stats.culled, 0);
        assert_eq!(stats.triangles_drawn, 2);
        assert_eq!(buffer.colour_buffer().get(16, 16), Some(Colour::RED));
    }

    #[test]
    fn hidden_front_draws_nothing() {
        let (pipeline, mut buffer, mut scratch) = setup(ortho_camera());
        let mut plane = Mesh::new(MeshStructure::plane(), Dimension::Two);
        plane.structure_mut().set_face_styles(FaceStyle::Hidden, FaceStyle::Hidden);

        let stats = pipeline
            .draw_mesh(&plane, &ScanlineRasterizer, &mut scratch, &mut buffer)
            .unwrap();
        assert_eq!(stats.unstyled, 2);
        assert_eq!(buffer.colour_buffer().get(16, 16), Some(Colour::WHITE));
    }

    #[test]
    fn mesh_behind_camera_is_clipped_away() {
        let (pipeline, mut buffer, mut scratch) = setup(ortho_camera());
        let mut plane = Mesh::new(MeshStructure::plane(), Dimension::Two).with_draw_edges(true);
        plane.set_position(Vec3::new(0.0, 0.0, -20.0));

        let stats = pipeline
            .draw_mesh(&plane, &ScanlineRasterizer, &mut scratch, &mut buffer)
            .unwrap();
        assert_eq!(stats.triangles_drawn + stats.edges_drawn, 0);
        assert_eq!(stats.clipped_away, 2 + 4);
    }

    #[test]
    fn invisible_mesh_is_skipped() {
        let (pipeline, mut buffer, mut scratch) = setup(ortho_camera());
        let mut cube = Mesh::new(MeshStructure::cube(), Dimension::Three);
        cube.set_visible(false);

        let stats = pipeline
            .draw_mesh(&cube, &ScanlineRasterizer, &mut scratch, &mut buffer)
            .unwrap();
        assert_eq!(stats, MeshStats::default());
    }

    #[test]
    fn dangling_vertex_index_is_an_error() {
        let (pipeline, mut buffer, mut scratch) = setup(ortho_camera());
        let mut structure = MeshStructure::plane();
        structure.edges.push(Edge::new(0, 9));
        let mesh = Mesh::new(structure, Dimension::Two).with_draw_edges(true);

        let result = pipeline.draw_mesh(&mesh, &ScanlineRasterizer, &mut scratch, &mut buffer);
        assert!(matches!(result, Err(Error::InvalidIndex { index: 9, .. })));
        assert_eq!(buffer.colour_buffer().get(16, 16), Some(Colour::WHITE));
    }
}
