//! Custom mesh structures from Wavefront OBJ data.

use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use super::structure::MeshStructure;
use crate::error::Result;
use crate::math::Vec3;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    }
}

impl MeshStructure {
    /// Loads every object in an OBJ file into one structure.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (models, _materials) = tobj::load_obj(path.as_ref(), &load_options())?;
        debug!(path = %path.as_ref().display(), models = models.len(), "Loaded OBJ file");
        Ok(Self::from_models(&models))
    }

    /// Loads OBJ data from a reader. Material libraries are ignored.
    pub fn from_obj_reader<R: BufRead>(reader: &mut R) -> Result<Self> {
        let (models, _materials) =
            tobj::load_obj_buf(reader, &load_options(), |_| Ok(Default::default()))?;
        Ok(Self::from_models(&models))
    }

    fn from_models(models: &[tobj::Model]) -> Self {
        let mut positions = Vec::new();
        let mut faces = Vec::new();

        for model in models {
            let offset = positions.len();
            positions.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            faces.extend(model.mesh.indices.chunks_exact(3).map(|f| {
                [
                    offset + f[0] as usize,
                    offset + f[1] as usize,
                    offset + f[2] as usize,
                ]
            }));
        }

        Self::from_triangles(positions, &faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TETRAHEDRON: &str = "\
o tetra
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1
f 1 3 2
f 1 2 4
f 1 4 3
f 2 3 4
";

    #[test]
    fn reads_vertices_triangles_and_edges() {
        let structure = MeshStructure::from_obj_reader(&mut Cursor::new(TETRAHEDRON)).unwrap();
        assert_eq!(structure.vertices.len(), 4);
        assert_eq!(structure.triangles.len(), 4);
        assert_eq!(structure.edges.len(), 6);

        // Vertices are renumbered in first-use order, so compare as a set.
        for corner in [Vec3::ZERO, Vec3::RIGHT, Vec3::UP, Vec3::FORWARD] {
            assert!(structure.vertices.iter().any(|v| v.position == corner));
        }

        // `f 1 3 2` keeps its corners and winding.
        let first = structure.triangles[0].vertices.map(|i| structure.vertices[i].position);
        assert_eq!(first, [Vec3::ZERO, Vec3::UP, Vec3::RIGHT]);
    }

    #[test]
    fn quads_are_triangulated() {
        let quad = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let structure = MeshStructure::from_obj_reader(&mut Cursor::new(quad)).unwrap();
        assert_eq!(structure.triangles.len(), 2);
    }
}
