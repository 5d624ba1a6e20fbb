//! Geometry model: vertices, edges, triangles and their styles.

mod obj;
pub mod primitives;
pub mod structure;
pub mod style;

pub use primitives::{Edge, Triangle, Vertex};
pub use structure::MeshStructure;
pub use style::{EdgeStyle, FaceStyle};
