//! A CPU-based software rasteriser.
//!
//! Scenes are meshes plus a camera, bundled in [`RenderingOptions`]. A
//! [`Rasteriser`] pushes every edge and triangle through the transform
//! pipeline (model, world, view, screen, window), clips them against the
//! camera's view volume and the screen cube, and fills them into a
//! depth-tested colour buffer. All rendering is done on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use rastrum::prelude::*;
//!
//! let mut cube = Cube::new(1.0).mesh();
//! cube.set_position(Vec3::new(0.0, 0.0, 5.0));
//!
//! let options = RenderingOptions::new()
//!     .with_size(800, 600)
//!     .with_camera(Camera::default())
//!     .with_entity(cube);
//!
//! let mut rasteriser = Rasteriser::new(options);
//! if let Some(image) = pollster::block_on(rasteriser.render(&CancellationToken::new()))? {
//!     image.save("cube.png")?;
//! }
//! ```

pub mod camera;
pub mod clipper;
pub mod colour;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod math;
pub mod mesh;
pub mod options;
pub mod render;
pub mod transform;
pub mod update;

// Re-export commonly needed types at crate root for convenience
pub use camera::{Camera, ProjectionKind};
pub use colour::Colour;
pub use entity::Entity;
pub use error::{Error, Result};
pub use mesh::Mesh;
pub use options::RenderingOptions;
pub use render::{CancellationToken, Image, Rasteriser};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rastrum::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::{Camera, ProjectionKind};
    pub use crate::entity::{Entity, HasGeometry, Renderable};
    pub use crate::options::RenderingOptions;
    pub use crate::update::{RenderUpdate, Tracked};

    // Geometry
    pub use crate::colour::Colour;
    pub use crate::geometry::{EdgeStyle, FaceStyle, MeshStructure};
    pub use crate::mesh::shapes::{Circle, Cone, Cube, Cuboid, Cylinder, Line, Plane, Ring, Square};
    pub use crate::mesh::{Dimension, Mesh};

    // Transform
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::{Mat4, Orientation, Quaternion, Vec3, Vec4};

    // Rendering
    pub use crate::render::{CancellationToken, Image, Rasteriser};

    // Errors
    pub use crate::error::{Error, Result};
}
