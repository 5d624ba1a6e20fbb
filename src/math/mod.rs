//! Vectors, matrices and rotations used throughout the pipeline.

pub mod mat4;
pub mod orientation;
pub mod quaternion;
pub mod vec3;
pub mod vec4;

pub use mat4::Mat4;
pub use orientation::Orientation;
pub use quaternion::Quaternion;
pub use vec3::Vec3;
pub use vec4::Vec4;
