//! Clipping of edges and triangles against convex volumes.
//!
//! Two volumes are used per frame:
//!
//! - the camera's view volume, in view space before projection, built by
//!   [`perspective_clipping_planes`] or [`orthogonal_clipping_planes`];
//! - the canonical screen cube `[-1, 1]^3` after projection, from
//!   [`screen_clipping_planes`].

pub mod clip;
pub mod plane;

pub use clip::{clip_edge, clip_edges, clip_triangle, clip_triangles, ClipEdge, ClipTriangle};
pub use plane::{
    orthogonal_clipping_planes, perspective_clipping_planes, screen_clipping_planes,
    ClippingPlane,
};
