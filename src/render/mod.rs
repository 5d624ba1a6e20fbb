//! Rendering: buffers, rasterization, the per-primitive pipeline and frame
//! orchestration.

pub mod framebuffer;
pub mod image;
pub mod pipeline;
pub mod rasteriser;
pub mod rasterizer;

pub use framebuffer::{Buffer2D, FrameBuffer};
pub use image::Image;
pub use pipeline::{MeshStats, Pipeline, Scratch};
pub use rasteriser::{CancellationToken, Rasteriser};
pub use rasterizer::{Rasterizer, ScanlineRasterizer};
