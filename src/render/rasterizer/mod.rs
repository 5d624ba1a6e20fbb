//! Primitive rasterization.
//!
//! A [`Rasterizer`] turns window-space edges and triangles into depth-tested
//! pixels. [`ScanlineRasterizer`] is the implementation the frame pipeline
//! uses.

mod scanline;

pub use scanline::ScanlineRasterizer;

use super::framebuffer::FrameBuffer;
use crate::colour::Colour;
use crate::math::Vec3;

/// Trait for rasterization algorithms.
///
/// Points are in window space: pixel `x` and `y`, depth in `z`. Every pixel
/// goes through [`FrameBuffer::set_pixel_with_depth`], so draw order never
/// decides visibility.
pub trait Rasterizer {
    /// Draw a line segment from `p1` to `p2`.
    fn draw_edge(&self, p1: Vec3, p2: Vec3, colour: Colour, buffer: &mut FrameBuffer);

    /// Fill a triangle with a flat colour.
    fn fill_triangle(&self, corners: [Vec3; 3], colour: Colour, buffer: &mut FrameBuffer);
}
