//! Scanline rasterization of edges and flat-coloured triangles.
//!
//! Input points are in window space: `x` and `y` in pixels with `y = 0` at
//! the bottom row, `z` the normalised depth used by the depth test.
//!
//! # Triangle Decomposition
//!
//! Corners are sorted by descending `y` and the triangle is cut along the
//! row of the middle corner:
//!
//! ```text
//!        p1
//!        /\
//!       /  \        upper part: rows y2..=y1, bounded by edges 1-3 and 1-2
//!   p2 /----\<- y2
//!      \     \      lower part: rows y3..y2, bounded by edges 1-3 and 2-3
//!        \    \
//!          \   \
//!            \  \
//!              \ \
//!                p3
//! ```
//!
//! A part whose two corners share a row has no height and is skipped. The
//! split row belongs to the upper part, or to the lower part when the upper
//! part is flat.
//!
//! Each row is filled between its two bounds, left to right, with depth
//! interpolated linearly across it. A pixel is covered when its centre lies
//! inside the triangle, so nothing is drawn outside the triangle's outline.

use super::Rasterizer;
use crate::colour::Colour;
use crate::math::Vec3;
use crate::render::framebuffer::FrameBuffer;

/// Slack for coverage tests, in pixels.
const COVERAGE_EPSILON: f32 = 1e-4;

pub struct ScanlineRasterizer;

impl Default for ScanlineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Sorts three points by descending `y`, so that `p1.y >= p2.y >= p3.y`.
    fn sort_descending(mut points: [Vec3; 3]) -> [Vec3; 3] {
        if points[1].y > points[0].y {
            points.swap(0, 1);
        }
        if points[2].y > points[1].y {
            points.swap(1, 2);
        }
        if points[1].y > points[0].y {
            points.swap(0, 1);
        }
        points
    }

    /// `x` and `z` where the edge `top -> bottom` crosses row `y`.
    #[inline]
    fn along(top: Vec3, bottom: Vec3, y: f32) -> (f32, f32) {
        let t = (top.y - y) / (top.y - bottom.y);
        (top.x + (bottom.x - top.x) * t, top.z + (bottom.z - top.z) * t)
    }

    /// Fills row `y` between two edge crossings.
    fn fill_span(
        y: i32,
        (mut x_left, mut z_left): (f32, f32),
        (mut x_right, mut z_right): (f32, f32),
        colour: Colour,
        buffer: &mut FrameBuffer,
    ) {
        if x_left > x_right {
            std::mem::swap(&mut x_left, &mut x_right);
            std::mem::swap(&mut z_left, &mut z_right);
        }

        let width = x_right - x_left;
        let first = (x_left - COVERAGE_EPSILON).ceil() as i32;
        let last = (x_right + COVERAGE_EPSILON).floor() as i32;

        for x in first..=last {
            let z = if width > f32::EPSILON {
                let t = ((x as f32 - x_left) / width).clamp(0.0, 1.0);
                z_left + (z_right - z_left) * t
            } else {
                z_left
            };
            buffer.set_pixel_with_depth(x, y, z, colour);
        }
    }

    /// Rows whose centres lie in `[low, high]`.
    fn rows(low: f32, high: f32) -> std::ops::RangeInclusive<i32> {
        ((low - COVERAGE_EPSILON).ceil() as i32)..=((high + COVERAGE_EPSILON).floor() as i32)
    }
}

impl Rasterizer for ScanlineRasterizer {
    /// Walks from `p1` to `p2` one pixel at a time along the longer axis.
    fn draw_edge(&self, p1: Vec3, p2: Vec3, colour: Colour, buffer: &mut FrameBuffer) {
        let dx = (p2.x - p1.x).round().abs();
        let dy = (p2.y - p1.y).round().abs();
        let steps = dx.max(dy).max(1.0) as u32;

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = p1.lerp(p2, t);
            buffer.set_pixel_with_depth(p.x.round() as i32, p.y.round() as i32, p.z, colour);
        }
    }

    fn fill_triangle(&self, corners: [Vec3; 3], colour: Colour, buffer: &mut FrameBuffer) {
        let [p1, p2, p3] = Self::sort_descending(corners);

        let upper = p1.y > p2.y;
        let lower = p2.y > p3.y;

        if upper {
            for y in Self::rows(p2.y, p1.y) {
                let yf = y as f32;
                Self::fill_span(
                    y,
                    Self::along(p1, p3, yf),
                    Self::along(p1, p2, yf),
                    colour,
                    buffer,
                );
            }
        }

        if lower {
            let mut rows = Self::rows(p3.y, p2.y);
            if upper {
                // The split row was filled with the upper part.
                let split = (p2.y - COVERAGE_EPSILON).ceil() as i32;
                rows = *rows.start()..=(*rows.end()).min(split - 1);
            }
            for y in rows {
                let yf = y as f32;
                Self::fill_span(
                    y,
                    Self::along(p1, p3, yf),
                    Self::along(p2, p3, yf),
                    colour,
                    buffer,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::framebuffer::DEPTH_CLEAR;
    use approx::assert_relative_eq;

    fn drawn(buffer: &FrameBuffer) -> Vec<(i32, i32)> {
        let mut pixels = Vec::new();
        for y in 0..buffer.height() as i32 {
            for x in 0..buffer.width() as i32 {
                if buffer.depth_buffer().get(x, y) != Some(DEPTH_CLEAR) {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    /// Whether `(x, y)` lies inside or on the triangle.
    fn in_hull(corners: [Vec3; 3], x: f32, y: f32) -> bool {
        let side = |a: Vec3, b: Vec3| (b.x - a.x) * (y - a.y) - (b.y - a.y) * (x - a.x);
        let [a, b, c] = corners;
        let s = [side(a, b), side(b, c), side(c, a)];
        s.iter().all(|&v| v >= -1e-3) || s.iter().all(|&v| v <= 1e-3)
    }

    #[test]
    fn frontal_triangle_stays_in_hull_at_constant_depth() {
        let corners = [
            Vec3::new(0.0, 0.0, 0.5),
            Vec3::new(4.0, 0.0, 0.5),
            Vec3::new(2.0, 4.0, 0.5),
        ];
        let mut buffer = FrameBuffer::new(8, 8, Colour::WHITE);
        ScanlineRasterizer::new().fill_triangle(corners, Colour::RED, &mut buffer);

        let pixels = drawn(&buffer);
        assert!(pixels.contains(&(0, 0)));
        assert!(pixels.contains(&(4, 0)));
        assert!(pixels.contains(&(2, 4)));
        for (x, y) in pixels {
            assert!(in_hull(corners, x as f32, y as f32), "({x}, {y}) outside");
            assert_relative_eq!(buffer.depth_buffer().get(x, y).unwrap(), 0.5);
            assert_eq!(buffer.colour_buffer().get(x, y), Some(Colour::RED));
        }
    }

    #[test]
    fn corner_order_does_not_matter() {
        let a = Vec3::new(1.0, 1.0, 0.0);
        let b = Vec3::new(6.0, 2.0, 0.0);
        let c = Vec3::new(3.0, 6.0, 0.0);

        let mut first = FrameBuffer::new(8, 8, Colour::WHITE);
        let mut second = FrameBuffer::new(8, 8, Colour::WHITE);
        ScanlineRasterizer.fill_triangle([a, b, c], Colour::RED, &mut first);
        ScanlineRasterizer.fill_triangle([c, a, b], Colour::RED, &mut second);

        assert_eq!(first.colour_buffer(), second.colour_buffer());
    }

    #[test]
    fn split_row_is_filled_once_and_covers_the_middle_corner() {
        let corners = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(6.0, 3.0, 0.0),
            Vec3::new(0.0, 6.0, 0.0),
        ];
        let mut buffer = FrameBuffer::new(8, 8, Colour::WHITE);
        ScanlineRasterizer.fill_triangle(corners, Colour::RED, &mut buffer);

        let pixels = drawn(&buffer);
        assert!(pixels.contains(&(6, 3)));
        // Row 3 spans x = 0..=6.
        assert_eq!(pixels.iter().filter(|&&(_, y)| y == 3).count(), 7);
    }

    #[test]
    fn depth_is_interpolated_across_rows() {
        let corners = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 1.0),
            Vec3::new(0.0, 4.0, 0.0),
        ];
        let mut buffer = FrameBuffer::new(8, 8, Colour::WHITE);
        ScanlineRasterizer.fill_triangle(corners, Colour::RED, &mut buffer);

        assert_relative_eq!(buffer.depth_buffer().get(2, 0).unwrap(), 0.5, epsilon = 1e-6);
        assert_relative_eq!(buffer.depth_buffer().get(2, 1).unwrap(), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn flat_triangle_draws_nothing() {
        let corners = [
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(3.0, 2.0, 0.0),
            Vec3::new(6.0, 2.0, 0.0),
        ];
        let mut buffer = FrameBuffer::new(8, 8, Colour::WHITE);
        ScanlineRasterizer.fill_triangle(corners, Colour::RED, &mut buffer);
        assert!(drawn(&buffer).is_empty());
    }

    #[test]
    fn edge_steps_along_the_longer_axis() {
        let mut buffer = FrameBuffer::new(8, 8, Colour::WHITE);
        ScanlineRasterizer.draw_edge(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(6.0, 3.0, 0.6),
            Colour::BLACK,
            &mut buffer,
        );

        let pixels = drawn(&buffer);
        // One pixel per column.
        assert_eq!(pixels.len(), 7);
        assert!(pixels.contains(&(0, 0)));
        assert!(pixels.contains(&(6, 3)));
        assert_relative_eq!(buffer.depth_buffer().get(3, 2).unwrap(), 0.3, epsilon = 1e-6);
    }

    #[test]
    fn point_edge_draws_one_pixel() {
        let mut buffer = FrameBuffer::new(4, 4, Colour::WHITE);
        let p = Vec3::new(2.0, 1.0, 0.0);
        ScanlineRasterizer.draw_edge(p, p, Colour::BLACK, &mut buffer);
        assert_eq!(drawn(&buffer), vec![(2, 1)]);
    }
}
