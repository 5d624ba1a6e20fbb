//! Colour and depth buffers.
//!
//! Buffers are addressed `(x, y)` in window space, where `y = 0` is the
//! bottom row. The depth buffer holds normalised screen depth: smaller is
//! nearer, and a fresh buffer holds [`DEPTH_CLEAR`], further than any depth
//! that survives clipping.

use crate::colour::Colour;

/// Depth every frame starts from. Valid depths lie in `[-1, 1]`.
pub const DEPTH_CLEAR: f32 = 1.1;

/// Depths within this of the stored one do not overwrite it, so coplanar
/// primitives drawn later cannot flicker through.
pub const DEPTH_EPSILON: f32 = 1e-4;

/// Dense `width x height` grid, stored row by row from the bottom row up.
#[derive(Clone, Debug, PartialEq)]
pub struct Buffer2D<T> {
    data: Vec<T>,
    width: u32,
    height: u32,
}

impl<T: Copy> Buffer2D<T> {
    pub fn new(width: u32, height: u32, value: T) -> Self {
        Self {
            data: vec![value; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// The value at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<T> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Writes `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = value;
        }
    }

    /// Row `y`, counted from the bottom.
    pub fn row(&self, y: u32) -> &[T] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }
}

/// Colour and depth buffers of one frame.
///
/// Owned by a single render call; nothing else writes to it while a frame
/// is in flight.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    colour: Buffer2D<Colour>,
    depth: Buffer2D<f32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            colour: Buffer2D::new(width, height, background),
            depth: Buffer2D::new(width, height, DEPTH_CLEAR),
        }
    }

    pub fn width(&self) -> u32 {
        self.colour.width()
    }

    pub fn height(&self) -> u32 {
        self.colour.height()
    }

    /// Starts a new frame: every pixel back to `background`, every depth to [`DEPTH_CLEAR`].
    pub fn clear(&mut self, background: Colour) {
        self.colour.fill(background);
        self.depth.fill(DEPTH_CLEAR);
    }

    /// Writes `colour` at `(x, y)` if `depth` is nearer than what is stored there.
    ///
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, colour: Colour) {
        if let Some(stored) = self.depth.get(x, y) {
            if depth < stored - DEPTH_EPSILON {
                self.depth.set(x, y, depth);
                self.colour.set(x, y, colour);
            }
        }
    }

    pub fn colour_buffer(&self) -> &Buffer2D<Colour> {
        &self.colour
    }

    pub fn depth_buffer(&self) -> &Buffer2D<f32> {
        &self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearer_depth_wins() {
        let mut buffer = FrameBuffer::new(2, 2, Colour::WHITE);
        buffer.set_pixel_with_depth(1, 0, 0.5, Colour::RED);
        buffer.set_pixel_with_depth(1, 0, 0.7, Colour::BLUE);
        assert_eq!(buffer.colour_buffer().get(1, 0), Some(Colour::RED));

        buffer.set_pixel_with_depth(1, 0, 0.2, Colour::GREEN);
        assert_eq!(buffer.colour_buffer().get(1, 0), Some(Colour::GREEN));
        assert_eq!(buffer.depth_buffer().get(1, 0), Some(0.2));
    }

    #[test]
    fn near_equal_depth_does_not_overwrite() {
        let mut buffer = FrameBuffer::new(1, 1, Colour::WHITE);
        buffer.set_pixel_with_depth(0, 0, 0.5, Colour::RED);
        buffer.set_pixel_with_depth(0, 0, 0.5 - DEPTH_EPSILON / 2.0, Colour::BLUE);
        assert_eq!(buffer.colour_buffer().get(0, 0), Some(Colour::RED));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut buffer = FrameBuffer::new(2, 2, Colour::WHITE);
        buffer.set_pixel_with_depth(-1, 0, 0.0, Colour::RED);
        buffer.set_pixel_with_depth(0, 2, 0.0, Colour::RED);
        assert!(buffer.colour_buffer().row(0).iter().all(|&c| c == Colour::WHITE));
        assert!(buffer.colour_buffer().row(1).iter().all(|&c| c == Colour::WHITE));
    }

    #[test]
    fn clear_resets_depth() {
        let mut buffer = FrameBuffer::new(1, 1, Colour::WHITE);
        buffer.set_pixel_with_depth(0, 0, -0.9, Colour::RED);
        buffer.clear(Colour::BLACK);
        assert_eq!(buffer.colour_buffer().get(0, 0), Some(Colour::BLACK));
        assert_eq!(buffer.depth_buffer().get(0, 0), Some(DEPTH_CLEAR));
    }
}
