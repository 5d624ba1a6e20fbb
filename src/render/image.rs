//! Finished frames.

use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use crate::colour::Colour;
use crate::error::Result;
use crate::render::framebuffer::FrameBuffer;

/// A rendered frame, stored row by row from the top row down.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Image {
    /// Copies the colour buffer out of `buffer`, flipping it so that the
    /// bottom buffer row becomes the last image row.
    ///
    /// Rows are copied in parallel; each worker writes its own row.
    pub fn from_frame_buffer(buffer: &FrameBuffer) -> Self {
        let (width, height) = (buffer.width(), buffer.height());
        let colours = buffer.colour_buffer();
        let mut pixels = vec![Colour::TRANSPARENT; width as usize * height as usize];

        if width > 0 {
            pixels
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(|(row, out)| {
                    out.copy_from_slice(colours.row(height - 1 - row as u32));
                });
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel in column `x` of row `row`, counted from the top.
    pub fn pixel(&self, x: u32, row: u32) -> Option<Colour> {
        if x < self.width && row < self.height {
            Some(self.pixels[row as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(self.pixels[y as usize * self.width as usize + x as usize].to_rgba_bytes())
        })
    }

    /// Writes the frame to `path`, in the format its extension names.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_rgba_image().save(path.as_ref())?;
        debug!(path = %path.as_ref().display(), width = self.width, height = self.height, "Saved frame");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_buffer_row_is_last_image_row() {
        let mut buffer = FrameBuffer::new(3, 4, Colour::WHITE);
        buffer.set_pixel_with_depth(1, 0, 0.0, Colour::RED);
        buffer.set_pixel_with_depth(2, 3, 0.0, Colour::BLUE);

        let image = Image::from_frame_buffer(&buffer);
        assert_eq!(image.pixel(1, 3), Some(Colour::RED));
        assert_eq!(image.pixel(2, 0), Some(Colour::BLUE));
        assert_eq!(image.pixel(0, 0), Some(Colour::WHITE));
        assert_eq!(image.pixel(3, 0), None);
    }

    #[test]
    fn parallel_copy_matches_sequential_flip() {
        let mut buffer = FrameBuffer::new(17, 9, Colour::WHITE);
        for i in 0..9 {
            buffer.set_pixel_with_depth(i * 2, i, 0.0, Colour::rgb(i as u8, 0, 0));
        }
        let image = Image::from_frame_buffer(&buffer);

        let sequential: Vec<Colour> = (0..9)
            .rev()
            .flat_map(|y| buffer.colour_buffer().row(y).to_vec())
            .collect();
        assert_eq!(image.pixels(), sequential.as_slice());
    }

    #[test]
    fn converts_to_rgba_image() {
        let mut buffer = FrameBuffer::new(2, 2, Colour::WHITE);
        buffer.set_pixel_with_depth(0, 1, 0.0, Colour::RED);
        let rgba = Image::from_frame_buffer(&buffer).to_rgba_image();
        assert_eq!(rgba.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(rgba.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }
}
