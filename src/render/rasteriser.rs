//! Frame orchestration.
//!
//! [`Rasteriser::render`] draws every entity of its [`RenderingOptions`]
//! through the [`Pipeline`] into a fresh frame and hands back the finished
//! [`Image`]. Visibility is decided by the depth buffer alone, so the order
//! of the entity list only matters for exact depth ties.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::options::RenderingOptions;
use crate::render::framebuffer::FrameBuffer;
use crate::render::image::Image;
use crate::render::pipeline::{MeshStats, Pipeline, Scratch};
use crate::render::rasterizer::{Rasterizer, ScanlineRasterizer};
use crate::update::Tracked;

/// Shared flag asking an in-flight frame to stop.
///
/// Checked between entities; a cancelled frame returns [`Error::Cancelled`].
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct Rasteriser<R: Rasterizer = ScanlineRasterizer> {
    options: RenderingOptions,
    rasterizer: R,
    scratch: Scratch,
    /// Buffers of the previous frame, reused when the size has not changed.
    frame: Option<FrameBuffer>,
}

impl Rasteriser {
    pub fn new(options: RenderingOptions) -> Self {
        Self::with_rasterizer(options, ScanlineRasterizer::new())
    }
}

impl<R: Rasterizer> Rasteriser<R> {
    pub fn with_rasterizer(options: RenderingOptions, rasterizer: R) -> Self {
        Self {
            options,
            rasterizer,
            scratch: Scratch::new(),
            frame: None,
        }
    }

    pub fn options(&self) -> &RenderingOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut RenderingOptions {
        &mut self.options
    }

    /// Whether anything changed since the last completed frame.
    pub fn needs_render(&self) -> bool {
        self.options.needs_render()
            || self.options.camera.as_ref().is_some_and(Tracked::needs_render)
            || self.options.entities.iter().any(Tracked::needs_render)
    }

    /// Renders one frame.
    ///
    /// Returns `Ok(None)` when there are no entities to draw, whether or not a
    /// camera is set. A completed frame clears the pending updates of the
    /// options, camera and entities.
    ///
    /// # Errors
    /// - [`Error::MissingCamera`] if there are entities but no camera.
    /// - [`Error::InvalidDimensions`] for a zero-sized output.
    /// - [`Error::ZeroVector`] for a perspective camera whose view volume collapses.
    /// - [`Error::InvalidIndex`] if a mesh structure refers to a missing vertex.
    /// - [`Error::Cancelled`] if `cancel` fires before the last entity is drawn.
    pub async fn render(&mut self, cancel: &CancellationToken) -> Result<Option<Image>> {
        self.render_frame(cancel)
    }

    fn render_frame(&mut self, cancel: &CancellationToken) -> Result<Option<Image>> {
        if self.options.entities.is_empty() {
            debug!("No entities to render");
            return Ok(None);
        }
        let camera = self.options.camera.as_ref().ok_or(Error::MissingCamera)?;
        self.options.validate()?;

        let (width, height) = (self.options.render_width(), self.options.render_height());
        let background = self.options.background_colour();
        let pipeline = Pipeline::new(camera, &self.options)?;

        let mut buffer = match self.frame.take() {
            Some(mut buffer) if buffer.width() == width && buffer.height() == height => {
                buffer.clear(background);
                buffer
            }
            _ => FrameBuffer::new(width, height, background),
        };

        info!(
            width,
            height,
            entities = self.options.entities.len(),
            projection = ?camera.projection(),
            "Rendering frame"
        );

        let mut totals = MeshStats::default();
        for (index, entity) in self.options.entities.iter().enumerate() {
            if cancel.is_cancelled() {
                warn!(index, "Render cancelled");
                return Err(Error::Cancelled);
            }

            match entity {
                Entity::Mesh(mesh) => {
                    let stats = pipeline.draw_mesh(
                        mesh,
                        &self.rasterizer,
                        &mut self.scratch,
                        &mut buffer,
                    )?;
                    trace!(index, ?stats, "Drew mesh");
                    if stats.unstyled > 0 {
                        debug!(index, count = stats.unstyled, "Skipped primitives without a solid style");
                    }
                    totals.edges_drawn += stats.edges_drawn;
                    totals.triangles_drawn += stats.triangles_drawn;
                    totals.culled += stats.culled;
                    totals.clipped_away += stats.clipped_away;
                    totals.unstyled += stats.unstyled;
                }
                Entity::Camera(_) => trace!(index, kind = entity.kind(), "Nothing to draw"),
            }
        }

        let image = Image::from_frame_buffer(&buffer);
        self.frame = Some(buffer);
        self.clear_updates();

        info!(
            edges = totals.edges_drawn,
            triangles = totals.triangles_drawn,
            culled = totals.culled,
            clipped = totals.clipped_away,
            "Frame complete"
        );
        Ok(Some(image))
    }

    fn clear_updates(&mut self) {
        self.options.clear_updates();
        if let Some(camera) = self.options.camera.as_mut() {
            camera.clear_updates();
        }
        for entity in &mut self.options.entities {
            entity.clear_updates();
        }
    }
}
