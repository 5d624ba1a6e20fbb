//! Rendering configuration.
//!
//! [`RenderingOptions`] bundles everything a frame depends on: the output
//! size, the background colour, the entities to draw and the camera to draw
//! them with.

use crate::camera::Camera;
use crate::colour::Colour;
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::math::Mat4;
use crate::update::{RenderUpdate, Tracked};

pub const DEFAULT_RENDER_WIDTH: u32 = 1920;
pub const DEFAULT_RENDER_HEIGHT: u32 = 1080;
pub const DEFAULT_BACKGROUND_COLOUR: Colour = Colour::WHITE;

#[derive(Clone, Debug)]
pub struct RenderingOptions {
    render_width: u32,
    render_height: u32,
    background_colour: Colour,
    pub entities: Vec<Entity>,
    pub camera: Option<Camera>,
    pending: RenderUpdate,
}

impl Default for RenderingOptions {
    fn default() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            background_colour: DEFAULT_BACKGROUND_COLOUR,
            entities: Vec::new(),
            camera: None,
            pending: RenderUpdate::NEW_RENDER,
        }
    }
}

impl RenderingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, render_width: u32, render_height: u32) -> Self {
        self.render_width = render_width;
        self.render_height = render_height;
        self
    }

    pub fn with_background_colour(mut self, colour: Colour) -> Self {
        self.background_colour = colour;
        self
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn with_entity(mut self, entity: impl Into<Entity>) -> Self {
        self.entities.push(entity.into());
        self
    }

    pub fn with_entities<I>(mut self, entities: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Entity>,
    {
        self.entities.extend(entities.into_iter().map(Into::into));
        self
    }

    /// Checks that a frame with these options can be allocated.
    ///
    /// # Errors
    /// [`Error::InvalidDimensions`] if either side of the output is zero.
    pub fn validate(&self) -> Result<()> {
        if self.render_width == 0 || self.render_height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.render_width,
                height: self.render_height,
            });
        }
        Ok(())
    }

    pub fn render_width(&self) -> u32 {
        self.render_width
    }

    pub fn render_height(&self) -> u32 {
        self.render_height
    }

    pub fn set_render_size(&mut self, render_width: u32, render_height: u32) {
        self.render_width = render_width;
        self.render_height = render_height;
        self.pending |= RenderUpdate::NEW_RENDER;
    }

    pub fn background_colour(&self) -> Colour {
        self.background_colour
    }

    pub fn set_background_colour(&mut self, colour: Colour) {
        self.background_colour = colour;
        self.pending |= RenderUpdate::NEW_RENDER;
    }

    pub fn screen_to_window(&self) -> Mat4 {
        Mat4::screen_to_window(self.render_width, self.render_height)
    }
}

/// Covers the options' own settings, not the camera or entities they hold.
impl Tracked for RenderingOptions {
    fn pending_updates(&self) -> RenderUpdate {
        self.pending
    }

    fn clear_updates(&mut self) {
        self.pending = RenderUpdate::empty();
    }
}
