//! How edges and faces are drawn.

use crate::colour::Colour;

/// Default colour of generated edges.
pub const DEFAULT_EDGE_COLOUR: Colour = Colour::BLACK;
/// Default colour of generated faces.
pub const DEFAULT_FACE_COLOUR: Colour = Colour::rgb(128, 128, 128);

/// Appearance of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeStyle {
    Solid(Colour),
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self::Solid(DEFAULT_EDGE_COLOUR)
    }
}

impl EdgeStyle {
    /// The flat colour to rasterise with, if this style has one.
    pub fn solid_colour(&self) -> Option<Colour> {
        match self {
            Self::Solid(colour) => Some(*colour),
        }
    }
}

/// Appearance of one side of a triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceStyle {
    Solid(Colour),
    /// This side is never drawn.
    Hidden,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self::Solid(DEFAULT_FACE_COLOUR)
    }
}

impl FaceStyle {
    /// The flat colour to rasterise with. `None` means nothing is drawn.
    pub fn solid_colour(&self) -> Option<Colour> {
        match self {
            Self::Solid(colour) => Some(*colour),
            Self::Hidden => None,
        }
    }
}
