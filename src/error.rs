//! Error types for the rendering pipeline and its math utilities.

use thiserror::Error;

/// Errors that can occur while building scenes or rendering a frame.
#[derive(Debug, Error)]
pub enum Error {
    /// `render` was called without an active camera.
    #[error("No camera has been set on the rendering options")]
    MissingCamera,

    /// The frame was abandoned because its cancellation token fired.
    #[error("Render cancelled")]
    Cancelled,

    /// Render dimensions that cannot hold a single pixel.
    #[error("Invalid render dimensions: {width}x{height} (both must be > 0)")]
    InvalidDimensions { width: u32, height: u32 },

    /// A vector that must have a direction was (approximately) zero.
    #[error("Vector `{0}` cannot be zero")]
    ZeroVector(&'static str),

    /// Two basis directions were supplied that are not perpendicular.
    #[error("Direction vectors are not orthogonal")]
    NotOrthogonal,

    /// A generated shape was asked for too few segments.
    #[error("Invalid resolution: {0} (must be >= 3)")]
    InvalidResolution(usize),

    /// Ring radii that do not describe an annulus.
    #[error("Invalid ring radii: inner {inner}, outer {outer} (need 0 <= inner < outer)")]
    InvalidRadii { inner: f32, outer: f32 },

    /// An edge or triangle refers to a vertex the structure does not have.
    #[error("Vertex index {index} out of range for a structure with {vertices} vertices")]
    InvalidIndex { index: usize, vertices: usize },

    /// Wavefront OBJ data could not be parsed.
    #[error("Failed to load OBJ data: {0}")]
    ObjLoad(#[from] tobj::LoadError),

    /// Image conversion or export failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingCamera;
        assert_eq!(format!("{err}"), "No camera has been set on the rendering options");

        let err = Error::InvalidDimensions {
            width: 0,
            height: 10,
        };
        assert!(format!("{err}").contains("0x10"));

        let err = Error::InvalidIndex {
            index: 5,
            vertices: 1,
        };
        assert!(format!("{err}").contains("index 5"));

        let err = Error::ZeroVector("direction_forward");
        assert!(format!("{err}").contains("direction_forward"));
    }
}
