//! Error types for pixel buffer operations.

use thiserror::Error;

/// Errors raised by pixel buffer operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Raw pixel data does not match the stated dimensions.
    #[error("dimension mismatch: expected {expected} bytes, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A region extends past the edge of its buffer.
    #[error("region {x},{y} {width}x{height} exceeds buffer {buffer_width}x{buffer_height}")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        buffer_width: u32,
        buffer_height: u32,
    },

    /// Width x height x 4 bytes does not fit in memory addresses.
    #[error("buffer {width}x{height} is too large")]
    TooLarge { width: u32, height: u32 },

    /// A region string could not be parsed.
    #[error("invalid region {0:?}, expected X,Y,WIDTH,HEIGHT")]
    InvalidRegion(String),

    /// The buffer has no pixels to average.
    #[error("buffer has no pixels")]
    EmptyBuffer,
}

/// Result type alias for pixel buffer operations.
pub type CanvasResult<T> = std::result::Result<T, CanvasError>;
