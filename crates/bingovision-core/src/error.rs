//! Error types for bingovision-core
//!
//! Provides a unified error type for all operations on the core pixel
//! containers. Each variant captures enough context for diagnostics
//! without exposing internal implementation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid number of channels (only 3 or 4 are supported)
    #[error("invalid channel count: {0} (expected 3 or 4)")]
    InvalidChannels(u8),

    /// Sample buffer does not match the declared geometry
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Pixel coordinates out of bounds
    #[error("pixel out of bounds: ({x},{y}) in {width}x{height}")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Crop rectangle lies entirely outside the image
    #[error("rectangle ({x},{y}) {width}x{height} outside image")]
    RectOutsideImage { x: i32, y: i32, width: u32, height: u32 },

    /// Malformed hex color string
    #[error("invalid hex color: {0:?}")]
    InvalidHexColor(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
