//! Error types for bingovision-grid

use thiserror::Error;

/// Grid geometry error type
#[derive(Error, Debug)]
pub enum GridError {
    /// Cell sampling rectangle too small to read
    #[error("degenerate cell at ({row},{col}): {width}x{height} px")]
    DegenerateCell { row: usize, col: usize, width: u32, height: u32 },

    /// Inset outside the valid open interval (0, 0.5)
    #[error("invalid inset: {0} (expected 0 < inset < 0.5)")]
    InvalidInset(f32),

    /// Grid address outside the 5x5 card
    #[error("cell address out of range: ({0},{1})")]
    AddressOutOfRange(usize, usize),

    /// Error from the underlying pixel container
    #[error(transparent)]
    Core(#[from] bingovision_core::Error),
}

/// Result type alias for grid operations
pub type GridResult<T> = std::result::Result<T, GridError>;
