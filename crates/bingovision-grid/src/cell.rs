//! Cell addressing and extraction
//!
//! A card is a fixed 5x5 grid. Each cell is sampled from the source photo
//! through the quadrilateral mapper with an inset margin so the printed
//! cell border and neighboring numerals stay out of the crop.

use crate::error::{GridError, GridResult};
use crate::mapper::Quad;
use bingovision_core::{Raster, Rect};
use serde::{Deserialize, Serialize};

/// Number of rows and columns on a card.
pub const GRID_SIZE: usize = 5;

/// Default sampling inset: light enough to preserve small digits in
/// low-resolution photos.
pub const DEFAULT_INSET: f32 = 0.12;

/// Minimum usable sampling rectangle edge, in pixels. Anything smaller is
/// reported as degenerate rather than extracted.
pub const MIN_CELL_PX: u32 = 5;

/// A (row, col) grid position, both in [0, 4].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellAddress {
    pub row: usize,
    pub col: usize,
}

impl CellAddress {
    pub fn new(row: usize, col: usize) -> GridResult<Self> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GridError::AddressOutOfRange(row, col));
        }
        Ok(Self { row, col })
    }

    /// Iterate all 25 cells in row-major order. Progress reporting relies
    /// on this ordering.
    pub fn all() -> impl Iterator<Item = CellAddress> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| CellAddress { row, col }))
    }

    /// Whether this is the center cell, the one conditionally treated as
    /// pre-marked. The single place that knowledge lives.
    pub fn is_free(&self) -> bool {
        self.row == GRID_SIZE / 2 && self.col == GRID_SIZE / 2
    }
}

/// Compute the inset sampling rectangle for one cell, in source pixels.
///
/// The cell spans `[col/5, (col+1)/5] x [row/5, (row+1)/5]` in grid space;
/// `inset` shrinks that span on all sides before mapping the two corners
/// through the quad.
///
/// # Errors
///
/// Returns [`GridError::InvalidInset`] if `inset` is outside (0, 0.5).
pub fn cell_bounds(quad: &Quad, addr: CellAddress, inset: f32) -> GridResult<Rect> {
    validate_inset(inset)?;
    let n = GRID_SIZE as f32;
    let top_left = quad.map(
        (addr.col as f32 + inset) / n,
        (addr.row as f32 + inset) / n,
    );
    let bottom_right = quad.map(
        (addr.col as f32 + 1.0 - inset) / n,
        (addr.row as f32 + 1.0 - inset) / n,
    );
    Ok(Rect::from_corners(top_left, bottom_right))
}

/// Check an inset against the valid open interval (0, 0.5).
pub fn validate_inset(inset: f32) -> GridResult<()> {
    if !(inset > 0.0 && inset < 0.5) || !inset.is_finite() {
        return Err(GridError::InvalidInset(inset));
    }
    Ok(())
}

/// Crop one cell's pixels out of the source image.
///
/// # Errors
///
/// Returns [`GridError::DegenerateCell`] when the rectangle is under
/// [`MIN_CELL_PX`] on either side; the caller records the cell as
/// unreadable and moves on.
pub fn extract(source: &Raster, addr: CellAddress, rect: Rect) -> GridResult<Raster> {
    if rect.width < MIN_CELL_PX || rect.height < MIN_CELL_PX {
        return Err(GridError::DegenerateCell {
            row: addr.row,
            col: addr.col,
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(source.crop(rect)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_row_major() {
        let order: Vec<_> = CellAddress::all().map(|a| (a.row, a.col)).collect();
        assert_eq!(order.len(), 25);
        assert_eq!(order[0], (0, 0));
        assert_eq!(order[4], (0, 4));
        assert_eq!(order[5], (1, 0));
        assert_eq!(order[24], (4, 4));
    }

    #[test]
    fn only_center_is_free() {
        let free: Vec<_> = CellAddress::all().filter(CellAddress::is_free).collect();
        assert_eq!(free, vec![CellAddress { row: 2, col: 2 }]);
    }

    #[test]
    fn address_bounds_checked() {
        assert!(CellAddress::new(4, 4).is_ok());
        assert!(CellAddress::new(5, 0).is_err());
    }
}
