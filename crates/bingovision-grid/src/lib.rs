//! bingovision-grid - Quadrilateral mapping and cell extraction
//!
//! Turns four hand-placed corner handles into per-cell pixel crops:
//!
//! - [`CornerSet`]: percentage-based handles, serializable card state
//! - [`Quad`]: bilinear mapper from normalized grid space to pixels
//! - [`cell_bounds`] / [`extract`]: inset sampling rectangles and crops
//!
//! # Example
//!
//! ```
//! use bingovision_core::Raster;
//! use bingovision_grid::{CellAddress, CornerSet, DEFAULT_INSET, cell_bounds, extract};
//!
//! let photo = Raster::new(800, 600, 4).unwrap();
//! let quad = CornerSet::default().to_quad(photo.width(), photo.height());
//! let addr = CellAddress::new(0, 0).unwrap();
//! let rect = cell_bounds(&quad, addr, DEFAULT_INSET).unwrap();
//! let cell = extract(&photo, addr, rect).unwrap();
//! assert!(cell.width() >= 5);
//! ```

mod cell;
mod corners;
mod error;
mod mapper;

pub use cell::{
    CellAddress, DEFAULT_INSET, GRID_SIZE, MIN_CELL_PX, cell_bounds, extract, validate_inset,
};
pub use corners::{CornerPoint, CornerSet};
pub use error::{GridError, GridResult};
pub use mapper::Quad;
