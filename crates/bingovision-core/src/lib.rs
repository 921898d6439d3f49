//! bingovision-core - Pixel containers and primitives for BingoVision
//!
//! This crate holds the data model shared by the geometric sampling,
//! preprocessing, and recognition crates:
//!
//! - [`Raster`] / [`Gray`]: owned 8-bit image buffers
//! - [`Point`] / [`Rect`]: geometry primitives
//! - [`Rgb`] / [`Palette`]: the background-color suppression palette
//!
//! # Example
//!
//! ```
//! use bingovision_core::{Raster, Rect};
//!
//! let raster = Raster::new(640, 480, 4).unwrap();
//! let cell = raster.crop(Rect::new(100, 100, 80, 80)).unwrap();
//! assert_eq!(cell.width(), 80);
//! ```

mod error;
mod geometry;
#[cfg(feature = "image-interop")]
mod interop;
mod palette;
mod raster;

pub use error::{Error, Result};
pub use geometry::{Point, Rect};
pub use palette::{Palette, PaletteEntry, Rgb};
pub use raster::{Gray, Raster, luminance};
