//! bingovision-prep - Cell image preprocessing
//!
//! Deterministic pixel transforms that turn an extracted cell crop into a
//! clean binary glyph for digit recognition. See [`prepare`] for the
//! fixed stage order; each stage is also exported on its own for tests
//! and for callers that want a partial pipeline.
//!
//! # Example
//!
//! ```
//! use bingovision_core::{Palette, Raster};
//! use bingovision_prep::{PrepOptions, prepare};
//!
//! let cell = Raster::new(60, 60, 4).unwrap();
//! let glyph = prepare(&cell, &Palette::default(), &PrepOptions::default());
//! assert_eq!(glyph.height(), 150 + 2 * 25);
//! ```

mod background;
mod denoise;
mod gray;
mod lines;
mod pipeline;
mod resize;
mod threshold;

pub use background::suppress_background;
pub use denoise::despeckle;
pub use gray::{min_channel_gray, stretch_contrast};
pub use lines::{DEFAULT_BAND_FRAC, suppress_grid_lines};
pub use pipeline::{PrepOptions, prepare};
pub use resize::{scale_and_pad, trim_border};
pub use threshold::{apply_threshold, compute_otsu_threshold, threshold_otsu};
