//! The fixed preparation sequence
//!
//! Turns a raw cell crop into an OCR-ready glyph: black ink on a white
//! background, fixed height, generous white margin. Stages run in a
//! strict order, each consuming the previous stage's output:
//!
//! 1. background color suppression
//! 2. min-channel luminance extraction
//! 3. contrast stretch
//! 4. Otsu binarization
//! 5. grid-line suppression
//! 6. morphological despeckle
//! 7. border trim
//! 8. rescale and pad
//!
//! The pipeline is total: empty or unreadable crops come out as a valid
//! (possibly all-white) image, and the classifier decides readability.

use crate::background::suppress_background;
use crate::denoise::despeckle;
use crate::gray::{min_channel_gray, stretch_contrast};
use crate::lines::suppress_grid_lines;
use crate::resize::{scale_and_pad, trim_border};
use crate::threshold::threshold_otsu;
use bingovision_core::{Gray, Palette, Raster};

/// Tunable parameters of the preparation pipeline.
///
/// The defaults are the values the card scanner ships with; only
/// `tolerance` is normally exposed to the user (as a slider next to the
/// palette editor).
#[derive(Debug, Clone, PartialEq)]
pub struct PrepOptions {
    /// Palette matching tolerance (slider value; compared in the weighted
    /// distance space as `tolerance² · 9`).
    pub tolerance: u32,
    /// Pixels darker than this luminance are never background-suppressed.
    pub luminance_floor: f32,
    /// Edge band fraction scanned for grid-line residue.
    pub band_frac: f32,
    /// Border fraction trimmed from each side after denoising.
    pub trim_frac: f32,
    /// Glyph height after rescaling, in pixels.
    pub target_height: u32,
    /// White margin around the final glyph, in pixels.
    pub padding: u32,
}

impl Default for PrepOptions {
    fn default() -> Self {
        Self {
            tolerance: 60,
            luminance_floor: 60.0,
            band_frac: 0.12,
            trim_frac: 0.08,
            target_height: 150,
            padding: 25,
        }
    }
}

/// Run the full preparation sequence on one extracted cell.
pub fn prepare(cell: &Raster, palette: &Palette, opts: &PrepOptions) -> Gray {
    let mut cell = cell.clone();
    suppress_background(&mut cell, palette, opts.tolerance, opts.luminance_floor);
    let mut gray = min_channel_gray(&cell);
    stretch_contrast(&mut gray);
    threshold_otsu(&mut gray);
    suppress_grid_lines(&mut gray, opts.band_frac);
    despeckle(&mut gray);
    let trimmed = trim_border(&gray, opts.trim_frac);
    scale_and_pad(&trimmed, opts.target_height, opts.padding)
}
