//! Grid-line suppression
//!
//! Thin printed cell rulings that survive binarization show up as mostly
//! black rows or columns hugging the crop edges. Within an outer band,
//! any row or column that is more than half black is painted white.

use bingovision_core::Gray;

/// Fraction of the smaller cell dimension scanned from each edge.
pub const DEFAULT_BAND_FRAC: f32 = 0.12;

/// Minimum band width in pixels.
const MIN_BAND_PX: u32 = 2;

/// Remove grid-line residue from the edge bands, in place.
pub fn suppress_grid_lines(gray: &mut Gray, band_frac: f32) {
    let w = gray.width();
    let h = gray.height();
    let band = ((w.min(h) as f32 * band_frac).round() as u32).max(MIN_BAND_PX);

    for y in 0..h {
        if y >= band && y < h.saturating_sub(band) {
            continue;
        }
        let dark = (0..w).filter(|&x| gray.get_unchecked(x, y) == 0).count() as u32;
        if dark * 2 > w {
            let start = y as usize * w as usize;
            gray.data_mut()[start..start + w as usize].fill(255);
        }
    }

    for x in 0..w {
        if x >= band && x < w.saturating_sub(band) {
            continue;
        }
        let dark = (0..h).filter(|&y| gray.get_unchecked(x, y) == 0).count() as u32;
        if dark * 2 > h {
            for y in 0..h {
                gray.data_mut()[y as usize * w as usize + x as usize] = 255;
            }
        }
    }
}
