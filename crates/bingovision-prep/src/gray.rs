//! Luminance extraction and contrast normalization
//!
//! Grayscale conversion takes the minimum of the three color channels
//! rather than a weighted average: tinted ink strokes are dark in at
//! least one channel, and the darkest channel isolates them best.

use bingovision_core::{Gray, Raster};

/// Convert to single-channel using the per-pixel minimum of R, G, B.
pub fn min_channel_gray(cell: &Raster) -> Gray {
    let mut data = Vec::with_capacity(cell.width() as usize * cell.height() as usize);
    let ch = cell.channels() as usize;
    for px in cell.data().chunks_exact(ch) {
        data.push(px[0].min(px[1]).min(px[2]));
    }
    // Geometry comes from a valid raster, so this cannot fail.
    Gray::from_samples(cell.width(), cell.height(), data)
        .unwrap_or_else(|_| unreachable!("raster geometry is valid"))
}

/// Linearly remap the observed [min, max] range to [0, 255], in place.
///
/// A flat image (max == min) divides by 1 and collapses to zero.
pub fn stretch_contrast(gray: &mut Gray) {
    let (mut lo, mut hi) = (255u8, 0u8);
    for &v in gray.data() {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    let range = (hi.saturating_sub(lo)).max(1) as f32;
    for v in gray.data_mut() {
        *v = (((*v - lo) as f32 / range) * 255.0).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_channel_takes_darkest() {
        let mut cell = Raster::new(1, 1, 3).unwrap();
        cell.set_rgb(0, 0, 200, 40, 120).unwrap();
        let gray = min_channel_gray(&cell);
        assert_eq!(gray.get(0, 0), Some(40));
    }

    #[test]
    fn stretch_spreads_to_full_range() {
        let mut gray = Gray::from_samples(3, 1, vec![100, 150, 200]).unwrap();
        stretch_contrast(&mut gray);
        assert_eq!(gray.data(), &[0, 128, 255]);
    }

    #[test]
    fn flat_image_does_not_divide_by_zero() {
        let mut gray = Gray::new_filled(2, 2, 77).unwrap();
        stretch_contrast(&mut gray);
        assert_eq!(gray.data(), &[0, 0, 0, 0]);
    }
}
