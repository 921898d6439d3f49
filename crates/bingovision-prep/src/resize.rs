//! Border trim, rescale and pad
//!
//! The final stages: crop a residual-border margin, scale the glyph so
//! its height hits a fixed target using nearest-neighbor sampling (no
//! smoothing, recognition engines want crisp edges), and surround it with
//! a white margin.

use bingovision_core::{Gray, Rect};

/// Crop `trim_frac` of the width/height from each side.
///
/// If the trim would consume the whole image, the input is returned
/// unchanged; tiny crops flow through the pipeline untouched.
pub fn trim_border(gray: &Gray, trim_frac: f32) -> Gray {
    let tx = (gray.width() as f32 * trim_frac).round() as u32;
    let ty = (gray.height() as f32 * trim_frac).round() as u32;
    if gray.width() <= 2 * tx || gray.height() <= 2 * ty {
        return gray.clone();
    }
    let rect = Rect::new(
        tx as i32,
        ty as i32,
        gray.width() - 2 * tx,
        gray.height() - 2 * ty,
    );
    // Non-empty and fully inside by the guard above.
    gray.crop(rect).unwrap_or_else(|_| gray.clone())
}

/// Scale so the height becomes `target_height` (factor floored at 1, so
/// already-large glyphs are not shrunk), then pad with white on all sides.
pub fn scale_and_pad(gray: &Gray, target_height: u32, padding: u32) -> Gray {
    let target_height = target_height.max(1);
    let scale = (target_height as f32 / gray.height() as f32).max(1.0);
    let sw = (gray.width() as f32 * scale).round() as u32;
    let sh = (gray.height() as f32 * scale).round() as u32;

    let out_w = sw + 2 * padding;
    let mut out = Gray::new_filled(out_w, sh + 2 * padding, 255)
        .unwrap_or_else(|_| unreachable!("output dimensions are nonzero"));
    for oy in 0..sh {
        let sy = ((oy as f32 / scale) as u32).min(gray.height() - 1);
        let row = (oy + padding) as usize * out_w as usize + padding as usize;
        for ox in 0..sw {
            let sx = ((ox as f32 / scale) as u32).min(gray.width() - 1);
            out.data_mut()[row + ox as usize] = gray.get_unchecked(sx, sy);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_removes_eight_percent_margin() {
        let gray = Gray::new_filled(100, 50, 255).unwrap();
        let trimmed = trim_border(&gray, 0.08);
        assert_eq!((trimmed.width(), trimmed.height()), (84, 42));
    }

    #[test]
    fn trim_on_tiny_image_is_a_no_op() {
        let gray = Gray::new_filled(4, 4, 0).unwrap();
        let trimmed = trim_border(&gray, 0.4);
        assert_eq!((trimmed.width(), trimmed.height()), (4, 4));
    }

    #[test]
    fn scale_hits_target_height_plus_padding() {
        let gray = Gray::new_filled(40, 50, 0).unwrap();
        let out = scale_and_pad(&gray, 150, 25);
        assert_eq!(out.height(), 150 + 50);
        assert_eq!(out.width(), 120 + 50);
    }

    #[test]
    fn large_glyphs_are_not_shrunk() {
        let gray = Gray::new_filled(300, 300, 0).unwrap();
        let out = scale_and_pad(&gray, 150, 25);
        assert_eq!(out.height(), 300 + 50);
    }
}
