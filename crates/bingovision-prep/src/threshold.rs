//! Adaptive binarization via Otsu's method
//!
//! A single global threshold is chosen to maximize the between-class
//! variance between the "ink" and "background" luminance populations.
//! The scan ascends from 0 and uses a strict `>` comparison, so among
//! tied maxima the lowest threshold wins; downstream behavior depends on
//! that exact tie-break.

use bingovision_core::Gray;

/// Fallback threshold when the histogram carries no separable classes
/// (empty or single-population images).
const FALLBACK_THRESHOLD: u8 = 128;

/// Compute Otsu's threshold for a single-channel image.
///
/// Bin `t` is accumulated into the background class at step `t`, so the
/// returned threshold is the highest value that still belongs to the
/// dark class: binarize with `value <= threshold`.
pub fn compute_otsu_threshold(gray: &Gray) -> u8 {
    let mut hist = [0u64; 256];
    for &v in gray.data() {
        hist[v as usize] += 1;
    }
    let n = gray.data().len() as f64;
    let total_sum: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut weight_bg = 0.0f64;
    let mut sum_bg = 0.0f64;
    let mut best = 0.0f64;
    let mut threshold = FALLBACK_THRESHOLD;
    for t in 0..=255u16 {
        weight_bg += hist[t as usize] as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = n - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += t as f64 * hist[t as usize] as f64;
        let mean_diff = sum_bg / weight_bg - (total_sum - sum_bg) / weight_fg;
        let variance = weight_bg * weight_fg * mean_diff * mean_diff;
        if variance > best {
            best = variance;
            threshold = t as u8;
        }
    }
    threshold
}

/// Binarize in place: values at or below the threshold become black (0),
/// the rest white (255).
pub fn apply_threshold(gray: &mut Gray, threshold: u8) {
    for v in gray.data_mut() {
        *v = if *v <= threshold { 0 } else { 255 };
    }
}

/// Convenience: compute the Otsu threshold and binarize in place.
pub fn threshold_otsu(gray: &mut Gray) -> u8 {
    let t = compute_otsu_threshold(gray);
    apply_threshold(gray, t);
    t
}
