//! Morphological denoising
//!
//! Single-pass speckle removal on the binarized glyph: an isolated black
//! pixel with fewer than two black 8-neighbors is flipped to white.
//! Stroke interiors and edges always have at least two black neighbors,
//! so continuity is preserved.

use bingovision_core::Gray;

/// Minimum number of black 8-neighbors a black pixel needs to survive.
const MIN_NEIGHBORS: u32 = 2;

/// Remove isolated specks, in place.
///
/// The scan is row-major over the interior (border pixels have no full
/// neighborhood and are left alone) and reads the buffer as it mutates,
/// matching a single sequential erode-like pass rather than a snapshot
/// convolution.
pub fn despeckle(gray: &mut Gray) {
    let w = gray.width();
    let h = gray.height();
    if w < 3 || h < 3 {
        return;
    }
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if gray.get_unchecked(x, y) != 0 {
                continue;
            }
            let mut neighbors = 0u32;
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = (x as i32 + dx) as u32;
                    let ny = (y as i32 + dy) as u32;
                    if gray.get_unchecked(nx, ny) == 0 {
                        neighbors += 1;
                    }
                }
            }
            if neighbors < MIN_NEIGHBORS {
                gray.data_mut()[y as usize * w as usize + x as usize] = 255;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_speck_is_removed() {
        let mut gray = Gray::new_filled(9, 9, 255).unwrap();
        gray.set(4, 4, 0).unwrap();
        despeckle(&mut gray);
        assert_eq!(gray.get(4, 4), Some(255));
    }

    #[test]
    fn stroke_survives() {
        let mut gray = Gray::new_filled(9, 9, 255).unwrap();
        for y in 2..7 {
            gray.set(4, y, 0).unwrap();
        }
        despeckle(&mut gray);
        assert!((3..6).all(|y| gray.get(4, y) == Some(0)));
    }

    #[test]
    fn pair_with_one_neighbor_erodes_in_scan_order() {
        // Two horizontally adjacent pixels: the first sees one neighbor
        // and is cleared, then the second sees none and is cleared too.
        let mut gray = Gray::new_filled(9, 9, 255).unwrap();
        gray.set(4, 4, 0).unwrap();
        gray.set(5, 4, 0).unwrap();
        despeckle(&mut gray);
        assert_eq!(gray.get(4, 4), Some(255));
        assert_eq!(gray.get(5, 4), Some(255));
    }
}
