//! Background color suppression
//!
//! The first stage of cell preparation. Pixels close to a known card
//! background color are painted pure white so the later threshold only
//! has to separate ink from a clean background. Dark pixels are assumed
//! to be text and are never touched, regardless of palette contents.

use bingovision_core::{Palette, Raster, Rgb, luminance};

/// Paint palette-matching background pixels white, in place.
///
/// A pixel is repainted when its luminance is at least `luminance_floor`
/// and its weighted distance to any active palette entry is below
/// `tolerance² · 9` (the factor rescales the slider value to the weighted
/// distance space).
pub fn suppress_background(
    cell: &mut Raster,
    palette: &Palette,
    tolerance: u32,
    luminance_floor: f32,
) {
    if !palette.has_active() {
        return;
    }
    let active: Vec<Rgb> = palette.active_colors().collect();
    let tol_sq = tolerance * tolerance * 9;
    let w = cell.width() as usize;
    let ch = cell.channels() as usize;
    for y in 0..cell.height() {
        for x in 0..cell.width() {
            let Some((r, g, b)) = cell.get_rgb(x, y) else {
                continue;
            };
            if luminance(r, g, b) < luminance_floor {
                continue;
            }
            let px = Rgb::new(r, g, b);
            if active.iter().any(|c| px.dist_sq(*c) < tol_sq) {
                let i = (y as usize * w + x as usize) * ch;
                cell.data_mut()[i..i + 3].fill(255);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_color_palette(color: Rgb) -> Palette {
        let mut p = Palette::empty();
        p.insert(color);
        p
    }

    #[test]
    fn matching_background_goes_white() {
        let mut cell = Raster::new(2, 1, 3).unwrap();
        cell.set_rgb(0, 0, 0xCB, 0x79, 0x7F).unwrap();
        cell.set_rgb(1, 0, 0xCD, 0x7B, 0x80).unwrap();
        let palette = one_color_palette("#CB797F".parse().unwrap());
        suppress_background(&mut cell, &palette, 30, 60.0);
        assert_eq!(cell.get_rgb(0, 0), Some((255, 255, 255)));
        assert_eq!(cell.get_rgb(1, 0), Some((255, 255, 255)));
    }

    #[test]
    fn dark_pixels_survive_even_if_matching() {
        let ink = Rgb::new(20, 20, 20);
        let mut cell = Raster::new(1, 1, 3).unwrap();
        cell.set_rgb(0, 0, ink.r, ink.g, ink.b).unwrap();
        let palette = one_color_palette(ink);
        suppress_background(&mut cell, &palette, 200, 60.0);
        assert_eq!(cell.get_rgb(0, 0), Some((20, 20, 20)));
    }

    #[test]
    fn inactive_entries_do_not_match() {
        let bg = Rgb::new(0x7F, 0xA4, 0x70);
        let mut cell = Raster::new(1, 1, 3).unwrap();
        cell.set_rgb(0, 0, bg.r, bg.g, bg.b).unwrap();
        let mut palette = one_color_palette(bg);
        palette.toggle(0);
        suppress_background(&mut cell, &palette, 100, 60.0);
        assert_eq!(cell.get_rgb(0, 0), Some((bg.r, bg.g, bg.b)));
    }
}
