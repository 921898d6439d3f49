//! Background color palette
//!
//! Printed bingo cards often carry colored or patterned cell backgrounds.
//! The preprocessor paints pixels close to a known background color to
//! white before extracting the glyph. This module holds that palette: an
//! ordered, user-extensible list of colors, each individually toggleable.
//!
//! Matching uses a perceptually weighted squared distance with the green
//! channel weighted highest, because background hues in this domain are
//! green-biased:
//!
//! ```text
//! d² = 2·Δr² + 4·Δg² + 3·Δb²
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An 8-bit RGB color, serialized as a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Weighted squared distance to another color.
    pub fn dist_sq(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (2 * dr * dr + 4 * dg * dg + 3 * db * db) as u32
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidHexColor(s.to_string()));
        }
        let n = u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidHexColor(s.to_string()))?;
        Ok(Rgb::new((n >> 16) as u8, (n >> 8) as u8, n as u8))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> String {
        c.to_string()
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// A palette color together with its enabled flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub color: Rgb,
    pub active: bool,
}

/// Ordered list of background colors.
///
/// Order is insertion order and has no effect on matching; every active
/// entry is checked independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

/// Stock background colors shipped with the application.
const DEFAULT_COLORS: [&str; 9] = [
    "#CB797F", "#7FA470", "#C85C80", "#DE9E20", "#C49114", "#2A4A18", "#7A1C5A", "#63154F",
    "#539ED5",
];

impl Default for Palette {
    fn default() -> Self {
        let entries = DEFAULT_COLORS
            .iter()
            .map(|hex| PaletteEntry {
                // The constants above are valid hex by construction.
                color: hex.parse().unwrap(),
                active: true,
            })
            .collect();
        Self { entries }
    }
}

impl Palette {
    /// An empty palette (background suppression becomes a no-op).
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Add a color as active. Duplicates (by color) are ignored.
    pub fn insert(&mut self, color: Rgb) {
        if self.entries.iter().any(|e| e.color == color) {
            return;
        }
        self.entries.push(PaletteEntry { color, active: true });
    }

    /// Toggle the entry at `index`; out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.active = !entry.active;
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// Iterate over the colors currently enabled for matching.
    pub fn active_colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.entries.iter().filter(|e| e.active).map(|e| e.color)
    }

    pub fn has_active(&self) -> bool {
        self.entries.iter().any(|e| e.active)
    }
}
