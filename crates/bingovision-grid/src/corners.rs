//! Corner handles
//!
//! A card's position in a photo is described by four hand-placed corner
//! handles, stored as percentages of the source image size so they stay
//! valid when the image is displayed or processed at a different scale.

use crate::mapper::Quad;
use bingovision_core::Point;
use serde::{Deserialize, Serialize};

/// One corner handle, in percent (0-100) of image width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerPoint {
    pub x: f32,
    pub y: f32,
}

impl CornerPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The four corner handles of one card.
///
/// The mapper accepts any finite values; interactive producers clamp to
/// [1, 99] via [`CornerSet::clamped`] so a handle can never be dragged
/// fully off the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerSet {
    pub top_left: CornerPoint,
    pub top_right: CornerPoint,
    pub bottom_left: CornerPoint,
    pub bottom_right: CornerPoint,
}

impl Default for CornerSet {
    /// The seed position for a freshly added card: a centered region
    /// covering most of the photo.
    fn default() -> Self {
        Self {
            top_left: CornerPoint::new(8.0, 18.0),
            top_right: CornerPoint::new(92.0, 18.0),
            bottom_left: CornerPoint::new(8.0, 92.0),
            bottom_right: CornerPoint::new(92.0, 92.0),
        }
    }
}

impl CornerSet {
    /// Copy with every coordinate clamped to [1, 99] percent.
    pub fn clamped(&self) -> CornerSet {
        let clamp = |p: CornerPoint| CornerPoint::new(p.x.clamp(1.0, 99.0), p.y.clamp(1.0, 99.0));
        CornerSet {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_left: clamp(self.bottom_left),
            bottom_right: clamp(self.bottom_right),
        }
    }

    /// Scale the percentage handles into pixel space for a given image size.
    pub fn to_quad(&self, width: u32, height: u32) -> Quad {
        let scale = |p: CornerPoint| {
            Point::new(p.x / 100.0 * width as f32, p.y / 100.0 * height as f32)
        };
        Quad {
            top_left: scale(self.top_left),
            top_right: scale(self.top_right),
            bottom_left: scale(self.bottom_left),
            bottom_right: scale(self.bottom_right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_limits_to_one_ninety_nine() {
        let mut c = CornerSet::default();
        c.top_left = CornerPoint::new(-4.0, 120.0);
        let c = c.clamped();
        assert_eq!(c.top_left, CornerPoint::new(1.0, 99.0));
        assert_eq!(c.bottom_right, CornerPoint::new(92.0, 92.0));
    }

    #[test]
    fn to_quad_scales_percentages() {
        let q = CornerSet::default().to_quad(1000, 500);
        assert_eq!(q.top_left, Point::new(80.0, 90.0));
        assert_eq!(q.bottom_right, Point::new(920.0, 460.0));
    }
}
