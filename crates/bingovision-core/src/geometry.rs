//! Geometry primitives
//!
//! Small value types shared by the grid mapper and the extractors.

use serde::{Deserialize, Serialize};

/// A point in continuous pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two points.
    pub fn lerp(a: Point, b: Point, t: f32) -> Point {
        Point {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
        }
    }
}

/// An axis-aligned integer pixel rectangle.
///
/// The origin may be negative (a sampling window can start outside the
/// image); consumers clip against the image bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle from two corner points, rounding to whole pixels.
    ///
    /// Degenerate input (second corner not strictly below and to the right
    /// of the first) yields a zero-sized rectangle rather than an error;
    /// size checks happen at extraction time.
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        let x = top_left.x.round() as i32;
        let y = top_left.y.round() as i32;
        let w = (bottom_right.x - top_left.x).round().max(0.0) as u32;
        let h = (bottom_right.y - top_left.y).round().max(0.0) as u32;
        Rect::new(x, y, w, h)
    }
}
