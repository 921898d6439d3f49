//! Quadrilateral mapper
//!
//! Maps normalized grid coordinates (u, v) onto source-image pixel
//! coordinates given the four corner handles. The transform is bilinear:
//! interpolate along the top and bottom edges at `u`, then between the two
//! results at `v`. It is exact for parallelogram-like distortion only; a
//! full projective homography would correct strong perspective skew, but
//! the handles are tuned by eye against the photo, so the approximation is
//! kept deliberately.

use bingovision_core::Point;

/// Four corner points in source pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl Quad {
    /// Map normalized coordinates to a source pixel position.
    ///
    /// `u` and `v` are typically in [0, 1] but are not clamped; callers
    /// sample slightly inside cell boundaries for inset margins.
    ///
    /// `map(0,0)`, `map(1,0)`, `map(0,1)` and `map(1,1)` return the four
    /// corners exactly.
    pub fn map(&self, u: f32, v: f32) -> Point {
        let top = Point::lerp(self.top_left, self.top_right, u);
        let bottom = Point::lerp(self.bottom_left, self.bottom_right, u);
        Point::lerp(top, bottom, v)
    }
}
