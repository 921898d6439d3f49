//! Conversions from `image` crate buffers
//!
//! Available with the `image-interop` feature. Upload and camera capture
//! live outside this workspace; collaborators that already hold a decoded
//! `image` buffer can hand it over without copying through an
//! intermediate format.

use crate::error::Result;
use crate::raster::Raster;

impl Raster {
    /// Consume an `image::RgbaImage` into a 4-channel raster.
    pub fn from_rgba_image(img: image::RgbaImage) -> Result<Raster> {
        let (w, h) = img.dimensions();
        Raster::from_samples(w, h, 4, img.into_raw())
    }

    /// Consume an `image::RgbImage` into a 3-channel raster.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Raster> {
        let (w, h) = img.dimensions();
        Raster::from_samples(w, h, 3, img.into_raw())
    }
}
