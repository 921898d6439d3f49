//! Pixel containers
//!
//! `Raster` is the color image type used by the extraction and
//! background-suppression stages: 8-bit samples, 3 (RGB) or 4 (RGBA)
//! channels, row-major with no row padding. `Gray` is the single-channel
//! counterpart produced by the luminance-extraction stage and consumed by
//! everything downstream of it, including the recognition engine boundary.
//!
//! Both types own their data. Cell buffers are transient: extracted,
//! transformed in place, handed to the classifier, and dropped.

use crate::error::{Error, Result};
use crate::geometry::Rect;

/// ITU-R BT.601 luma weights, used wherever "dark enough to be ink"
/// decisions are made.
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// An owned 8-bit color image with 3 or 4 channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl Raster {
    /// Create a white-filled raster. Alpha (if present) is opaque.
    pub fn new(width: u32, height: u32, channels: u8) -> Result<Self> {
        check_geometry(width, height, channels)?;
        let data = vec![255u8; width as usize * height as usize * channels as usize];
        Ok(Self { width, height, channels, data })
    }

    /// Wrap an existing interleaved sample buffer.
    pub fn from_samples(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        check_geometry(width, height, channels)?;
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(Error::BufferSize { expected, actual: data.len() });
        }
        Ok(Self { width, height, channels, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize
    }

    /// Get the RGB components at (x, y). Alpha is ignored.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some((self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Set the RGB components at (x, y), leaving alpha untouched.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        let i = self.offset(x, y);
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
        Ok(())
    }

    /// BT.601 luminance at (x, y).
    pub fn luminance(&self, x: u32, y: u32) -> Option<f32> {
        self.get_rgb(x, y).map(|(r, g, b)| luminance(r, g, b))
    }

    /// Extract a rectangular sub-region.
    ///
    /// The rectangle is clipped to the image bounds. Returns an error if it
    /// lies entirely outside the image or clips down to nothing.
    pub fn crop(&self, rect: Rect) -> Result<Raster> {
        let (x0, y0, w, h) = clip_rect(rect, self.width, self.height)?;
        let mut out = Raster::new(w, h, self.channels)?;
        let ch = self.channels as usize;
        let row_bytes = w as usize * ch;
        for row in 0..h {
            let src = self.offset(x0, y0 + row);
            let dst = row as usize * row_bytes;
            out.data[dst..dst + row_bytes].copy_from_slice(&self.data[src..src + row_bytes]);
        }
        Ok(out)
    }

    /// Scale by an integer factor using pixel replication.
    ///
    /// Used to upscale small source photos before cell sampling; factor 1
    /// returns a plain copy.
    pub fn upscale(&self, factor: u32) -> Result<Raster> {
        let factor = factor.max(1);
        let mut out = Raster::new(self.width * factor, self.height * factor, self.channels)?;
        for y in 0..out.height {
            for x in 0..out.width {
                let (r, g, b) = self
                    .get_rgb(x / factor, y / factor)
                    .ok_or(Error::OutOfBounds { x, y, width: self.width, height: self.height })?;
                out.set_rgb(x, y, r, g, b)?;
            }
        }
        Ok(out)
    }
}

/// An owned 8-bit single-channel image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gray {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Gray {
    /// Create a gray image filled with the given value.
    pub fn new_filled(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self { width, height, data: vec![value; width as usize * height as usize] })
    }

    pub fn from_samples(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSize { expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Value at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
        Ok(())
    }

    /// Extract a rectangular sub-region, clipped to the image bounds.
    pub fn crop(&self, rect: Rect) -> Result<Gray> {
        let (x0, y0, w, h) = clip_rect(rect, self.width, self.height)?;
        let mut data = Vec::with_capacity(w as usize * h as usize);
        for row in 0..h {
            let start = (y0 + row) as usize * self.width as usize + x0 as usize;
            data.extend_from_slice(&self.data[start..start + w as usize]);
        }
        Gray::from_samples(w, h, data)
    }
}

fn check_geometry(width: u32, height: u32, channels: u8) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    if channels != 3 && channels != 4 {
        return Err(Error::InvalidChannels(channels));
    }
    Ok(())
}

/// Clip a rectangle against an image, returning (x, y, w, h) in-bounds.
fn clip_rect(rect: Rect, width: u32, height: u32) -> Result<(u32, u32, u32, u32)> {
    let outside = Error::RectOutsideImage {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
    };
    if rect.width == 0 || rect.height == 0 {
        return Err(outside);
    }
    let x0 = rect.x.max(0) as u32;
    let y0 = rect.y.max(0) as u32;
    let x1 = rect.x.saturating_add(rect.width as i32).max(0) as u32;
    let y1 = rect.y.saturating_add(rect.height as i32).max(0) as u32;
    let x1 = x1.min(width);
    let y1 = y1.min(height);
    if x0 >= x1 || y0 >= y1 {
        return Err(outside);
    }
    Ok((x0, y0, x1 - x0, y1 - y0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_clips_to_bounds() {
        let r = Raster::new(10, 8, 3).unwrap();
        let c = r.crop(Rect::new(7, 5, 6, 6)).unwrap();
        assert_eq!((c.width(), c.height()), (3, 3));
    }

    #[test]
    fn crop_outside_is_an_error() {
        let r = Raster::new(10, 8, 3).unwrap();
        assert!(r.crop(Rect::new(20, 0, 4, 4)).is_err());
        assert!(r.crop(Rect::new(0, 0, 0, 4)).is_err());
    }

    #[test]
    fn upscale_replicates_pixels() {
        let mut r = Raster::new(2, 1, 3).unwrap();
        r.set_rgb(1, 0, 10, 20, 30).unwrap();
        let up = r.upscale(3).unwrap();
        assert_eq!((up.width(), up.height()), (6, 3));
        assert_eq!(up.get_rgb(2, 2), Some((255, 255, 255)));
        assert_eq!(up.get_rgb(3, 0), Some((10, 20, 30)));
        assert_eq!(up.get_rgb(5, 2), Some((10, 20, 30)));
    }
}
