//! Pixel access functions
//!
//! Getting and setting individual RGBA pixels. The checked variants
//! return `None` / an error outside the raster; the `_unchecked`
//! variants are for hot loops that already iterate within bounds.

use super::Raster;
use crate::color;
use crate::error::{Error, Result};

impl Raster {
    /// Get the RGBA value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_rgba_unchecked(x, y))
    }

    /// Get the RGBA value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the offset of `(x, y)` is beyond the pixel data.
    #[inline]
    pub fn get_rgba_unchecked(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        let d = self.data();
        [d[i], d[i + 1], d[i + 2], d[i + 3]]
    }

    /// Get a single channel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds or `channel >= 4`.
    pub fn get_channel(&self, x: u32, y: u32, channel: usize) -> Option<u8> {
        if channel >= color::CHANNELS {
            return None;
        }
        self.get_rgba(x, y).map(|p| p[channel])
    }

    /// Set the RGBA value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, pixel: [u8; 4]) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_rgba_unchecked(x, y, pixel);
        Ok(())
    }

    /// Set the RGBA value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the offset of `(x, y)` is beyond the pixel data.
    #[inline]
    pub fn set_rgba_unchecked(&mut self, x: u32, y: u32, pixel: [u8; 4]) {
        let i = self.offset(x, y);
        self.data_mut()[i..i + color::CHANNELS].copy_from_slice(&pixel);
    }
}
