//! Raster - The main image container
//!
//! `Raster` owns a width, a height and interleaved 8-bit RGBA pixel data.
//!
//! # Pixel layout
//!
//! - 4 bytes per pixel in `R, G, B, A` order
//! - Rows are stored top to bottom with no padding
//! - The byte offset of `(x, y)` is `(y * width + x) * 4`
//!
//! # Ownership model
//!
//! Operations borrow their input and return a fresh `Raster`. Where an
//! in-place variant exists (`*_inplace`) it takes `&mut self` and mutates
//! the pixel data directly; the length of the data never changes.

mod access;
pub mod arith;
mod compare;
pub mod convert;

pub use arith::ArithOp;
pub use convert::GrayMethod;

use crate::color;
use crate::error::{Error, Result};

/// RGBA raster buffer
///
/// # Examples
///
/// ```
/// use rasterkit_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.data().len(), 640 * 480 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Interleaved RGBA bytes, `width * height * 4` long
    data: Vec<u8>,
}

impl Raster {
    /// Create a new raster with every byte set to zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        Ok(Raster {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Create a raster where every pixel has the same value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        let data = pixel.iter().copied().cycle().take(len).collect();
        Ok(Raster {
            width,
            height,
            data,
        })
    }

    /// Adopt decoded RGBA bytes.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0.
    /// - [`Error::InvalidBufferLength`] if `data.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::InvalidBufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            width,
            height,
            data,
        })
    }

    /// Create a zeroed raster with the same size as `self`.
    pub fn new_same_size(&self) -> Raster {
        Raster {
            width: self.width,
            height: self.height,
            data: vec![0u8; self.data.len()],
        }
    }

    /// Number of bytes needed for a `width` x `height` raster.
    fn byte_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(color::CHANNELS))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable RGBA bytes. The slice cannot be resized.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster and hand back its bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel `(x, y)`. Does not check bounds.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * color::CHANNELS
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(color::CHANNELS)
    }

    /// Iterate mutably over pixels in row-major order.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.data.chunks_exact_mut(color::CHANNELS)
    }
}
