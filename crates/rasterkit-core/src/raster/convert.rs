//! Grayscale conversion
//!
//! Reduces each pixel to a single luminance value written to R, G and B.
//! The raster stays RGBA; alpha is preserved.

use std::fmt;
use std::str::FromStr;

use super::Raster;
use crate::color;
use crate::error::{Error, Result};

/// Luminance weights (ITU-R BT.601)
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Grayscale reduction method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrayMethod {
    /// `(R + G + B) / 3`
    Average,
    /// `0.299 R + 0.587 G + 0.114 B`
    #[default]
    Luminosity,
}

impl GrayMethod {
    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            GrayMethod::Average => "average",
            GrayMethod::Luminosity => "luminosity",
        }
    }

    /// Gray level of one pixel.
    #[inline]
    pub fn gray(self, r: u8, g: u8, b: u8) -> u8 {
        let (r, g, b) = (r as f64, g as f64, b as f64);
        let v = match self {
            GrayMethod::Average => (r + g + b) / 3.0,
            GrayMethod::Luminosity => LUMA_R * r + LUMA_G * g + LUMA_B * b,
        };
        color::clamp_channel(v)
    }
}

impl fmt::Display for GrayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GrayMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "average" => Ok(GrayMethod::Average),
            "luminosity" => Ok(GrayMethod::Luminosity),
            _ => Err(Error::InvalidMethod(format!(
                "unknown grayscale method '{s}'"
            ))),
        }
    }
}

impl Raster {
    /// Convert to grayscale, keeping the RGBA layout.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit_core::{GrayMethod, Raster};
    ///
    /// let raster = Raster::filled(1, 1, [30, 60, 90, 200]).unwrap();
    /// let gray = raster.to_grayscale(GrayMethod::Average);
    /// assert_eq!(gray.get_rgba(0, 0), Some([60, 60, 60, 200]));
    /// ```
    pub fn to_grayscale(&self, method: GrayMethod) -> Raster {
        let mut result = self.clone();
        result.grayscale_inplace(method);
        result
    }

    /// Convert to grayscale in place.
    pub fn grayscale_inplace(&mut self, method: GrayMethod) {
        log::trace!(
            "to_grayscale: {}x{} method={}",
            self.width(),
            self.height(),
            method
        );
        for px in self.pixels_mut() {
            let gray = method.gray(px[color::RED], px[color::GREEN], px[color::BLUE]);
            px[color::RED] = gray;
            px[color::GREEN] = gray;
            px[color::BLUE] = gray;
        }
    }

    /// Check whether every pixel has equal R, G and B.
    pub fn is_grayscale(&self) -> bool {
        self.pixels()
            .all(|p| p[color::RED] == p[color::GREEN] && p[color::GREEN] == p[color::BLUE])
    }
}
