//! Rasterkit Core - RGBA raster buffer and pointwise operations
//!
//! This crate provides the fundamental data structure used throughout
//! rasterkit, together with the operations that touch one pixel at a time:
//!
//! - [`Raster`] - Interleaved 8-bit RGBA image buffer
//! - Brightness and constant arithmetic ([`ArithOp`])
//! - Grayscale conversion ([`GrayMethod`])
//! - Raster comparison helpers
//!
//! Neighborhood filters live in `rasterkit-filter`.

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{ArithOp, GrayMethod, Raster};

/// Channel layout and helpers for interleaved RGBA pixels.
///
/// # Pixel format
///
/// Each pixel occupies 4 consecutive bytes in `R, G, B, A` order.
pub mod color {
    /// Red channel offset within a pixel
    pub const RED: usize = 0;
    /// Green channel offset
    pub const GREEN: usize = 1;
    /// Blue channel offset
    pub const BLUE: usize = 2;
    /// Alpha channel offset
    pub const ALPHA: usize = 3;

    /// Bytes per pixel
    pub const CHANNELS: usize = 4;

    /// Color channels processed by every filter; alpha is passed through.
    pub const RGB: [usize; 3] = [RED, GREEN, BLUE];

    /// Round and saturate a floating-point channel value into `u8`.
    ///
    /// Exact halves round to the nearest even value (`2.5 -> 2`,
    /// `3.5 -> 4`). NaN maps to 0.
    #[inline]
    pub fn clamp_channel(value: f64) -> u8 {
        value.round_ties_even().clamp(0.0, 255.0) as u8
    }

    /// Single-precision variant of [`clamp_channel`].
    #[inline]
    pub fn clamp_channel_f32(value: f32) -> u8 {
        value.round_ties_even().clamp(0.0, 255.0) as u8
    }

    /// Compose a pixel from its channels.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
        [r, g, b, a]
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_clamp_channel_saturates() {
            assert_eq!(clamp_channel(-12.0), 0);
            assert_eq!(clamp_channel(300.0), 255);
            assert_eq!(clamp_channel(254.6), 255);
            assert_eq!(clamp_channel(f64::NAN), 0);
        }

        #[test]
        fn test_clamp_channel_rounds() {
            assert_eq!(clamp_channel(99.999_99), 100);
            assert_eq!(clamp_channel(20.33), 20);
        }

        #[test]
        fn test_clamp_channel_ties_to_even() {
            assert_eq!(clamp_channel(2.5), 2);
            assert_eq!(clamp_channel(3.5), 4);
            assert_eq!(clamp_channel(0.5), 0);
            assert_eq!(clamp_channel(254.5), 254);
            assert_eq!(clamp_channel_f32(126.5), 126);
            assert_eq!(clamp_channel_f32(127.5), 128);
        }

        #[test]
        fn test_compose() {
            assert_eq!(compose_rgba(1, 2, 3, 4)[ALPHA], 4);
        }
    }
}
