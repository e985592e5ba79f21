//! Error types for rasterkit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Channel overflow is never an error: it is handled by saturating the
//! value into the 8-bit range. The variants below are hard failures that
//! leave the input raster untouched.

use thiserror::Error;

/// Rasterkit core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel data length does not match `width * height * 4`
    #[error("invalid buffer length: expected {expected} bytes, got {actual}")]
    InvalidBufferLength { expected: usize, actual: usize },

    /// Pixel coordinate outside the raster
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} raster")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Two rasters that must be combined have different sizes
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Arithmetic division by a zero constant
    #[error("division by zero")]
    DivisionByZero,

    /// Unrecognized method or operation name
    #[error("invalid method: {0}")]
    InvalidMethod(String),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for rasterkit core operations
pub type Result<T> = std::result::Result<T, Error>;
