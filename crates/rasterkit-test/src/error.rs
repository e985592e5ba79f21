//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Raster sizes differ
    #[error("raster comparison failed at index {index}: {expected:?} vs {actual:?}")]
    SizeMismatch {
        index: usize,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Raster pixels differ
    #[error("raster comparison failed at index {index}: pixel ({x}, {y}) {expected:?} vs {actual:?}")]
    PixelMismatch {
        index: usize,
        x: u32,
        y: u32,
        expected: [u8; 4],
        actual: [u8; 4],
    },

    /// Invalid synthetic fixture parameters
    #[error("invalid fixture: {0}")]
    Fixture(#[from] rasterkit_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
