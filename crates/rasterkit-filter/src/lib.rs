//! rasterkit-filter - Neighborhood filtering operations
//!
//! This crate provides filters over RGBA rasters:
//!
//! - Convolution with arbitrary square, odd-sized kernels
//! - Blur operations (3x3 smoothing, 3x3 Gaussian blur)
//! - Median filtering over a 3x3 window
//! - Sobel edge magnitude
//!
//! Every filter processes R, G and B and copies alpha from the source.
//! Neighbors outside the raster are skipped by default; see [`BorderMode`].

pub mod border;
pub mod convolve;
pub mod edge;
mod error;
pub mod kernel;
pub mod rank;

pub use border::BorderMode;
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{convolve, convolve_with_border, gaussian_blur, smooth};
pub use edge::{gradient_magnitude, sobel_edge, sobel_edge_with_border};
pub use rank::{median_filter, median_filter_with_border};
