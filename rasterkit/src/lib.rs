//! rasterkit - Pixel-level RGBA raster transformations
//!
//! This is the facade crate that re-exports the rasterkit components:
//!
//! - **core**: [`Raster`], pointwise arithmetic, grayscale conversion
//! - **filter**: convolution, smoothing, Gaussian blur, median, Sobel
//! - **ops**: operations selected by name, as a control surface supplies them
//!
//! # Example
//!
//! ```
//! use rasterkit::Raster;
//! use rasterkit::ops::{Operation, apply_all};
//!
//! let raster = Raster::filled(4, 4, [120, 60, 30, 255]).unwrap();
//! let ops = [
//!     Operation::parse("luminosity", 0.0).unwrap(),
//!     Operation::parse("median", 0.0).unwrap(),
//! ];
//! let out = apply_all(&raster, &ops).unwrap();
//! assert!(out.is_grayscale());
//! ```

pub use rasterkit_core::*;

pub use rasterkit_filter as filter;
pub use rasterkit_filter::{
    BorderMode, FilterError, FilterResult, Kernel, convolve, convolve_with_border, gaussian_blur,
    gradient_magnitude, median_filter, median_filter_with_border, smooth, sobel_edge,
    sobel_edge_with_border,
};

pub mod ops;

pub use ops::{Operation, apply_all};
