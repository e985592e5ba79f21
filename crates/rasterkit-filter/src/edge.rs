//! Edge detection
//!
//! Sobel gradient magnitude over an RGBA raster.
//!
//! Both gradient images come from [`convolve`](crate::convolve), so each
//! gradient channel has already been clamped to [0, 255]: negative
//! responses read as 0. The magnitude uses the red channel of the two
//! gradients only. Green and blue gradients are computed and discarded,
//! and the output is a gray raster (R = G = B = magnitude).

use crate::convolve::convolve_with_border;
use crate::{BorderMode, FilterResult, Kernel};
use rasterkit_core::{Raster, color};

/// Apply Sobel edge detection, skipping out-of-bounds neighbors.
///
/// # Example
///
/// ```
/// use rasterkit_core::Raster;
/// use rasterkit_filter::sobel_edge;
///
/// let raster = Raster::filled(5, 5, [80, 80, 80, 255]).unwrap();
/// let edges = sobel_edge(&raster).unwrap();
/// assert_eq!(edges.get_rgba(2, 2), Some([0, 0, 0, 255]));
/// ```
pub fn sobel_edge(raster: &Raster) -> FilterResult<Raster> {
    sobel_edge_with_border(raster, BorderMode::default())
}

/// Apply Sobel edge detection using the given border mode for both
/// gradient convolutions.
pub fn sobel_edge_with_border(raster: &Raster, border: BorderMode) -> FilterResult<Raster> {
    log::debug!(
        "sobel_edge: {}x{} border={}",
        raster.width(),
        raster.height(),
        border
    );
    let grad_x = convolve_with_border(raster, &Kernel::sobel_x(), border)?;
    let grad_y = convolve_with_border(raster, &Kernel::sobel_y(), border)?;
    gradient_magnitude(&grad_x, &grad_y)
}

/// Combine two gradient rasters into an edge-magnitude raster.
///
/// Per pixel, `m = clamp(sqrt(gx.R^2 + gy.R^2), 0, 255)`; the output has
/// `R = G = B = m` and the alpha of `grad_x`.
///
/// # Errors
///
/// Returns a [`DimensionMismatch`](rasterkit_core::Error::DimensionMismatch)
/// core error if the rasters differ in size.
pub fn gradient_magnitude(grad_x: &Raster, grad_y: &Raster) -> FilterResult<Raster> {
    grad_x.check_same_size(grad_y)?;

    let mut out = grad_x.new_same_size();
    for ((o, gx), gy) in out
        .pixels_mut()
        .zip(grad_x.pixels())
        .zip(grad_y.pixels())
    {
        let rx = gx[color::RED] as f64;
        let ry = gy[color::RED] as f64;
        let m = color::clamp_channel((rx * rx + ry * ry).sqrt());
        o.copy_from_slice(&color::compose_rgba(m, m, m, gx[color::ALPHA]));
    }
    Ok(out)
}
